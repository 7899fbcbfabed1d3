use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math_harmonics_legendre::reference::associated_legendre_grid;
use math_harmonics_legendre::{Definition, sample_grid};

fn bench_reference_evaluator(c: &mut Criterion) {
    let grid = sample_grid(1000);

    c.bench_function("reference_p33_grid", |b| {
        b.iter(|| black_box(associated_legendre_grid(3, 3, black_box(&grid))))
    });

    c.bench_function("reference_p8m5_grid", |b| {
        b.iter(|| black_box(associated_legendre_grid(8, -5, black_box(&grid))))
    });
}

fn bench_definition_pipeline(c: &mut Criterion) {
    let grid = sample_grid(1000);

    c.bench_function("williams_table_build_n3", |b| {
        b.iter(|| black_box(Definition::WilliamsRafaely.table(black_box(3)).unwrap()))
    });

    let table = Definition::ZotterFrank.table(3).unwrap();
    c.bench_function("zotter_table_evaluate_n3", |b| {
        b.iter(|| black_box(table.evaluate(black_box(&grid)).unwrap()))
    });
}

criterion_group!(benches, bench_reference_evaluator, bench_definition_pipeline);
criterion_main!(benches);
