use math_harmonics_legendre::{Definition, comparison_figure, sample_grid};
use std::path::PathBuf;

const DATA_GENERATED: &str = "data_generated";

#[test]
fn plot_definition_comparison_figures() {
    let grid = sample_grid(101);

    let mut out_dir = PathBuf::from(DATA_GENERATED);
    out_dir.push("plot_tests");
    std::fs::create_dir_all(&out_dir).expect("Failed to create plot_tests directory");

    for definition in Definition::ALL {
        let table = definition.table(2).expect("table build failed");
        let evaluated = table.evaluate(&grid).expect("evaluation failed");
        let figure = comparison_figure(&evaluated).expect("figure assembly failed");

        // Basic sanity on the figure JSON before writing anything
        let json: serde_json::Value =
            serde_json::from_str(&figure.to_json()).expect("figure JSON is invalid");
        let traces = json["data"].as_array().expect("missing trace array");
        // 9 populated cells, 2 curves each, plus one placeholder per blank cell
        assert_eq!(traces.len(), 9 * 2 + 6);

        let out = out_dir.join(format!("plot_{}.html", definition.slug()));
        figure.write_html(&out);
        assert!(out.exists(), "expected figure {:?} to be created", out);
    }
}
