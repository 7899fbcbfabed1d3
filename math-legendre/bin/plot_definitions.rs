use clap::Parser;
use directories::ProjectDirs;
use math_harmonics_legendre::{
    DEFAULT_RESOLUTION, Definition, comparison_figure, sample_grid,
};
use ndarray::Array1;
use std::fs::File;
use std::path::{Path, PathBuf};

/// CLI arguments for the definition comparison figures
#[derive(Parser)]
#[command(name = "plot_definitions")]
#[command(about = "Cross-validate associated Legendre definitions against the reference evaluator")]
struct Args {
    /// Maximum spherical harmonic degree
    #[arg(short, long, default_value = "2")]
    n_max: u32,

    /// Number of sample points over [-1, 1]
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Output directory for HTML figures and JSON tables
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Definitions to plot (comma-separated), if empty plots all
    #[arg(short, long)]
    definitions: Option<String>,

    /// Print the closed form of every cell
    #[arg(long, default_value = "true")]
    show_formulas: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // Default to an environment-based cache path, like the other plot tools
    let output_dir = args.output_dir.unwrap_or_else(|| {
        let proj_dirs = ProjectDirs::from("org", "mathharmonics", "math-harmonics")
            .expect("Failed to determine project directories");
        let figures_dir = proj_dirs.cache_dir().join("figures");
        figures_dir.to_string_lossy().to_string()
    });
    std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

    let definitions: Vec<Definition> = match &args.definitions {
        Some(list) => match list
            .split(',')
            .map(|s| s.trim().parse::<Definition>())
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(parsed) => parsed,
            Err(message) => {
                eprintln!("{}", message);
                std::process::exit(2);
            }
        },
        None => Definition::ALL.to_vec(),
    };

    println!(
        "Comparing {} definitions up to degree {} over {} sample points",
        definitions.len(),
        args.n_max,
        args.resolution
    );

    let grid = sample_grid(args.resolution);

    for definition in definitions {
        if let Err(error) = write_figure(
            definition,
            args.n_max,
            &grid,
            Path::new(&output_dir),
            args.show_formulas,
        ) {
            // Any failure is fatal to this figure; nothing to retry
            eprintln!("Figure for {} failed: {}", definition, error);
            std::process::exit(1);
        }
    }

    println!("Figures saved to directory: {}", output_dir);
}

fn write_figure(
    definition: Definition,
    n_max: u32,
    grid: &Array1<f64>,
    output_dir: &Path,
    show_formulas: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Processing definition: {}", definition);

    let table = definition.table(n_max)?;
    let evaluated = table.evaluate(grid)?;

    if show_formulas {
        for cell in &evaluated.cells {
            println!("  P_{}^{} = {}", cell.n, cell.m, cell.formula);
        }
    }

    let suppressed: usize = evaluated.cells.iter().map(|c| c.non_finite).sum();
    if suppressed > 0 {
        println!(
            "  {} non-finite samples at the domain endpoints (kept as gaps)",
            suppressed
        );
    }

    let figure = comparison_figure(&evaluated)?;

    let html_path: PathBuf = output_dir.join(format!("{}.html", definition.slug()));
    figure.write_html(&html_path);
    println!("  Saved figure {}", html_path.display());

    let json_path = output_dir.join(format!("{}.json", definition.slug()));
    let file = File::create(&json_path)?;
    serde_json::to_writer_pretty(file, &evaluated)?;
    println!("  Saved table {}", json_path.display());

    Ok(())
}
