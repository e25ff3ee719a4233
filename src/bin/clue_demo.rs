use clue_clustering::config::{self, RuntimeConfig};
use clue_clustering::io::write_json_file;
use clue_clustering::synthetic::generate_blobs;
use clue_clustering::validation::{count_outliers, validate_results};
use clue_clustering::{ClusteringReport, Clusterer};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let config = match args.len() {
        1 => RuntimeConfig::default(),
        2 if args[1] == "-h" || args[1] == "--help" => {
            println!("{}", usage(&args[0]));
            return Ok(());
        }
        2 => config::load_config(Path::new(&args[1]))?,
        _ => return Err(usage(&args[0])),
    };

    match config.dimensions {
        1 => run_with::<1>(&config),
        2 => run_with::<2>(&config),
        3 => run_with::<3>(&config),
        d => Err(format!("Unsupported dimensions {d} (expected 1, 2 or 3)")),
    }
}

fn run_with<const N: usize>(config: &RuntimeConfig) -> Result<(), String> {
    let domains = config
        .params
        .resolve_domains::<N>()
        .map_err(|e| format!("Invalid domains: {e}"))?;
    let mut data = generate_blobs::<N>(&config.dataset);
    data.wrap_into(&domains);
    let truth = data.truth.clone();

    let mut clusterer = Clusterer::<N>::new(config.params.clone());
    clusterer
        .set_points(data.coordinates, data.weights)
        .map_err(|e| format!("Invalid points: {e}"))?;
    let report = clusterer
        .make_clusters_with_diagnostics(&config.kernel)
        .map_err(|e| format!("Clustering failed: {e}"))?;

    print_text_summary(&report, &truth);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(report: &ClusteringReport, truth: &[i32]) {
    let result = &report.result;
    println!("Clustering summary");
    println!("  points: {}", report.trace.input.points);
    println!("  dimensions: {}", report.trace.input.dimensions);
    println!("  clusters: {}", result.n_clusters);
    println!("  outliers: {}", count_outliers(&result.cluster_index));
    println!(
        "  matches generated blobs: {}",
        validate_results(&result.cluster_index, truth)
    );
    println!("  latency_ms: {:.3}", result.latency_ms);
    for stage in &report.trace.timings.stages {
        println!("    {:<15} {:>9.3} ms", stage.label, stage.elapsed_ms);
    }
    if let Some(tiling) = &report.trace.tiling {
        println!(
            "  tiles: {} ({} per dim), max occupancy {}, empty {}",
            tiling.tile_count, tiling.tiles_per_dim, tiling.max_occupancy, tiling.empty_tiles
        );
    }
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [config.json]\n\nWithout a config, clusters a default 2D synthetic dataset.")
}
