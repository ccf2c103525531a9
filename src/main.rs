//! Flow EDA - Main Entry Point
//!
//! Linear analysis pipeline over a pre-cleaned flow dataset:
//! load CSV -> print schema info -> print descriptive statistics ->
//! class distribution plot -> correlation heatmap -> feature histograms.
//!
//! Every step runs to completion or fails the process; there is no
//! recovery and no partial output.

mod constants;
mod logic;

use std::path::Path;

use logic::{dataset, summary, viz};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    if let Err(e) = run() {
        log::error!("Analysis failed: {}", e);
        std::process::exit(1);
    }

    log::info!("Analysis complete");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let frame = dataset::load_dataset(Path::new(constants::DATASET_PATH))?;
    log::info!(
        "Loaded '{}': {} rows, {} columns",
        constants::DATASET_PATH,
        frame.n_rows(),
        frame.n_cols()
    );

    let info = summary::dataset_info(&frame);
    println!("### Dataset info:");
    println!("{}", info);
    log::debug!("dataset info: {}", info.to_log_entry());

    let stats = summary::describe(&frame);
    println!("\n### Descriptive statistics:");
    println!("{}", stats);
    log::debug!("descriptive statistics: {}", stats.to_log_entry());

    viz::show_class_distribution(&frame)?;
    viz::show_correlation_heatmap(&frame)?;
    viz::show_feature_histograms(&frame)?;

    Ok(())
}
