//! Data ingestion orchestrator - runs the unification pipeline and writes
//! the unified dataset to CSV

use anyhow::Result;
use auction_data_ingestion::ingestion::types::SourceCounts;
use auction_data_ingestion::ingestion::write;
use auction_data_ingestion::Pipeline;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    info!("Starting data ingestion");

    let config = Config::from_env();
    info!("Configuration loaded");

    let records = Pipeline::new(&config.baanknet_file, &config.property_details_dir).run();

    write::write_csv(&config.output_file, &records)?;

    let counts = SourceCounts::tally(&records);
    info!(
        "✓ Wrote {} rows to {:?} ({})",
        records.len(),
        config.output_file,
        counts
    );

    Ok(())
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
struct Config {
    baanknet_file: PathBuf,
    property_details_dir: PathBuf,
    output_file: PathBuf,
}

impl Config {
    fn from_env() -> Self {
        Config {
            baanknet_file: env::var("BAANKNET_FILE")
                .unwrap_or_else(|_| "data/baanknet_property_details.json".to_string())
                .into(),

            property_details_dir: env::var("PROPERTY_DETAILS_DIR")
                .unwrap_or_else(|_| "data/property_details".to_string())
                .into(),

            output_file: env::var("OUTPUT_FILE")
                .unwrap_or_else(|_| "unified_property_dataset.csv".to_string())
                .into(),
        }
    }
}
