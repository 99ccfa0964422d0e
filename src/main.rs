//! Square Wine Feed
//!
//! Exports the Square catalog and in-stock inventory of one location as a
//! pipe-delimited feed file for wine price aggregators.

use clap::Parser;
use square_wine_feed::config::{BASE_URL_VAR, DEFAULT_OUTPUT_PATH, LOCATION_ID_VAR};
use square_wine_feed::Config;
use std::path::PathBuf;

/// Export Square catalog and inventory to a wine price feed
#[derive(Parser, Debug)]
#[command(name = "square_wine_feed")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the feed file to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Square location ID (overrides SQUARE_LOCATION_ID)
    #[arg(long)]
    location: Option<String>,

    /// Square API base URL (overrides SQUARE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match Config::from_lookup(|key| lookup_with_overrides(&args, key)) {
        Ok(config) => config.with_output_path(&args.output),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting feed export for location {}", config.location_id);

    match square_wine_feed::run(&config).await {
        Ok(summary) => {
            println!(
                "Wrote {} rows to {}",
                summary.rows_written,
                summary.output_path.display()
            );
        }
        Err(e) => {
            log::error!("Feed export failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Environment lookup where command-line flags take precedence
fn lookup_with_overrides(args: &Args, key: &str) -> Option<String> {
    let flag = match key {
        LOCATION_ID_VAR => args.location.clone(),
        BASE_URL_VAR => args.base_url.clone(),
        _ => None,
    };
    flag.or_else(|| std::env::var(key).ok())
}
