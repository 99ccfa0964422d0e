//! The export pipeline: catalog -> inventory -> derived fields -> feed file
//!
//! Each stage is awaited before the next begins; the first error aborts the run
//! before the feed file is touched.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::feed::{write_feed, FeedRow};
use crate::square::{fetch_stock_counts, fetch_usable_rows, SquareClient};

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows_written: usize,
    pub output_path: PathBuf,
}

/// Run one full export with the given configuration
pub async fn run(config: &Config) -> Result<ExportSummary> {
    let client = SquareClient::new(config);

    let rows = fetch_usable_rows(&client).await?;
    let stock = fetch_stock_counts(&client, &rows, &config.location_id).await?;

    let feed_rows: Vec<FeedRow> = rows
        .iter()
        .map(|row| FeedRow::from_usable(row, &stock, &config.search_url))
        .collect();

    let rows_written = write_feed(&config.output_path, &feed_rows)?;

    Ok(ExportSummary {
        rows_written,
        output_path: config.output_path.clone(),
    })
}
