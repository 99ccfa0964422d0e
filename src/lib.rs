//! Square Wine Feed - catalog export for wine price aggregators
//!
//! Fetches item variations and on-hand inventory from the Square API, joins them
//! in memory and writes a pipe-delimited feed file.

pub mod config;
pub mod derive;
pub mod error;
pub mod export;
pub mod feed;
pub mod square;

pub use config::Config;
pub use error::{FeedError, Result};
pub use export::{run, ExportSummary};
pub use feed::{FeedRow, FEED_HEADER};
pub use square::{SquareClient, UsableRow};
