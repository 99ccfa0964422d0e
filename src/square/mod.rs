//! Square API client for catalog and inventory lookups
//!
//! Only the two endpoints the feed needs are wrapped: catalog search and batch
//! inventory counts.

mod catalog;
mod client;
mod inventory;

pub use catalog::{
    build_usable_rows, fetch_usable_rows, format_minor_units, CatalogObject, SearchCatalogResponse,
    UsableRow, PAGE_LIMIT,
};
pub use client::SquareClient;
pub use inventory::{fetch_stock_counts, stock_by_variation, InventoryCount, InventoryCountsResponse};

/// Value sent in the `Square-Version` header on every request
pub const API_VERSION: &str = "2024-01-18";

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
