//! Batch inventory counts and the stock lookup

use log::{debug, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::{SquareClient, UsableRow};
use crate::error::Result;

const COUNTS_PATH: &str = "/v2/inventory/batch-retrieve-counts";
const IN_STOCK: &str = "IN_STOCK";

/// Response of `POST /v2/inventory/batch-retrieve-counts`
#[derive(Debug, Deserialize, Default)]
pub struct InventoryCountsResponse {
    #[serde(default)]
    pub counts: Vec<InventoryCount>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InventoryCount {
    #[serde(default)]
    pub catalog_object_id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    /// Square sends a decimal string such as "7" or "7.000"
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl InventoryCount {
    /// Quantity as a non-negative whole number, 0 when absent or unparsable
    pub fn whole_quantity(&self) -> u64 {
        let raw = match &self.quantity {
            Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            _ => 0.0,
        };
        if raw.is_finite() && raw > 0.0 {
            raw.trunc() as u64
        } else {
            0
        }
    }
}

/// Fetch in-stock counts for every row's variation at `location_id`
///
/// Returns the variation id -> quantity lookup. The request is sent even when
/// `rows` is empty.
pub async fn fetch_stock_counts(
    client: &SquareClient,
    rows: &[UsableRow],
    location_id: &str,
) -> Result<HashMap<String, String>> {
    info!("Fetching inventory counts for {} variations...", rows.len());

    let ids: Vec<&str> = rows.iter().map(|r| r.variation_id.as_str()).collect();
    let body = json!({
        "catalog_object_ids": ids,
        "location_ids": [location_id],
        "states": [IN_STOCK],
    });
    let value = client.call(COUNTS_PATH, Some(&body)).await?;
    let response: InventoryCountsResponse = serde_json::from_value(value)?;

    let stock = stock_by_variation(&response, location_id);
    info!("Fetched {} inventory counts", stock.len());
    Ok(stock)
}

/// Build the variation id -> quantity lookup
///
/// Counts for other locations or states are ignored; a later count for the
/// same variation replaces an earlier one.
pub fn stock_by_variation(
    response: &InventoryCountsResponse,
    location_id: &str,
) -> HashMap<String, String> {
    response
        .counts
        .iter()
        .filter(|c| c.location_id.as_deref().map_or(true, |loc| loc == location_id))
        .filter(|c| c.state.as_deref().map_or(true, |state| state == IN_STOCK))
        .map(|c| {
            debug!("Stock for {}: {:?}", c.catalog_object_id, c.quantity);
            (c.catalog_object_id.clone(), c.whole_quantity().to_string())
        })
        .collect()
}
