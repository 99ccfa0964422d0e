//! Catalog search and the variation/item join

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use super::SquareClient;
use crate::error::Result;

const SEARCH_PATH: &str = "/v2/catalog/search";

/// Largest page Square returns for a catalog search; larger catalogs are truncated
pub const PAGE_LIMIT: usize = 1000;

/// Response of `POST /v2/catalog/search`
#[derive(Debug, Deserialize, Default)]
pub struct SearchCatalogResponse {
    #[serde(default)]
    pub objects: Vec<CatalogObject>,
    #[serde(default)]
    pub related_objects: Vec<CatalogObject>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A catalog object of any kind; only the data block matching `object_type` is set
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogObject {
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub item_data: Option<ItemData>,
    #[serde(default)]
    pub item_variation_data: Option<ItemVariationData>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemData {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemVariationData {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price_money: Option<Money>,
}

/// Amount in minor currency units (pence, cents)
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Money {
    #[serde(default)]
    pub amount: Option<i64>,
}

/// A variation eligible for export: it has a SKU and a resolved display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsableRow {
    pub sku: String,
    pub name: String,
    pub variation_id: String,
    /// Decimal price with two fraction digits, e.g. "45.99"
    pub price: String,
    pub image_url: Option<String>,
}

/// Fetch all item variations (one page) and join them with their parent items
pub async fn fetch_usable_rows(client: &SquareClient) -> Result<Vec<UsableRow>> {
    info!("Fetching item variations from Square catalog...");

    let body = json!({
        "object_types": ["ITEM_VARIATION"],
        "include_related_objects": true,
        "limit": PAGE_LIMIT,
    });
    let value = client.call(SEARCH_PATH, Some(&body)).await?;
    let response: SearchCatalogResponse = serde_json::from_value(value)?;

    if response.objects.len() >= PAGE_LIMIT || response.cursor.is_some() {
        warn!(
            "Catalog search returned a full page ({} variations); further variations are not exported",
            response.objects.len()
        );
    }

    let rows = build_usable_rows(&response);
    info!(
        "Fetched {} variations, {} usable with a SKU",
        response.objects.len(),
        rows.len()
    );
    Ok(rows)
}

/// Join variations with their parent item names, dropping variations without a SKU
///
/// Output order follows `response.objects`.
pub fn build_usable_rows(response: &SearchCatalogResponse) -> Vec<UsableRow> {
    let item_names: HashMap<&str, &str> = response
        .related_objects
        .iter()
        .filter(|obj| obj.object_type == "ITEM")
        .map(|obj| {
            let name = obj
                .item_data
                .as_ref()
                .and_then(|d| d.name.as_deref())
                .unwrap_or("");
            (obj.id.as_str(), name)
        })
        .collect();

    response
        .objects
        .iter()
        .filter_map(|obj| {
            let data = obj.item_variation_data.as_ref()?;
            let Some(sku) = data.sku.as_deref().filter(|s| !s.is_empty()) else {
                debug!("Skipping variation {} without SKU", obj.id);
                return None;
            };

            let item_name = data
                .item_id
                .as_deref()
                .and_then(|id| item_names.get(id).copied())
                .unwrap_or("");
            let name = compose_name(item_name, data.name.as_deref());
            let amount = data.price_money.as_ref().and_then(|m| m.amount).unwrap_or(0);

            Some(UsableRow {
                sku: sku.to_string(),
                name: if name.is_empty() { sku.to_string() } else { name },
                variation_id: obj.id.clone(),
                price: format_minor_units(amount),
                image_url: None,
            })
        })
        .collect()
}

/// Item name, plus the variation name unless it is the default "Regular"
fn compose_name(item_name: &str, variation_name: Option<&str>) -> String {
    match variation_name {
        Some(var) if !var.is_empty() && !var.eq_ignore_ascii_case("regular") => {
            format!("{item_name} {var}").trim().to_string()
        }
        _ => item_name.trim().to_string(),
    }
}

/// Render minor units as a decimal string with two fraction digits
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
