//! Pipe-delimited feed rendering and file output

use std::collections::HashMap;
use std::path::Path;

use crate::derive::{infer_unit_size, infer_vintage};
use crate::error::Result;
use crate::square::UsableRow;

/// Literal first line of every feed file
pub const FEED_HEADER: &str =
    "SKU|name|description|vintage|unit-size|price|stock|url|min-order|tax|offer-type|delivery-time|LWIN|imageurl";

const TAX: &str = "Inc.tax";
const OFFER_TYPE: &str = "R";
const DELIVERY_TIME: &str = "Next day";

/// One data line of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub sku: String,
    pub name: String,
    pub vintage: String,
    pub unit_size: &'static str,
    pub price: String,
    pub stock: String,
    pub url: String,
    pub image_url: Option<String>,
}

impl FeedRow {
    /// Combine a usable row with its stock level and the fields derived from its name
    pub fn from_usable(row: &UsableRow, stock: &HashMap<String, String>, search_url: &str) -> Self {
        Self {
            sku: row.sku.clone(),
            name: row.name.clone(),
            vintage: infer_vintage(&row.name),
            unit_size: infer_unit_size(&row.name),
            price: row.price.clone(),
            stock: stock
                .get(&row.variation_id)
                .cloned()
                .unwrap_or_else(|| "0".to_string()),
            url: search_link(search_url, &row.name),
            image_url: row.image_url.clone(),
        }
    }

    /// The fourteen feed columns joined with `|`
    pub fn to_line(&self) -> String {
        [
            self.sku.as_str(),
            self.name.as_str(),
            "",
            self.vintage.as_str(),
            self.unit_size,
            self.price.as_str(),
            self.stock.as_str(),
            self.url.as_str(),
            "",
            TAX,
            OFFER_TYPE,
            DELIVERY_TIME,
            "",
            self.image_url.as_deref().unwrap_or(""),
        ]
        .join("|")
    }
}

/// Search page URL for a product name
pub fn search_link(search_url: &str, name: &str) -> String {
    format!("{search_url}{}", urlencoding::encode(name))
}

/// Header plus one line per row, newline-terminated
pub fn render_feed(rows: &[FeedRow]) -> String {
    let mut out = String::from(FEED_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_line());
        out.push('\n');
    }
    out
}

/// Write the rendered feed to `path`, replacing any existing file
pub fn write_feed(path: &Path, rows: &[FeedRow]) -> Result<usize> {
    std::fs::write(path, render_feed(rows))?;
    log::info!("Wrote {} feed rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
