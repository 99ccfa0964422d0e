//! Vintage and bottle size inferred from free-text product names

use lazy_static::lazy_static;
use regex::Regex;

/// Vintage label for wines with no year in the name
pub const NON_VINTAGE: &str = "NV";

/// Bottle size used when the name carries no size cue
pub const DEFAULT_UNIT_SIZE: &str = "750ml";

lazy_static! {
    static ref VINTAGE_RE: Regex = Regex::new(r"(?-u:\b)(?:18|19|20)[0-9]{2}(?-u:\b)").expect("invalid vintage regex");
}

/// First year between 1800 and 2099 found in `name`, or "NV"
pub fn infer_vintage(name: &str) -> String {
    VINTAGE_RE
        .find(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NON_VINTAGE.to_string())
}

/// Size rules in priority order; the first rule with a matching cue wins
const UNIT_SIZE_RULES: &[(&[&str], &str)] = &[
    (&["magnum", "1.5l", "1500"], "1.5L Magnum"),
    (&["375"], "375ml"),
    (&["500"], "500ml"),
    (&["1l", "1000"], "1L"),
    (&["3l"], "3L"),
];

/// Bottle size label inferred from `name`, defaulting to "750ml"
pub fn infer_unit_size(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    UNIT_SIZE_RULES
        .iter()
        .find(|(cues, _)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_UNIT_SIZE)
}
