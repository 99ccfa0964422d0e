//! Process-wide configuration, loaded once at startup
//!
//! # Security
//! The access token is never written to the log.

use crate::error::{FeedError, Result};
use std::path::PathBuf;

pub const ACCESS_TOKEN_VAR: &str = "SQUARE_ACCESS_TOKEN";
pub const LOCATION_ID_VAR: &str = "SQUARE_LOCATION_ID";
pub const BASE_URL_VAR: &str = "SQUARE_BASE_URL";
pub const SEARCH_URL_VAR: &str = "FEED_SEARCH_URL";

pub const DEFAULT_BASE_URL: &str = "https://connect.squareup.com";
pub const DEFAULT_SEARCH_URL: &str = "https://www.cellardoorwines.co.uk/search?q=";
pub const DEFAULT_OUTPUT_PATH: &str = "winesearcher_feed.txt";

/// Immutable export settings, passed by reference to every stage
#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub location_id: String,
    pub base_url: String,
    pub search_url: String,
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration through an arbitrary key lookup
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_token = get(ACCESS_TOKEN_VAR).ok_or(FeedError::MissingConfig(ACCESS_TOKEN_VAR))?;
        let location_id = get(LOCATION_ID_VAR).ok_or(FeedError::MissingConfig(LOCATION_ID_VAR))?;

        log::debug!("Access token length: {}", access_token.len());

        Ok(Self {
            access_token,
            location_id,
            base_url: get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            search_url: get(SEARCH_URL_VAR).unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        })
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
