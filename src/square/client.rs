//! HTTP plumbing shared by the catalog and inventory calls.

use log::{debug, error, warn};
use reqwest::Client;
use serde_json::Value;

use super::API_VERSION;
use crate::config::Config;
use crate::error::{FeedError, Result};

/// Authenticated Square API client
pub struct SquareClient {
    pub(crate) client: Client,
    pub(crate) access_token: String,
    pub(crate) base_url: String,
}

impl SquareClient {
    /// Creates a client from the loaded configuration.
    ///
    /// No timeout is set; each call waits until Square answers.
    pub fn new(config: &Config) -> Self {
        debug!("Creating Square API client for {}", config.base_url);
        Self {
            client: Client::new(),
            access_token: config.access_token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Calls `path` and returns the parsed JSON body.
    ///
    /// Sends a GET when `body` is `None`, otherwise a POST with the JSON body.
    /// A non-success status becomes [`FeedError::Api`] carrying the raw body.
    pub async fn call(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Square request: {} {url}", if body.is_some() { "POST" } else { "GET" });

        let request = match body {
            Some(body) => self.client.post(&url).json(body),
            None => self.client.get(&url),
        };

        let response = request
            .bearer_auth(&self.access_token)
            .header("Square-Version", API_VERSION)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read error body from {path}: {e}");
                    String::new()
                }
            };
            error!("Square API returned {status} for {path}");
            return Err(FeedError::Api { status, body });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
