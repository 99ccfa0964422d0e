//! Unit tests for the Square API module.


use crate::config::Config;
use crate::square::SquareClient;

/// Client pointed at a mock server with a fixed token.
pub(super) fn client_with_mock(mock_uri: &str) -> SquareClient {
    SquareClient::new(&test_config(mock_uri))
}

pub(super) fn test_config(mock_uri: &str) -> Config {
    Config {
        access_token: "test_token".to_string(),
        location_id: "LOC1".to_string(),
        base_url: mock_uri.to_string(),
        search_url: "https://shop.example/search?q=".to_string(),
        output_path: "feed.txt".into(),
    }
}
