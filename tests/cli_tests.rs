//! CLI tests for the square_wine_feed binary.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn feed_cmd() -> Command {
    let mut cmd = Command::cargo_bin("square_wine_feed").unwrap();
    cmd.env_remove("SQUARE_ACCESS_TOKEN")
        .env_remove("SQUARE_LOCATION_ID")
        .env_remove("SQUARE_BASE_URL")
        .env_remove("FEED_SEARCH_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_token_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("feed.txt");

    feed_cmd()
        .env("SQUARE_LOCATION_ID", "LOC1")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SQUARE_ACCESS_TOKEN"));

    assert!(!output.exists());
}

#[test]
fn missing_location_exits_non_zero() {
    feed_cmd()
        .env("SQUARE_ACCESS_TOKEN", "test_token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SQUARE_LOCATION_ID"));
}

#[test]
fn unreachable_api_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("feed.txt");

    feed_cmd()
        .env("SQUARE_ACCESS_TOKEN", "test_token")
        .env("SQUARE_LOCATION_ID", "LOC1")
        .arg("--base-url")
        .arg("http://127.0.0.1:9")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));

    assert!(!output.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_export_prints_row_count() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/catalog/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "objects": [{
                "type": "ITEM_VARIATION",
                "id": "V1",
                "item_variation_data": {
                    "item_id": "I1",
                    "sku": "ABC123",
                    "name": "Regular",
                    "price_money": { "amount": 2500 }
                }
            }],
            "related_objects": [{
                "type": "ITEM",
                "id": "I1",
                "item_data": { "name": "Chateau Test" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/inventory/batch-retrieve-counts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "counts": [{ "catalog_object_id": "V1", "state": "IN_STOCK", "location_id": "LOC1", "quantity": "7" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("feed.txt");
    let base_url = server.uri();
    let cmd_output = output.clone();

    // The binary blocks until it exits; keep the mock server's runtime free meanwhile.
    tokio::task::spawn_blocking(move || {
        feed_cmd()
            .env("SQUARE_ACCESS_TOKEN", "test_token")
            .env("SQUARE_LOCATION_ID", "LOC1")
            .arg("--base-url")
            .arg(&base_url)
            .arg("--output")
            .arg(&cmd_output)
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 1 rows"));
    })
    .await
    .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("ABC123|Chateau Test|||NV|750ml|25.00|7|"));
}
