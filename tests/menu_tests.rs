//! Integration tests for the navigation menu.

mod common;

use common::{adapter_for, data, graphql};
use serde_json::json;
use storefront_adapter::models::Prefetch;
use tokio_test::{assert_err, assert_ok};
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_menu_links_every_collection() {
    let server = MockServer::start().await;
    graphql("query MenuCollections(")
        .respond_with(data(json!({
            "collections": { "nodes": [
                {"id": "gid://shopify/Collection/shirts", "handle": "shirts", "title": "Shirts"},
                {"id": "gid://shopify/Collection/hats", "handle": "hats", "title": "Hats"},
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let menu = assert_ok!(adapter.fetch_menu().await);

    assert_eq!(menu.levels.len(), 1);
    let level = &menu.levels[0];
    assert!(level.root);
    assert_eq!(level.items.len(), 2);

    let shirts = &level.items[0];
    assert_eq!(shirts.text, "Shirts");
    assert_eq!(shirts.url, "/s/shirts");
    assert_eq!(shirts.prefetch, Prefetch::Visible);

    let state: serde_json::Value = serde_json::from_str(&shirts.state).unwrap();
    assert_eq!(
        state,
        json!({
            "loadingCategory": {"name": "Shirts", "id": "Shirts"},
            "breadcrumbs": [{"url": "/", "text": "Home"}, {"text": "Shirts"}]
        })
    );
    assert_eq!(level.items[1].url, "/s/hats");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("products("));
}

#[tokio::test]
async fn test_fetch_menu_propagates_failure() {
    let server = MockServer::start().await;
    graphql("query MenuCollections(")
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "errors": "Unavailable"
        })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);

    assert_err!(adapter.fetch_menu().await);
}
