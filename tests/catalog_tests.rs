//! Integration tests for the catalog operations.
//!
//! These tests run the adapter against a mock Storefront API and check the
//! view models it produces.

mod common;

use common::{adapter_for, collection, data, graphql, product, variables, variant};
use serde_json::json;
use storefront_adapter::clients::StorefrontError;
use storefront_adapter::models::PLACEHOLDER_IMAGE;
use storefront_adapter::{AdapterError, TransformError};
use tokio_test::{assert_err, assert_ok};
use wiremock::{MockServer, ResponseTemplate};

// ============================================================================
// fetch_product
// ============================================================================

#[tokio::test]
async fn test_fetch_product_parses_price_and_thumbnails() {
    let server = MockServer::start().await;
    graphql("query ProductByHandle(")
        .and(variables(json!({"handle": "red-shirt"})))
        .respond_with(data(json!({
            "product": product(
                "red-shirt",
                "Shirt",
                "19.99",
                &["https://cdn/1.jpg", "https://cdn/2.jpg", "https://cdn/3.jpg"],
            )
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let product = assert_ok!(adapter.fetch_product("red-shirt").await);

    assert_eq!(product.id, "red-shirt");
    assert_eq!(product.url, "/p/red-shirt");
    assert!((product.base_price - 19.99).abs() < f64::EPSILON);
    assert_eq!(product.thumbnails.len(), 3);
    assert_eq!(product.thumbnail, "https://cdn/1.jpg");
    assert_eq!(product.variant_id, "gid://shopify/ProductVariant/red-shirt");
}

#[tokio::test]
async fn test_fetch_product_unknown_handle_is_not_found() {
    let server = MockServer::start().await;
    graphql("query ProductByHandle(")
        .respond_with(data(json!({ "product": null })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let error = assert_err!(adapter.fetch_product("missing").await);

    assert!(matches!(
        error,
        AdapterError::NotFound { resource: "product", ref handle } if handle == "missing"
    ));
}

#[tokio::test]
async fn test_fetch_product_surfaces_graphql_errors() {
    let server = MockServer::start().await;
    graphql("query ProductByHandle(")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Throttled"}]
        })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let error = assert_err!(adapter.fetch_product("red-shirt").await);

    assert!(matches!(
        error,
        AdapterError::Storefront(StorefrontError::Graphql { .. })
    ));
}

#[tokio::test]
async fn test_fetch_product_without_variants_is_transform_error() {
    let server = MockServer::start().await;
    let mut source = product("ghost", "Shirt", "1.00", &[]);
    source["variants"] = json!({ "nodes": [] });
    graphql("query ProductByHandle(")
        .respond_with(data(json!({ "product": source })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let error = assert_err!(adapter.fetch_product("ghost").await);

    assert!(matches!(
        error,
        AdapterError::Transform(TransformError::MissingVariant { .. })
    ));
}

// ============================================================================
// fetch_subcategories
// ============================================================================

#[tokio::test]
async fn test_fetch_subcategories_transforms_every_collection() {
    let server = MockServer::start().await;
    graphql("query Collections(")
        .respond_with(data(json!({
            "collections": { "nodes": [
                collection("shirts", "Shirts", Some("https://cdn/shirts.jpg"), vec![
                    product("tee", "Shirt", "10.00", &[]),
                ]),
                collection("hats", "Hats", None, vec![]),
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let subcategories = adapter.fetch_subcategories().await;

    assert_eq!(subcategories.len(), 2);
    assert_eq!(subcategories[0].name, "Shirts");
    assert_eq!(subcategories[0].image, "https://cdn/shirts.jpg");
    assert_eq!(subcategories[0].url, "/s/gid://shopify/Collection/shirts");
    assert_eq!(subcategories[0].total, 1);
    assert_eq!(subcategories[1].image, PLACEHOLDER_IMAGE);
    assert_eq!(subcategories[1].total, 0);
}

#[tokio::test]
async fn test_fetch_subcategories_returns_empty_list_on_failure() {
    let server = MockServer::start().await;
    graphql("query Collections(")
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);

    assert!(adapter.fetch_subcategories().await.is_empty());
    let error = assert_err!(adapter.try_fetch_subcategories().await);
    assert!(matches!(
        error,
        AdapterError::Storefront(StorefrontError::Status { code: 500, .. })
    ));
}

// ============================================================================
// fetch_subcategory
// ============================================================================

fn mixed_collection() -> serde_json::Value {
    collection(
        "summer",
        "Summer",
        None,
        vec![
            product("tee", "Shirt", "10.00", &[]),
            product("polo", "Shirt", "20.00", &[]),
            product("cap", "Hat", "5.00", &[]),
        ],
    )
}

#[tokio::test]
async fn test_fetch_subcategory_counts_types_in_first_seen_order() {
    let server = MockServer::start().await;
    graphql("query CollectionByHandle(")
        .and(variables(json!({"handle": "summer"})))
        .respond_with(data(json!({ "collection": mixed_collection() })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let subcategory = assert_ok!(adapter.fetch_subcategory("summer", None).await);

    let value = serde_json::to_value(&subcategory).unwrap();
    assert_eq!(
        value["facetGroups"],
        json!([{
            "name": "Type",
            "facets": [
                {"name": "Shirt", "code": "Shirt", "matches": 2},
                {"name": "Hat", "code": "Hat", "matches": 1}
            ]
        }])
    );
    assert_eq!(subcategory.items.len(), 3);
}

#[tokio::test]
async fn test_fetch_subcategory_filters_items_but_keeps_total() {
    let server = MockServer::start().await;
    graphql("query CollectionByHandle(")
        .respond_with(data(json!({ "collection": mixed_collection() })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let filters = vec!["Hat".to_string()];
    let subcategory = assert_ok!(adapter.fetch_subcategory("summer", Some(&filters)).await);

    assert_eq!(subcategory.total, 3);
    assert_eq!(subcategory.items.len(), 1);
    assert!(subcategory.items.iter().all(|i| i.product_type == "Hat"));

    let facets = &subcategory.facet_groups.unwrap()[0].facets;
    assert_eq!(facets.len(), 1);
    assert_eq!(facets[0].matches, 1);
}

#[tokio::test]
async fn test_fetch_subcategory_unknown_handle_is_not_found() {
    let server = MockServer::start().await;
    graphql("query CollectionByHandle(")
        .respond_with(data(json!({ "collection": null })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let error = assert_err!(adapter.fetch_subcategory("winter", None).await);

    assert_eq!(
        error.to_string(),
        "No collection found for handle 'winter'."
    );
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_product_search_links_to_product_pages() {
    let server = MockServer::start().await;
    graphql("query ProductSearch(")
        .and(variables(json!({"query": "shirt", "first": 20})))
        .respond_with(data(json!({
            "products": { "nodes": [
                product("red-shirt", "Shirt", "19.99", &["https://cdn/red.jpg"]),
                product("blue-shirt", "Shirt", "19.99", &[]),
            ]}
        })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let results = assert_ok!(adapter.product_search("shirt").await);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].text, "red shirt");
    assert_eq!(results[0].url, "/p/red-shirt");
    assert_eq!(results[0].thumbnail.as_deref(), Some("https://cdn/red.jpg"));
    assert!(results[1].thumbnail.is_none());
}

#[tokio::test]
async fn test_category_search_uses_product_path() {
    let server = MockServer::start().await;
    graphql("query CollectionSearch(")
        .and(variables(json!({"query": "hat", "first": 20})))
        .respond_with(data(json!({
            "collections": { "nodes": [
                collection("hats", "Hats", Some("https://cdn/hats.jpg"), vec![]),
            ]}
        })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let results = assert_ok!(adapter.category_search("hat").await);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "Hats");
    assert_eq!(results[0].url, "/p/hats");
    assert_eq!(
        results[0].thumbnail.as_deref(),
        Some("https://cdn/hats.jpg")
    );
}

#[tokio::test]
async fn test_category_search_requires_collection_image() {
    let server = MockServer::start().await;
    graphql("query CollectionSearch(")
        .respond_with(data(json!({
            "collections": { "nodes": [collection("hats", "Hats", None, vec![])] }
        })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let error = assert_err!(adapter.category_search("hat").await);

    assert!(matches!(
        error,
        AdapterError::Transform(TransformError::MissingImage { .. })
    ));
}

// ============================================================================
// fetch_product_images
// ============================================================================

fn colored_product() -> serde_json::Value {
    let mut source = product("tee", "Shirt", "10.00", &["https://cdn/tee.jpg"]);
    source["variants"] = json!({ "nodes": [
        variant("v-blue", "10.00", Some("Blue"), Some("https://cdn/blue.jpg")),
        variant("v-red", "10.00", Some("Red"), Some("https://cdn/red.jpg")),
    ]});
    source
}

#[tokio::test]
async fn test_fetch_product_images_for_color() {
    let server = MockServer::start().await;
    graphql("query ProductByHandle(")
        .respond_with(data(json!({ "product": colored_product() })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let images = assert_ok!(adapter.fetch_product_images("tee", "Red").await);

    assert_eq!(images.images, vec!["https://cdn/red.jpg"]);
    assert_eq!(images.thumbnails, vec!["https://cdn/red.jpg"]);
    assert_eq!(images.thumbnail, "https://cdn/red.jpg");
}

#[tokio::test]
async fn test_fetch_product_images_without_color_fails() {
    let server = MockServer::start().await;
    graphql("query ProductByHandle(")
        .respond_with(data(json!({ "product": colored_product() })))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server, None);
    let error = assert_err!(adapter.fetch_product_images("tee", "Green").await);

    match error {
        AdapterError::Transform(TransformError::NoVariantForColor { color, .. }) => {
            assert_eq!(color, "Green");
        }
        other => panic!("expected missing color variant, got {other:?}"),
    }
}
