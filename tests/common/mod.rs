//! Shared helpers for the integration tests.
//!
//! Every test starts a wiremock server and points the adapter at it through
//! [`HostUrl`]. Storefront operations are told apart by the GraphQL
//! operation name in the request body.

#![allow(dead_code)]

use serde_json::{json, Value};
use storefront_adapter::{
    AdminPassword, ApiVersion, HostUrl, ShopDomain, StorefrontAdapter, StorefrontConfig,
    StorefrontToken,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Match, MockBuilder, MockServer, Request, ResponseTemplate};

pub const STOREFRONT_TOKEN: &str = "storefront-token";
pub const ADMIN_PASSWORD: &str = "shpat_admin";
pub const GRAPHQL_PATH: &str = "/api/2025-10/graphql.json";

/// Builds an adapter whose requests go to `server`.
pub fn adapter_for(server: &MockServer, admin_password: Option<&str>) -> StorefrontAdapter {
    let mut builder = StorefrontConfig::builder()
        .shop_domain(ShopDomain::new("test-shop").unwrap())
        .storefront_token(StorefrontToken::Public(STOREFRONT_TOKEN.to_string()))
        .api_version(ApiVersion::V2025_10)
        .host(HostUrl::new(server.uri()).unwrap());
    if let Some(password) = admin_password {
        builder = builder.admin_password(AdminPassword::new(password).unwrap());
    }
    StorefrontAdapter::new(&builder.build().unwrap()).unwrap()
}

/// Matches a Storefront API request whose document contains `operation`,
/// e.g. `query ProductByHandle(`.
pub fn graphql(operation: &str) -> MockBuilder {
    wiremock::Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Storefront-Access-Token", STOREFRONT_TOKEN))
        .and(body_string_contains(operation))
}

/// Matches a GraphQL request whose `variables` object equals `expected` exactly.
pub struct Variables(Value);

impl Match for Variables {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .is_ok_and(|body| body.get("variables") == Some(&self.0))
    }
}

pub fn variables(expected: Value) -> Variables {
    Variables(expected)
}

/// A 200 response carrying `data`.
pub fn data(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": value }))
}

pub fn variant(id: &str, price: &str, color: Option<&str>, image: Option<&str>) -> Value {
    let selected_options = color.map_or_else(Vec::new, |color| {
        vec![json!({ "name": "Color", "value": color })]
    });
    json!({
        "id": id,
        "title": id,
        "price": { "amount": price, "currencyCode": "USD" },
        "image": image.map(|url| json!({ "url": url })),
        "selectedOptions": selected_options
    })
}

pub fn product(handle: &str, product_type: &str, price: &str, images: &[&str]) -> Value {
    let images: Vec<Value> = images.iter().map(|url| json!({ "url": url })).collect();
    let variant_id = format!("gid://shopify/ProductVariant/{handle}");
    let default_variant = variant(&variant_id, price, None, None);
    json!({
        "id": format!("gid://shopify/Product/{handle}"),
        "handle": handle,
        "title": handle.replace('-', " "),
        "productType": product_type,
        "descriptionHtml": format!("<p>{handle}</p>"),
        "options": [],
        "images": { "nodes": images },
        "variants": { "nodes": [default_variant] }
    })
}

pub fn collection(handle: &str, title: &str, image: Option<&str>, products: Vec<Value>) -> Value {
    json!({
        "id": format!("gid://shopify/Collection/{handle}"),
        "handle": handle,
        "title": title,
        "descriptionHtml": format!("<p>{title}</p>"),
        "image": image.map(|url| json!({ "url": url })),
        "products": { "nodes": products }
    })
}

pub fn cart_line(line_id: &str, variant_id: &str, quantity: u32) -> Value {
    json!({
        "id": line_id,
        "quantity": quantity,
        "merchandise": {
            "id": variant_id,
            "title": "Red / M",
            "price": { "amount": "25.00", "currencyCode": "USD" },
            "image": { "url": "https://cdn.shopify.com/variant.jpg" },
            "product": { "id": "gid://shopify/Product/1", "handle": "red-shirt" }
        }
    })
}

pub fn cart(id: &str, lines: Vec<Value>) -> Value {
    json!({
        "id": id,
        "checkoutUrl": "https://test-shop.myshopify.com/cart/c/1",
        "totalQuantity": lines.len(),
        "lines": { "nodes": lines }
    })
}
