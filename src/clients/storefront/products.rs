//! Product operations.

use serde::Deserialize;
use serde_json::json;

use crate::clients::storefront::queries::{PRODUCT_BY_HANDLE, PRODUCT_PAGE_SIZE, PRODUCT_SEARCH};
use crate::clients::storefront::types::Product;
use crate::clients::storefront::{StorefrontClient, StorefrontError};

#[derive(Deserialize)]
struct ProductByHandle {
    product: Option<Product>,
}

#[derive(Deserialize)]
struct ProductList {
    products: ProductNodes,
}

#[derive(Deserialize)]
struct ProductNodes {
    nodes: Vec<Product>,
}

impl StorefrontClient {
    /// Fetches a product by handle.
    ///
    /// Returns `Ok(None)` when no product has the handle.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Product>, StorefrontError> {
        let data: ProductByHandle = self
            .query(PRODUCT_BY_HANDLE, json!({ "handle": handle }))
            .await?;
        Ok(data.product)
    }

    /// Searches products. `query` uses Shopify's search syntax.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_products_query(&self, query: &str) -> Result<Vec<Product>, StorefrontError> {
        let data: ProductList = self
            .query(
                PRODUCT_SEARCH,
                json!({ "query": query, "first": PRODUCT_PAGE_SIZE }),
            )
            .await?;
        Ok(data.products.nodes)
    }
}
