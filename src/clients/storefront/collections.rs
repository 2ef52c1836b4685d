//! Collection operations.

use serde::Deserialize;
use serde_json::json;

use crate::clients::storefront::queries::{
    COLLECTIONS, COLLECTION_BY_HANDLE, COLLECTION_PAGE_SIZE, COLLECTION_SEARCH, MENU_COLLECTIONS,
};
use crate::clients::storefront::types::Collection;
use crate::clients::storefront::{StorefrontClient, StorefrontError};

#[derive(Deserialize)]
struct CollectionList {
    collections: CollectionNodes,
}

#[derive(Deserialize)]
struct CollectionNodes {
    nodes: Vec<Collection>,
}

#[derive(Deserialize)]
struct CollectionByHandle {
    collection: Option<Collection>,
}

impl StorefrontClient {
    /// Lists the shop's collections with their products.
    ///
    /// Reads one page of [`COLLECTION_PAGE_SIZE`] collections.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_all_collections(&self) -> Result<Vec<Collection>, StorefrontError> {
        let data: CollectionList = self
            .query(COLLECTIONS, json!({ "first": COLLECTION_PAGE_SIZE }))
            .await?;
        Ok(data.collections.nodes)
    }

    /// Lists the shop's collections with only `id`, `handle` and `title`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_menu_collections(&self) -> Result<Vec<Collection>, StorefrontError> {
        let data: CollectionList = self
            .query(MENU_COLLECTIONS, json!({ "first": COLLECTION_PAGE_SIZE }))
            .await?;
        Ok(data.collections.nodes)
    }

    /// Fetches a collection and its products by handle.
    ///
    /// Returns `Ok(None)` when no collection has the handle.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_collection_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Collection>, StorefrontError> {
        let data: CollectionByHandle = self
            .query(COLLECTION_BY_HANDLE, json!({ "handle": handle }))
            .await?;
        Ok(data.collection)
    }

    /// Searches collections. `query` uses Shopify's search syntax.
    ///
    /// The returned collections carry no products.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_collections_query(
        &self,
        query: &str,
    ) -> Result<Vec<Collection>, StorefrontError> {
        let data: CollectionList = self
            .query(
                COLLECTION_SEARCH,
                json!({ "query": query, "first": COLLECTION_PAGE_SIZE }),
            )
            .await?;
        Ok(data.collections.nodes)
    }
}
