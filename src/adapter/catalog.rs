//! Catalog operations: collections, products and search.

use crate::adapter::StorefrontAdapter;
use crate::error::AdapterError;
use crate::models::{Collection, Product, ProductImages, SearchResult};
use crate::transform::{
    apply_type_facets, product_images, transform_collection, transform_collection_search_result,
    transform_product, transform_product_search_result,
};

impl StorefrontAdapter {
    /// Lists all collections as subcategories.
    ///
    /// Never fails: any error is logged and an empty list returned. Use
    /// [`try_fetch_subcategories`](Self::try_fetch_subcategories) to observe
    /// the error.
    pub async fn fetch_subcategories(&self) -> Vec<Collection> {
        match self.try_fetch_subcategories().await {
            Ok(collections) => collections,
            Err(error) => {
                tracing::error!(%error, "Error fetching subcategories");
                Vec::new()
            }
        }
    }

    /// Lists all collections as subcategories.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the request or a transformation fails.
    pub async fn try_fetch_subcategories(&self) -> Result<Vec<Collection>, AdapterError> {
        let collections = self.storefront.fetch_all_collections().await?;
        Ok(collections
            .into_iter()
            .map(transform_collection)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Fetches a product by handle.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotFound`] for an unknown handle, and
    /// [`AdapterError`] if the request or the transformation fails.
    pub async fn fetch_product(&self, handle: &str) -> Result<Product, AdapterError> {
        let product = self
            .storefront
            .fetch_product_by_handle(handle)
            .await?
            .ok_or_else(|| AdapterError::NotFound {
                resource: "product",
                handle: handle.to_string(),
            })?;
        Ok(transform_product(product)?)
    }

    /// Fetches a collection by handle with its `Type` facets.
    ///
    /// When `filters` is given, only products whose product type is listed
    /// are kept. `total` always counts every product of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotFound`] for an unknown handle, and
    /// [`AdapterError`] if the request or the transformation fails.
    pub async fn fetch_subcategory(
        &self,
        handle: &str,
        filters: Option<&[String]>,
    ) -> Result<Collection, AdapterError> {
        let collection = self
            .storefront
            .fetch_collection_by_handle(handle)
            .await?
            .ok_or_else(|| AdapterError::NotFound {
                resource: "collection",
                handle: handle.to_string(),
            })?;
        let collection = transform_collection(collection)?;
        Ok(apply_type_facets(collection, filters))
    }

    /// Searches products and returns suggestions linking to product pages.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the request fails.
    pub async fn product_search(&self, query: &str) -> Result<Vec<SearchResult>, AdapterError> {
        let products = self.storefront.fetch_products_query(query).await?;
        Ok(products
            .into_iter()
            .map(transform_product_search_result)
            .collect())
    }

    /// Searches collections and returns suggestions.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the request fails or a matching
    /// collection has no image.
    pub async fn category_search(&self, query: &str) -> Result<Vec<SearchResult>, AdapterError> {
        let collections = self.storefront.fetch_collections_query(query).await?;
        Ok(collections
            .into_iter()
            .map(transform_collection_search_result)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Returns the images for one color of a product.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotFound`] for an unknown handle and
    /// [`AdapterError::Transform`] if no variant has the color or that
    /// variant has no image.
    pub async fn fetch_product_images(
        &self,
        handle: &str,
        color: &str,
    ) -> Result<ProductImages, AdapterError> {
        let product = self
            .storefront
            .fetch_product_by_handle(handle)
            .await?
            .ok_or_else(|| AdapterError::NotFound {
                resource: "product",
                handle: handle.to_string(),
            })?;
        Ok(product_images(&product, color)?)
    }
}
