//! Admin REST proxy operations.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::adapter::StorefrontAdapter;
use crate::clients::HttpMethod;
use crate::error::AdapterError;

impl StorefrontAdapter {
    /// Calls the Admin REST API and returns the parsed JSON body.
    ///
    /// Requests `https://{domain}/admin/api/{version}/{path}.json?{params}`
    /// with the `X-Shopify-Access-Token` header. Status codes are not
    /// interpreted: a JSON error payload from Shopify is returned as data.
    ///
    /// # Arguments
    ///
    /// * `path` - Resource path without the `.json` suffix (e.g., `products/1/variants`)
    /// * `params` - Query string parameters
    /// * `method` - The HTTP method
    /// * `body` - Optional JSON request body
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Admin`] if no admin password is configured, the
    /// path is empty, the request fails, or the body is not JSON.
    pub async fn admin(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
        method: HttpMethod,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, AdapterError> {
        let admin = self.require_admin()?;
        Ok(admin.request(path, params, method, body).await?)
    }

    /// Fetches a product's variants through the Admin REST API.
    ///
    /// `product_id` is the numeric Admin API product id.
    ///
    /// # Errors
    ///
    /// See [`admin`](Self::admin).
    pub async fn fetch_variants(
        &self,
        product_id: impl Display + Send,
    ) -> Result<serde_json::Value, AdapterError> {
        let path = format!("products/{product_id}/variants");
        self.admin(&path, BTreeMap::new(), HttpMethod::Get, None)
            .await
    }
}
