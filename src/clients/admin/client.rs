//! Admin REST client implementation.

use std::collections::BTreeMap;

use crate::clients::admin::AdminError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use crate::config::{ApiVersion, StorefrontConfig};

/// Header carrying the Admin API access token.
pub const ADMIN_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the Shopify Admin REST API.
///
/// # Thread Safety
///
/// `AdminClient` is `Clone + Send + Sync`; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct AdminClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify AdminClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminClient>();
};

impl AdminClient {
    /// Creates a new Admin client from the adapter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PasswordNotConfigured`] if the configuration has
    /// no admin password, or [`AdminError::Http`] if the HTTP client cannot
    /// be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, AdminError> {
        let password = config
            .admin_password()
            .ok_or(AdminError::PasswordNotConfigured)?;
        let api_version = config.api_version().clone();

        let http_client = HttpClient::new(
            format!("/admin/api/{api_version}"),
            config,
            Some((ADMIN_TOKEN_HEADER, password.as_ref())),
        )?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the URL a resource path resolves to, without query string.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty.
    pub fn url_for(&self, path: &str) -> Result<String, AdminError> {
        Ok(self.http_client.url_for(&normalize_path(path)?))
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// # Arguments
    ///
    /// * `path` - The resource path (e.g., `products/123/variants`)
    /// * `params` - Query parameters appended to the URL
    /// * `method` - The HTTP method
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty and
    /// [`AdminError::Http`] for network errors and non-JSON responses.
    pub async fn request(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
        method: HttpMethod,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, AdminError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).query(params);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        let request = builder.build().map_err(|e| AdminError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;
        if !response.is_ok() {
            tracing::debug!(
                code = response.code,
                path,
                "Admin API returned a non-success status"
            );
        }
        Ok(response.body)
    }
}

/// Normalizes an Admin API path.
///
/// Strips leading `/` characters and a trailing `.json`, rejects an empty
/// remainder, then appends `.json`.
fn normalize_path(path: &str) -> Result<String, AdminError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(AdminError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
