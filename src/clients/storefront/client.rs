//! Storefront GraphQL client implementation.
//!
//! The Storefront API differs from the Admin API in two ways that matter here:
//!
//! - **Endpoint**: `/api/{version}/graphql.json` (no `/admin` prefix)
//! - **Authentication**: storefront access tokens with their own headers
//!
//! Typed operations built on [`StorefrontClient::query`] live next to this
//! file: collections, products and cart.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::storefront::{GraphqlErrorMessage, StorefrontError};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use crate::config::{ApiVersion, StorefrontConfig};

/// GraphQL client for the Shopify Storefront API.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Clone + Send + Sync`; clones share one connection pool.
///
/// # Example
///
/// ```rust
/// use storefront_adapter::{StorefrontConfig, ShopDomain, StorefrontToken, ApiVersion};
/// use storefront_adapter::clients::StorefrontClient;
///
/// let config = StorefrontConfig::builder()
///     .shop_domain(ShopDomain::new("my-store").unwrap())
///     .storefront_token(StorefrontToken::Public("token".to_string()))
///     .api_version(ApiVersion::V2025_07)
///     .build()
///     .unwrap();
///
/// let client = StorefrontClient::new(&config).unwrap();
/// assert_eq!(client.api_version(), &ApiVersion::V2025_07);
/// ```
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

/// The `{ data, errors }` envelope of every GraphQL response.
#[derive(Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

impl StorefrontClient {
    /// Creates a new Storefront client from the adapter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let api_version = config.api_version().clone();
        let token = config.storefront_token();

        let http_client = HttpClient::new(
            format!("/api/{api_version}"),
            config,
            Some((token.header_name(), token.header_value())),
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

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.http_client.url_for("graphql.json")
    }

    /// Executes a GraphQL document and decodes its `data` object into `T`.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL document
    /// * `variables` - Variables for the document (`null` or an object)
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if:
    /// - The request fails at the HTTP level (`Http`)
    /// - The endpoint answers with a non-2xx status (`Status`)
    /// - The body carries a non-empty `errors` array (`Graphql`)
    /// - The body has no `data` (`MissingData`)
    /// - `data` does not decode into `T` (`Decode`)
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, StorefrontError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let request = HttpRequest::builder(HttpMethod::Post, "graphql.json")
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(|e| StorefrontError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;
        if !response.is_ok() {
            return Err(StorefrontError::Status {
                code: response.code,
                body: response.body.to_string(),
            });
        }

        let envelope: GraphqlEnvelope = serde_json::from_value(response.body)?;
        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
            tracing::debug!(?messages, "Storefront API returned GraphQL errors");
            return Err(StorefrontError::Graphql { messages });
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
            _ => Err(StorefrontError::MissingData),
        }
    }
}
