//! HTTP client shared by the Admin REST and Storefront GraphQL clients.
//!
//! [`HttpClient`] owns one `reqwest::Client` and the default headers of one
//! API surface. It is built once and reused for every call; cloning it is
//! cheap and shares the connection pool.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::StorefrontConfig;

/// Crate version from Cargo.toml, sent in the User-Agent header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for one Shopify API surface.
///
/// The client handles:
/// - Base URI construction from the shop domain or the configured host
/// - Default headers including User-Agent and the surface's auth header
/// - JSON body parsing and deprecation warning logging
///
/// Non-2xx responses with a JSON body are returned as [`HttpResponse`];
/// callers decide what a status code means for them.
///
/// # Example
///
/// ```rust
/// use storefront_adapter::{StorefrontConfig, ShopDomain, StorefrontToken};
/// use storefront_adapter::clients::HttpClient;
///
/// let config = StorefrontConfig::builder()
///     .shop_domain(ShopDomain::new("my-store").unwrap())
///     .storefront_token(StorefrontToken::Public("token".to_string()))
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new("/admin/api/2025-10", &config, Some(("X-Shopify-Access-Token", "shpat"))).unwrap();
/// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
/// assert_eq!(client.default_headers()["X-Shopify-Access-Token"], "shpat");
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., `/admin/api/2025-10`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., `/api/2025-10`)
    /// * `config` - Adapter configuration providing domain, host and user agent
    /// * `auth_header` - Optional `(name, value)` header authenticating every request
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(
        base_path: impl Into<String>,
        config: &StorefrontConfig,
        auth_header: Option<(&str, &str)>,
    ) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Storefront Adapter v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Proxy scenario: keep the shop as the virtual host
        if config.host().is_some() {
            default_headers.insert("Host".to_string(), config.shop_domain().to_string());
        }

        if let Some((name, value)) = auth_header {
            default_headers.insert(name.to_string(), value.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// Sends an HTTP request and parses the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response has a body that is not JSON (`Response`)
    /// - A 2xx response has a body that is not JSON (`InvalidJson`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, %url, "Sending Shopify API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = match serde_json::from_str(&body_text) {
            Ok(body) => body,
            Err(source) if (200..300).contains(&code) => {
                return Err(HttpError::InvalidJson { code, source });
            }
            Err(_) => {
                let error_reference = res_headers
                    .get("x-request-id")
                    .and_then(|values| values.first())
                    .cloned();
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: body_text,
                    error_reference,
                }));
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap` with lower-cased names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
