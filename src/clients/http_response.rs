//! HTTP response types.

use std::collections::HashMap;

/// A parsed response from a Shopify API.
///
/// Header names are stored lower-cased; a header may repeat.
///
/// ```rust
/// use std::collections::HashMap;
/// use storefront_adapter::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
///
/// let response = HttpResponse::new(200, headers, serde_json::json!({"ok": true}));
/// assert!(response.is_ok());
/// assert_eq!(response.header("X-Request-Id"), Some("req-1"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }
}
