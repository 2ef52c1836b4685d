//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Shopify APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to be sent by [`HttpClient`](crate::clients::HttpClient).
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// ```rust
/// use storefront_adapter::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "products/1.json")
///     .body(json!({"product": {"title": "Renamed"}}))
///     .body_type(DataType::Json)
///     .query_param("fields", "id,title")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query.unwrap()["fields"], "id,title");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the client's base path) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters, serialized in key order.
    pub query: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBodyType`] if `body` is set
    /// without a `body_type`.
    pub const fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Clone, Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<BTreeMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the body content type.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds all parameters from `query`.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query.get_or_insert_with(BTreeMap::new).extend(query);
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_displays_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_json_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
    }

    #[test]
    fn test_builder_rejects_body_without_type() {
        let result = HttpRequest::builder(HttpMethod::Post, "products.json")
            .body(json!({"a": 1}))
            .build();

        assert_eq!(
            result.unwrap_err(),
            InvalidHttpRequestError::MissingBodyType
        );
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, "products/1/publish.json")
            .build()
            .unwrap();

        assert!(request.body.is_none());
    }

    #[test]
    fn test_query_params_merge() {
        let mut extra = BTreeMap::new();
        extra.insert("limit".to_string(), "5".to_string());

        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .query_param("fields", "id")
            .query(extra)
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query["limit"], "5");
        assert_eq!(query["fields"], "id");
    }
}
