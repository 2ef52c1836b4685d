//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response whose body was not JSON
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for the HTTP layer
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_adapter::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{} {}", response.code, response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidJson { code, .. }) => println!("non-JSON body with status {code}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response that
/// carries no JSON body.
///
/// ```rust
/// use storefront_adapter::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), "Shopify responded with status 502: Bad Gateway");
/// ```
#[derive(Debug, Error)]
#[error("Shopify responded with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without a JSON body.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response whose body could not be parsed as JSON.
    #[error("Response with status {code} is not valid JSON: {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: None,
        };
        assert_eq!(
            error.to_string(),
            "Shopify responded with status 404: Not Found"
        );
    }

    #[test]
    fn test_invalid_request_error_message() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_invalid_json_error_includes_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::InvalidJson { code: 200, source };
        let message = error.to_string();
        assert!(message.starts_with("Response with status 200"));
    }

    #[test]
    fn test_http_error_wraps_response_error_transparently() {
        let error: HttpError = HttpResponseError {
            code: 500,
            message: "oops".to_string(),
            error_reference: None,
        }
        .into();
        assert_eq!(error.to_string(), "Shopify responded with status 500: oops");
    }
}
