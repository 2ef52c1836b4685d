//! Admin REST proxy error types.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Admin REST API operations.
///
/// ```rust
/// use storefront_adapter::clients::admin::AdminError;
///
/// let error = AdminError::InvalidPath { path: "/.json".to_string() };
/// assert_eq!(error.to_string(), "Invalid Admin API path: /.json");
/// ```
#[derive(Debug, Error)]
pub enum AdminError {
    /// No Admin API password is configured.
    #[error("The Admin API password is not configured. Set SHOPIFY_API_PASSWORD to use the Admin REST API.")]
    PasswordNotConfigured,

    /// The resource path is empty after normalization.
    #[error("Invalid Admin API path: {path}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_password_not_configured_names_the_setting() {
        let message = AdminError::PasswordNotConfigured.to_string();
        assert!(message.contains("SHOPIFY_API_PASSWORD"));
    }

    #[test]
    fn test_invalid_path_with_empty_path() {
        let error = AdminError::InvalidPath {
            path: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid Admin API path: ");
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 503,
            message: "Service Unavailable".to_string(),
            error_reference: None,
        });

        let admin_error: AdminError = http_error.into();

        assert!(matches!(admin_error, AdminError::Http(_)));
        assert!(admin_error.to_string().contains("503"));
    }
}
