//! Error types for the storefront adapter.
//!
//! This module contains the configuration error raised while building a
//! [`StorefrontConfig`](crate::StorefrontConfig) and the top-level
//! [`AdapterError`] returned by every [`StorefrontAdapter`](crate::StorefrontAdapter)
//! operation.
//!
//! # Error Handling
//!
//! Lower layers keep their own error enums ([`HttpError`](crate::clients::HttpError),
//! [`AdminError`], [`StorefrontError`], [`TransformError`]). Each converts into
//! [`AdapterError`] with `?`, so callers can match on the layer that failed.
//!
//! # Example
//!
//! ```rust
//! use storefront_adapter::{ConfigError, ShopDomain};
//!
//! let result = ShopDomain::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
//! ```

use thiserror::Error;

use crate::clients::admin::AdminError;
use crate::clients::storefront::StorefrontError;
use crate::transform::TransformError;

/// Errors that can occur while building adapter configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Storefront access token cannot be empty.
    #[error("Storefront access token cannot be empty. Please provide a valid Storefront token.")]
    EmptyStorefrontToken,

    /// Admin API password cannot be empty.
    #[error("Admin API password cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAdminPassword,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name', 'shop-name.myshopify.com' or a custom domain like 'shop.example.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2025-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required configuration key was not found by the lookup.
    #[error("Missing configuration key: '{key}'.")]
    MissingKey {
        /// The key that was looked up.
        key: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Error returned by [`StorefrontAdapter`](crate::StorefrontAdapter) operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Configuration is missing something the operation needs.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An Admin REST API call failed.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// A Storefront API call failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// A vendor object did not have the shape a view model requires.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The Storefront API returned no object for the given handle.
    #[error("No {resource} found for handle '{handle}'.")]
    NotFound {
        /// The kind of object that was requested.
        resource: &'static str,
        /// The handle that was looked up.
        handle: String,
    },

    /// The request carried no cart session cookie.
    #[error("No cart session found. Expected a '{cookie}' cookie.")]
    MissingSession {
        /// The cookie name that was read.
        cookie: &'static str,
    },
}
