//! Storefront API token types.
//!
//! - **Public tokens** are the storefront access tokens a shop issues for
//!   its sales channel; they use the `X-Shopify-Storefront-Access-Token` header.
//! - **Private tokens** are for server-side use with elevated limits; they
//!   use the `Shopify-Storefront-Private-Token` header.
//!
//! The [`Debug`] implementation masks the token value.

use std::fmt;

/// HTTP header name for public storefront access tokens.
pub const PUBLIC_HEADER_NAME: &str = "X-Shopify-Storefront-Access-Token";

/// HTTP header name for private storefront access tokens.
pub const PRIVATE_HEADER_NAME: &str = "Shopify-Storefront-Private-Token";

/// A Shopify Storefront API access token.
///
/// # Example
///
/// ```rust
/// use storefront_adapter::StorefrontToken;
///
/// let token = StorefrontToken::Public("my-token".to_string());
/// assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
/// assert_eq!(token.header_value(), "my-token");
/// assert_eq!(format!("{token:?}"), "StorefrontToken::Public(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum StorefrontToken {
    /// Public storefront access token.
    Public(String),
    /// Private storefront access token, server-side only.
    Private(String),
}

impl StorefrontToken {
    /// Returns the HTTP header name for this token type.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        match self {
            Self::Public(_) => PUBLIC_HEADER_NAME,
            Self::Private(_) => PRIVATE_HEADER_NAME,
        }
    }

    /// Returns the token value.
    #[must_use]
    pub fn header_value(&self) -> &str {
        match self {
            Self::Public(token) | Self::Private(token) => token,
        }
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public(_) => f.write_str("StorefrontToken::Public(*****)"),
            Self::Private(_) => f.write_str("StorefrontToken::Private(*****)"),
        }
    }
}
