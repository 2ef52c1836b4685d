//! Configuration types for the storefront adapter.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: all settings the adapter needs
//! - [`StorefrontConfigBuilder`]: a builder for [`StorefrontConfig`]
//! - [`ShopDomain`], [`AdminPassword`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Shopify API version used in every path
//!
//! # Example
//!
//! ```rust
//! use storefront_adapter::{StorefrontConfig, ShopDomain, StorefrontToken, ApiVersion};
//!
//! let config = StorefrontConfig::builder()
//!     .shop_domain(ShopDomain::new("my-store").unwrap())
//!     .storefront_token(StorefrontToken::Public("public-token".to_string()))
//!     .api_version(ApiVersion::V2025_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AdminPassword, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::clients::storefront::StorefrontToken;
use crate::error::ConfigError;

/// Key holding the shop domain.
pub const SHOPIFY_DOMAIN: &str = "SHOPIFY_DOMAIN";
/// Key holding the public Storefront API access token.
pub const SHOPIFY_STOREFRONT_ACCESS_TOKEN: &str = "SHOPIFY_STOREFRONT_ACCESS_TOKEN";
/// Key holding the API version path segment.
pub const SHOPIFY_API_PREFIX: &str = "SHOPIFY_API_PREFIX";
/// Key holding the Admin API access token.
pub const SHOPIFY_API_PASSWORD: &str = "SHOPIFY_API_PASSWORD";

/// Configuration for the storefront adapter.
///
/// `StorefrontConfig` is immutable once built, and `Clone + Send + Sync`
/// so it can be shared across request handlers.
///
/// The admin password is optional: storefront-only deployments never call
/// the Admin REST API.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    shop_domain: ShopDomain,
    storefront_token: StorefrontToken,
    admin_password: Option<AdminPassword>,
    api_version: ApiVersion,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// See [`from_lookup`](Self::from_lookup) for the keys read.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a value
    /// fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Keys
    ///
    /// - `SHOPIFY_DOMAIN` (required)
    /// - `SHOPIFY_STOREFRONT_ACCESS_TOKEN` (required)
    /// - `SHOPIFY_API_PREFIX` (optional, defaults to [`ApiVersion::latest`])
    /// - `SHOPIFY_API_PASSWORD` (optional)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] for a missing required key, or the
    /// validation error of the offending value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use storefront_adapter::StorefrontConfig;
    ///
    /// let values = HashMap::from([
    ///     ("SHOPIFY_DOMAIN", "my-store"),
    ///     ("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "token"),
    /// ]);
    /// let config = StorefrontConfig::from_lookup(|key| values.get(key).map(|v| v.to_string())).unwrap();
    /// assert!(config.admin_password().is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingKey { key });

        let mut builder = Self::builder()
            .shop_domain(ShopDomain::new(required(SHOPIFY_DOMAIN)?)?)
            .storefront_token(StorefrontToken::Public(required(
                SHOPIFY_STOREFRONT_ACCESS_TOKEN,
            )?));

        if let Some(prefix) = lookup(SHOPIFY_API_PREFIX) {
            builder = builder.api_version(prefix.parse()?);
        }
        if let Some(password) = lookup(SHOPIFY_API_PASSWORD) {
            builder = builder.admin_password(AdminPassword::new(password)?);
        }

        builder.build()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop_domain(&self) -> &ShopDomain {
        &self.shop_domain
    }

    /// Returns the Storefront API token.
    #[must_use]
    pub const fn storefront_token(&self) -> &StorefrontToken {
        &self.storefront_token
    }

    /// Returns the Admin API password, if configured.
    #[must_use]
    pub const fn admin_password(&self) -> Option<&AdminPassword> {
        self.admin_password.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the scheme and authority requests are sent to.
    ///
    /// This is the host override's origin when one is configured, otherwise
    /// `https://{shop_domain}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.host.as_ref().map_or_else(
            || format!("https://{}", self.shop_domain),
            |host| host.origin().to_string(),
        )
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// Required fields are `shop_domain` and `storefront_token`.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `admin_password`: `None`
/// - `host`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    shop_domain: Option<ShopDomain>,
    storefront_token: Option<StorefrontToken>,
    admin_password: Option<AdminPassword>,
    api_version: Option<ApiVersion>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop_domain(mut self, domain: ShopDomain) -> Self {
        self.shop_domain = Some(domain);
        self
    }

    /// Sets the Storefront API token (required).
    #[must_use]
    pub fn storefront_token(mut self, token: StorefrontToken) -> Self {
        self.storefront_token = Some(token);
        self
    }

    /// Sets the Admin API password used by the REST proxy.
    #[must_use]
    pub fn admin_password(mut self, password: AdminPassword) -> Self {
        self.admin_password = Some(password);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends every request to `host` instead of the shop domain.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_domain` or
    /// `storefront_token` is not set, and [`ConfigError::EmptyStorefrontToken`]
    /// if the token is empty.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let shop_domain = self
            .shop_domain
            .ok_or(ConfigError::MissingRequiredField {
                field: "shop_domain",
            })?;
        let storefront_token =
            self.storefront_token
                .ok_or(ConfigError::MissingRequiredField {
                    field: "storefront_token",
                })?;

        if storefront_token.header_value().is_empty() {
            return Err(ConfigError::EmptyStorefrontToken);
        }

        Ok(StorefrontConfig {
            shop_domain,
            storefront_token,
            admin_password: self.admin_password,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
