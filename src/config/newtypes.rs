//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use std::fmt;

/// A validated shop domain.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
/// - `shop.example.com` - a custom storefront domain, used as-is
///
/// # Example
///
/// ```rust
/// use storefront_adapter::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
///
/// let domain = ShopDomain::new("Shop.Example.com").unwrap();
/// assert_eq!(domain.as_ref(), "shop.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if any label of the domain
    /// is empty, contains characters other than `a-z`, `0-9` and `-`, or
    /// starts or ends with a hyphen.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let full_domain = if domain.contains('.') {
            domain
        } else {
            format!("{domain}{}", Self::SUFFIX)
        };

        if !full_domain.split('.').all(Self::is_valid_label) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self(full_domain))
    }

    fn is_valid_label(label: &str) -> bool {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An Admin API access token, sent as `X-Shopify-Access-Token`.
///
/// The `Debug` implementation masks the value so it never ends up in logs.
///
/// ```rust
/// use storefront_adapter::AdminPassword;
///
/// let password = AdminPassword::new("shpat_secret").unwrap();
/// assert_eq!(format!("{:?}", password), "AdminPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminPassword(String);

impl AdminPassword {
    /// Creates a new admin password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAdminPassword`] if the value is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyAdminPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for AdminPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminPassword(*****)")
    }
}

/// A validated base URL that API requests are sent to instead of the shop
/// domain, for example a proxy in front of Shopify.
///
/// # Example
///
/// ```rust
/// use storefront_adapter::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/ignored/path").unwrap();
/// assert_eq!(url.origin(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    authority_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no alphabetic
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();

        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(invalid());
        }

        Ok(Self { url, authority_end })
    }

    /// Returns scheme, host and port, without any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.authority_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
