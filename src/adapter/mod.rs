//! The storefront data adapter.
//!
//! [`StorefrontAdapter`] exposes one async method per storefront operation.
//! Each method performs at most one API call and one synchronous
//! transformation from [`transform`](crate::transform); operations never
//! call each other.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_adapter::{StorefrontAdapter, StorefrontConfig};
//! use storefront_adapter::session::Cookies;
//!
//! # async fn run() -> Result<(), storefront_adapter::AdapterError> {
//! let config = StorefrontConfig::from_env()?;
//! let adapter = StorefrontAdapter::new(&config)?;
//!
//! let product = adapter.fetch_product("red-shirt").await?;
//! println!("{} costs {}", product.name, product.base_price);
//!
//! let cookies = Cookies::parse("sessionid=gid%3A%2F%2Fshopify%2FCart%2Fc1");
//! let cart = adapter.get_cart(cookies.session_id()?).await?;
//! println!("{} lines in cart", cart.len());
//! # Ok(())
//! # }
//! ```

mod admin;
mod catalog;
mod checkout;
mod menu;

pub use checkout::{AddToCart, RemoveFromCart, UpdateCart};

use crate::clients::{AdminClient, AdminError, StorefrontClient};
use crate::config::StorefrontConfig;
use crate::error::AdapterError;

/// Adapter between the storefront and Shopify's Storefront and Admin APIs.
///
/// The adapter owns one client per API surface, built once in
/// [`new`](Self::new). The Admin client exists only when an admin password
/// is configured.
///
/// # Thread Safety
///
/// `StorefrontAdapter` is `Clone + Send + Sync`. Clones share connection
/// pools, so one adapter can be cloned into every request handler.
#[derive(Clone, Debug)]
pub struct StorefrontAdapter {
    storefront: StorefrontClient,
    admin: Option<AdminClient>,
}

// Verify StorefrontAdapter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontAdapter>();
};

impl StorefrontAdapter {
    /// Creates an adapter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if an HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, AdapterError> {
        let storefront = StorefrontClient::new(config)?;
        let admin = match config.admin_password() {
            Some(_) => Some(AdminClient::new(config)?),
            None => None,
        };

        tracing::debug!(
            shop = %config.shop_domain(),
            api_version = %config.api_version(),
            admin = admin.is_some(),
            "Storefront adapter initialized"
        );

        Ok(Self { storefront, admin })
    }

    /// Creates an adapter from the `SHOPIFY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] if a required variable is missing or
    /// invalid, and any error of [`new`](Self::new).
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::new(&StorefrontConfig::from_env()?)
    }

    /// Returns the Storefront API client.
    #[must_use]
    pub const fn storefront(&self) -> &StorefrontClient {
        &self.storefront
    }

    /// Returns the Admin API client, if an admin password is configured.
    #[must_use]
    pub const fn admin_client(&self) -> Option<&AdminClient> {
        self.admin.as_ref()
    }

    fn require_admin(&self) -> Result<&AdminClient, AdapterError> {
        self.admin
            .as_ref()
            .ok_or(AdapterError::Admin(AdminError::PasswordNotConfigured))
    }
}
