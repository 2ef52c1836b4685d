//! # Shopify Storefront Data Adapter
//!
//! A thin adapter between a storefront web application and Shopify. It
//! fetches products, collections, carts and search results from the
//! Storefront API (and raw resources from the Admin REST API), and reshapes
//! them into the view models the storefront renders.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`StorefrontConfig`], loadable from the
//!   `SHOPIFY_*` environment variables
//! - [`StorefrontAdapter`]: one async method per storefront operation
//! - [`models`]: camelCase-serialized view models (product, collection, line
//!   item, search result, menu)
//! - [`transform`]: the pure conversions from API objects to view models
//! - [`clients`]: the Storefront GraphQL and Admin REST clients underneath
//! - [`session::Cookies`]: the request cookies carrying the cart session
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront_adapter::{StorefrontAdapter, StorefrontConfig, ShopDomain, StorefrontToken};
//!
//! # async fn run() -> Result<(), storefront_adapter::AdapterError> {
//! let config = StorefrontConfig::builder()
//!     .shop_domain(ShopDomain::new("my-store")?)
//!     .storefront_token(StorefrontToken::Public("storefront-token".to_string()))
//!     .build()?;
//!
//! let adapter = StorefrontAdapter::new(&config)?;
//!
//! let menu = adapter.fetch_menu().await?;
//! let shirts = adapter.fetch_subcategory("shirts", None).await?;
//! println!("{} menu items, {} shirts", menu.levels[0].items.len(), shirts.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Cart Sessions
//!
//! A cart id is the session id. The hosting application stores it in the
//! `sessionid` cookie after [`StorefrontAdapter::create_session_id`] and
//! passes the request's cookies to the cart mutations:
//!
//! ```rust,no_run
//! use storefront_adapter::{AddToCart, StorefrontAdapter};
//! use storefront_adapter::session::Cookies;
//!
//! # async fn run(adapter: StorefrontAdapter, cookie_header: &str) -> Result<(), storefront_adapter::AdapterError> {
//! let cookies = Cookies::parse(cookie_header);
//! let item = AddToCart { variant_id: "gid://shopify/ProductVariant/1".to_string(), quantity: 1 };
//! let cart = adapter.add_to_cart(&cookies, &item).await?;
//! println!("{} items in cart", cart.total_quantity);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and installs no subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and cookies are passed in explicitly
//! - **Owned clients**: HTTP clients are built once and reused
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`

pub mod adapter;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod transform;

pub use adapter::{AddToCart, RemoveFromCart, StorefrontAdapter, UpdateCart};
pub use clients::StorefrontToken;
pub use config::{
    AdminPassword, ApiVersion, HostUrl, ShopDomain, StorefrontConfig, StorefrontConfigBuilder,
};
pub use error::{AdapterError, ConfigError};
pub use transform::TransformError;
