//! HTTP clients for the two Shopify API surfaces the adapter talks to.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client shared by both surfaces
//! - [`HttpRequest`] / [`HttpResponse`]: Request and parsed response types
//! - [`admin::AdminClient`]: Authenticated Admin REST proxy
//! - [`storefront::StorefrontClient`]: Storefront GraphQL client with typed
//!   catalog and cart operations
//!
//! Each client is built once from a [`StorefrontConfig`](crate::StorefrontConfig)
//! and reused; no client is created per call.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_adapter::{StorefrontConfig, ShopDomain, StorefrontToken};
//! use storefront_adapter::clients::StorefrontClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorefrontConfig::builder()
//!     .shop_domain(ShopDomain::new("my-store")?)
//!     .storefront_token(StorefrontToken::Public("token".to_string()))
//!     .build()?;
//!
//! let client = StorefrontClient::new(&config)?;
//! let collections = client.fetch_all_collections().await?;
//! println!("{} collections", collections.len());
//! # Ok(())
//! # }
//! ```

pub mod admin;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod storefront;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use admin::{AdminClient, AdminError};
pub use storefront::{StorefrontClient, StorefrontError, StorefrontToken};
