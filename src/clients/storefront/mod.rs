//! Storefront API client for Shopify.
//!
//! This is the typed stand-in for the vendor storefront SDK: a GraphQL client
//! ([`StorefrontClient`]) plus one method per operation the adapter forwards
//! (collections, products, search and cart mutations), each decoding the
//! response into the vendor types in [`types`].
//!
//! # Storefront vs Admin API
//!
//! - **Endpoint**: `/api/{version}/graphql.json` (no `/admin` prefix)
//! - **Authentication**: storefront tokens, see [`StorefrontToken`]
//! - **Access Level**: storefront data only (products, collections, cart)
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_adapter::clients::StorefrontClient;
//!
//! let client = StorefrontClient::new(&config)?;
//! let product = client.fetch_product_by_handle("red-shirt").await?;
//! ```

mod cart;
mod client;
mod collections;
mod errors;
mod products;
pub mod queries;
mod token;
pub mod types;

pub use cart::{CartLineInput, CartLineUpdateInput};
pub use client::StorefrontClient;
pub use errors::{GraphqlErrorMessage, StorefrontError, UserError};
pub use token::{StorefrontToken, PRIVATE_HEADER_NAME, PUBLIC_HEADER_NAME};
