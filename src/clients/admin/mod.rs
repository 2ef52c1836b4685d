//! Admin REST API proxy.
//!
//! [`AdminClient`] forwards a resource path, query parameters, method and
//! optional JSON body to `https://{domain}/admin/api/{version}/{path}.json`
//! with the `X-Shopify-Access-Token` header, and hands back the parsed JSON.
//!
//! The status code is not interpreted: a JSON error payload from Shopify is
//! returned as data, exactly like a success payload. Only transport failures
//! and non-JSON bodies are errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::BTreeMap;
//! use storefront_adapter::clients::{AdminClient, HttpMethod};
//!
//! let client = AdminClient::new(&config)?;
//! let variants = client.get("products/632910392/variants", BTreeMap::new()).await?;
//! ```

mod client;
mod errors;

pub use client::{AdminClient, ADMIN_TOKEN_HEADER};
pub use errors::AdminError;
