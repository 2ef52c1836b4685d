//! Conversions from Storefront API objects into storefront view models.
//!
//! Every function is pure and synchronous. Shape violations the storefront
//! cannot render around (a product without variants, a cart line without an
//! image) are reported as [`TransformError`]; the only defaults are the
//! collection placeholder image and the empty product thumbnail.
//!
//! # Example
//!
//! ```rust
//! use storefront_adapter::clients::storefront::types::{Money, Product, ProductVariant};
//! use storefront_adapter::transform::transform_product;
//!
//! let product = Product {
//!     id: "gid://shopify/Product/1".to_string(),
//!     handle: "tee".to_string(),
//!     title: "Tee".to_string(),
//!     product_type: "Shirt".to_string(),
//!     description_html: String::new(),
//!     options: vec![],
//!     images: vec![],
//!     variants: vec![ProductVariant {
//!         id: "gid://shopify/ProductVariant/10".to_string(),
//!         title: "Default".to_string(),
//!         price: Money { amount: "19.99".to_string(), currency_code: "USD".to_string() },
//!         image: None,
//!         selected_options: vec![],
//!     }],
//! };
//!
//! let view = transform_product(product).unwrap();
//! assert_eq!(view.url, "/p/tee");
//! assert_eq!(view.base_price, 19.99);
//! assert_eq!(view.thumbnail, "");
//! ```

mod cart;
mod collection;
mod menu;
mod product;
mod search;

use std::num::ParseFloatError;

use thiserror::Error;

use crate::clients::storefront::types::Money;

pub use cart::transform_line_item;
pub use collection::{apply_type_facets, transform_collection, type_facet_group};
pub use menu::{transform_menu, transform_menu_item};
pub use product::{product_images, transform_product};
pub use search::{transform_collection_search_result, transform_product_search_result};

/// Errors raised when a Storefront API object cannot become a view model.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A product has no variants, so it has no price or default variant.
    #[error("Product '{handle}' has no variants.")]
    MissingVariant {
        /// The product handle.
        handle: String,
    },

    /// An object that must carry an image has none.
    #[error("{kind} '{id}' has no image.")]
    MissingImage {
        /// What kind of object lacks the image, e.g. `Cart line`.
        kind: &'static str,
        /// Its id or handle.
        id: String,
    },

    /// A price amount is not a decimal number.
    #[error("Invalid price amount '{amount}'.")]
    InvalidPrice {
        /// The amount as sent by Shopify.
        amount: String,
        /// The parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// No variant of a product has the requested color.
    #[error("Product '{handle}' has no variant with color '{color}'.")]
    NoVariantForColor {
        /// The product handle.
        handle: String,
        /// The requested color.
        color: String,
    },

    /// A menu item's navigation state could not be encoded.
    #[error("Failed to encode menu state: {0}")]
    EncodeState(#[from] serde_json::Error),
}

/// Parses a Shopify decimal amount into a number.
fn parse_price(price: &Money) -> Result<f64, TransformError> {
    price
        .amount
        .trim()
        .parse()
        .map_err(|source| TransformError::InvalidPrice {
            amount: price.amount.clone(),
            source,
        })
}
