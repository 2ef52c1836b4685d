//! Storefront API response objects.
//!
//! These mirror the fields selected in [`queries`](super::queries). GraphQL
//! connections (`{ nodes: [...] }`) are flattened into plain vectors.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
}

/// Reads a `{ nodes: [...] }` connection into its node list; `null` is empty.
fn nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let connection = Option::<Connection<T>>::deserialize(deserializer)?;
    Ok(connection.map(|c| c.nodes).unwrap_or_default())
}

/// An image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// The image URL.
    pub url: String,
}

/// A monetary amount. Shopify sends the amount as a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount, e.g. `"19.99"`.
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// A `name`/`value` pair describing a variant, e.g. `Color = Red`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// A purchasable variant of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

impl ProductVariant {
    /// Returns the value of the selected option with the given name.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|option| option.name == name)
            .map(|option| option.value.as_str())
    }
}

/// One value of a product option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionValue {
    pub name: String,
}

/// A product option such as `Size` or `Color` with its values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub name: String,
    #[serde(default)]
    pub option_values: Vec<ProductOptionValue>,
}

/// A product as returned by the Storefront API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default, deserialize_with = "nodes")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "nodes")]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Returns the option with the given name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

/// A collection as returned by the Storefront API.
///
/// `products` is empty for documents that do not select it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default, deserialize_with = "nodes")]
    pub products: Vec<Product>,
}

/// The product a cart line's variant belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartMerchandiseProduct {
    pub id: String,
    pub handle: String,
}

/// The variant a cart line holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartMerchandise {
    pub id: String,
    pub title: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<Image>,
    pub product: CartMerchandiseProduct,
}

/// One line of a cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub quantity: u32,
    pub merchandise: CartMerchandise,
}

/// A cart; its id is the session identifier stored in the `sessionid` cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub checkout_url: String,
    #[serde(default)]
    pub total_quantity: u32,
    #[serde(default, deserialize_with = "nodes")]
    pub lines: Vec<CartLine>,
}
