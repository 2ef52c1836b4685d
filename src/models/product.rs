use serde::Serialize;

/// One selectable value of a product option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionValue {
    pub id: String,
    pub text: String,
}

impl OptionValue {
    /// Creates an option value whose id and text are both `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: value.clone(),
            text: value,
        }
    }
}

/// The values of a `Size` or `Color` option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionFacet {
    pub options: Vec<OptionValue>,
}

/// A product as the storefront renders it.
///
/// `id` is the product handle, not the vendor id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub product_type: String,
    pub name: String,
    /// `/p/{handle}`.
    pub url: String,
    /// Price of the first variant.
    pub base_price: f64,
    /// Description HTML.
    pub description: String,
    pub images: Vec<String>,
    /// First image URL, or an empty string.
    pub thumbnail: String,
    pub thumbnails: Vec<String>,
    /// Id of the first variant.
    pub variant_id: String,
    pub size: Option<OptionFacet>,
    pub color: Option<OptionFacet>,
}

/// Images shown for one color of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductImages {
    pub images: Vec<String>,
    pub thumbnails: Vec<String>,
    pub thumbnail: String,
}
