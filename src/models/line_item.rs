use serde::Serialize;

/// A cart line as the storefront renders it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// The vendor product id.
    pub id: String,
    pub variant_id: String,
    /// The variant title.
    pub name: String,
    /// `/p/{product id}`.
    pub url: String,
    pub base_price: f64,
    /// The cart line id, used for updates and removals.
    pub line_item_id: String,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub thumbnails: Vec<String>,
    pub quantity: u32,
}
