use serde::Serialize;

use super::Product;

/// Image URL used for collections without an image.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.it/100?text=PRODUCT";

/// One facet value and how many products match it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub name: String,
    pub code: String,
    pub matches: usize,
}

/// A named group of facets, e.g. `Type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetGroup {
    pub name: String,
    pub facets: Vec<Facet>,
}

/// A collection (subcategory) as the storefront renders it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// The vendor collection id.
    pub id: String,
    pub name: String,
    /// Image URL, or [`PLACEHOLDER_IMAGE`].
    pub image: String,
    /// `/s/{id}`.
    pub url: String,
    /// Product count before any filtering.
    pub total: usize,
    pub description: String,
    pub items: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_groups: Option<Vec<FacetGroup>>,
}
