//! Collection conversions and product-type faceting.

use crate::clients::storefront::types;
use crate::models::{Collection, Facet, FacetGroup, Product, PLACEHOLDER_IMAGE};
use crate::transform::{transform_product, TransformError};

const TYPE_FACET_GROUP: &str = "Type";

/// Converts a collection and its products into the collection view model.
///
/// `total` is the number of products in the collection.
///
/// # Errors
///
/// Returns the first [`TransformError`] raised by a product.
pub fn transform_collection(collection: types::Collection) -> Result<Collection, TransformError> {
    let total = collection.products.len();
    let items = collection
        .products
        .into_iter()
        .map(transform_product)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Collection {
        url: format!("/s/{}", collection.id),
        id: collection.id,
        name: collection.title,
        image: collection
            .image
            .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |image| image.url),
        total,
        description: collection.description_html,
        items,
        facet_groups: None,
    })
}

/// Counts products per product type, in first-seen order.
#[must_use]
pub fn type_facet_group(items: &[Product]) -> FacetGroup {
    let mut facets: Vec<Facet> = Vec::new();
    for item in items {
        let existing = facets.iter_mut().find(|f| f.code == item.product_type);
        match existing {
            Some(facet) => facet.matches += 1,
            None => facets.push(Facet {
                name: item.product_type.clone(),
                code: item.product_type.clone(),
                matches: 1,
            }),
        }
    }

    FacetGroup {
        name: TYPE_FACET_GROUP.to_string(),
        facets,
    }
}

/// Filters a collection's items by product type and attaches the `Type` facet group.
///
/// With `filters`, only items whose product type is listed are kept; an
/// empty list keeps nothing. `total` is left at the unfiltered count. Facets
/// count the items that remain.
#[must_use]
pub fn apply_type_facets(mut collection: Collection, filters: Option<&[String]>) -> Collection {
    if let Some(filters) = filters {
        collection
            .items
            .retain(|item| filters.contains(&item.product_type));
    }
    collection.facet_groups = Some(vec![type_facet_group(&collection.items)]);
    collection
}
