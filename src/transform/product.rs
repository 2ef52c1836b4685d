//! Product conversions.

use crate::clients::storefront::types;
use crate::models::{OptionFacet, OptionValue, Product, ProductImages};
use crate::transform::{parse_price, TransformError};

const SIZE_OPTION: &str = "Size";
const COLOR_OPTION: &str = "Color";

/// Converts a product into its view model.
///
/// The price and `variant_id` come from the first variant; `size` and
/// `color` are built from the options named `Size` and `Color`.
///
/// # Errors
///
/// Returns [`TransformError::MissingVariant`] if the product has no variants
/// and [`TransformError::InvalidPrice`] if the first variant's price is not a
/// number.
pub fn transform_product(product: types::Product) -> Result<Product, TransformError> {
    let first_variant = product
        .variants
        .first()
        .ok_or_else(|| TransformError::MissingVariant {
            handle: product.handle.clone(),
        })?;
    let base_price = parse_price(&first_variant.price)?;
    let variant_id = first_variant.id.clone();

    let size = option_facet(&product, SIZE_OPTION);
    let color = option_facet(&product, COLOR_OPTION);

    let images: Vec<String> = product.images.into_iter().map(|image| image.url).collect();
    let thumbnail = images.first().cloned().unwrap_or_default();

    Ok(Product {
        url: format!("/p/{}", product.handle),
        id: product.handle,
        product_type: product.product_type,
        name: product.title,
        base_price,
        description: product.description_html,
        thumbnails: images.clone(),
        images,
        thumbnail,
        variant_id,
        size,
        color,
    })
}

fn option_facet(product: &types::Product, name: &str) -> Option<OptionFacet> {
    product.option(name).map(|option| OptionFacet {
        options: option
            .option_values
            .iter()
            .map(|value| OptionValue::new(value.name.clone()))
            .collect(),
    })
}

/// Returns the images for one color of a product.
///
/// Uses the image of the first variant whose `Color` option equals `color`.
///
/// # Errors
///
/// Returns [`TransformError::NoVariantForColor`] if no variant has the color
/// and [`TransformError::MissingImage`] if that variant has no image.
pub fn product_images(
    product: &types::Product,
    color: &str,
) -> Result<ProductImages, TransformError> {
    let variant = product
        .variants
        .iter()
        .find(|variant| variant.option_value(COLOR_OPTION) == Some(color))
        .ok_or_else(|| TransformError::NoVariantForColor {
            handle: product.handle.clone(),
            color: color.to_string(),
        })?;

    let image = variant
        .image
        .as_ref()
        .ok_or_else(|| TransformError::MissingImage {
            kind: "Variant",
            id: variant.id.clone(),
        })?;

    let images = vec![image.url.clone()];
    Ok(ProductImages {
        thumbnail: image.url.clone(),
        thumbnails: images.clone(),
        images,
    })
}
