use crate::clients::storefront::types::CartLine;
use crate::models::LineItem;
use crate::transform::{parse_price, TransformError};

/// Converts a cart line into a line item.
///
/// # Errors
///
/// Returns [`TransformError::MissingImage`] if the line's variant has no
/// image and [`TransformError::InvalidPrice`] for an unparsable price.
pub fn transform_line_item(line: CartLine) -> Result<LineItem, TransformError> {
    let merchandise = line.merchandise;
    let image = merchandise
        .image
        .ok_or_else(|| TransformError::MissingImage {
            kind: "Cart line",
            id: line.id.clone(),
        })?;
    let base_price = parse_price(&merchandise.price)?;

    Ok(LineItem {
        url: format!("/p/{}", merchandise.product.id),
        id: merchandise.product.id,
        variant_id: merchandise.id,
        name: merchandise.title,
        base_price,
        line_item_id: line.id,
        images: vec![image.url.clone()],
        thumbnails: vec![image.url.clone()],
        thumbnail: image.url,
        quantity: line.quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::storefront::types::{CartMerchandise, CartMerchandiseProduct};
    use crate::transform::fixtures::{image, money};

    fn line(image_url: Option<&str>) -> CartLine {
        CartLine {
            id: "gid://shopify/CartLine/abc".to_string(),
            quantity: 3,
            merchandise: CartMerchandise {
                id: "gid://shopify/ProductVariant/10".to_string(),
                title: "Red / M".to_string(),
                price: money("12.50"),
                image: image_url.map(image),
                product: CartMerchandiseProduct {
                    id: "gid://shopify/Product/1".to_string(),
                    handle: "tee".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_transform_line_item_maps_fields() {
        let item = transform_line_item(line(Some("https://cdn/v.jpg"))).unwrap();

        assert_eq!(item.id, "gid://shopify/Product/1");
        assert_eq!(item.variant_id, "gid://shopify/ProductVariant/10");
        assert_eq!(item.name, "Red / M");
        assert_eq!(item.url, "/p/gid://shopify/Product/1");
        assert!((item.base_price - 12.5).abs() < f64::EPSILON);
        assert_eq!(item.line_item_id, "gid://shopify/CartLine/abc");
        assert_eq!(item.images, vec!["https://cdn/v.jpg"]);
        assert_eq!(item.thumbnails, item.images);
        assert_eq!(item.thumbnail, "https://cdn/v.jpg");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_transform_line_item_without_image_fails() {
        let error = transform_line_item(line(None)).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Cart line 'gid://shopify/CartLine/abc' has no image."
        );
    }
}
