use crate::clients::storefront::types::{Collection, Product};
use crate::models::SearchResult;
use crate::transform::TransformError;

/// Converts a product into a search suggestion linking to the product page.
#[must_use]
pub fn transform_product_search_result(product: Product) -> SearchResult {
    SearchResult {
        text: product.title,
        url: format!("/p/{}", product.handle),
        thumbnail: product.images.into_iter().next().map(|image| image.url),
    }
}

/// Converts a collection into a search suggestion.
///
/// The URL uses the product path `/p/{handle}`, as storefront routing
/// expects for suggestions.
///
/// # Errors
///
/// Returns [`TransformError::MissingImage`] if the collection has no image.
pub fn transform_collection_search_result(
    collection: Collection,
) -> Result<SearchResult, TransformError> {
    let image = collection
        .image
        .ok_or_else(|| TransformError::MissingImage {
            kind: "Collection",
            id: collection.handle.clone(),
        })?;

    Ok(SearchResult {
        text: collection.title,
        url: format!("/p/{}", collection.handle),
        thumbnail: Some(image.url),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::fixtures::{image, product};

    #[test]
    fn test_product_result_uses_first_image() {
        let mut source = product("tee", "Shirt");
        source.title = "Tee".to_string();
        source.images = vec![image("https://cdn/1.jpg"), image("https://cdn/2.jpg")];

        let result = transform_product_search_result(source);

        assert_eq!(result.text, "Tee");
        assert_eq!(result.url, "/p/tee");
        assert_eq!(result.thumbnail.as_deref(), Some("https://cdn/1.jpg"));
    }

    #[test]
    fn test_product_result_without_images_has_no_thumbnail() {
        let result = transform_product_search_result(product("tee", "Shirt"));

        assert!(result.thumbnail.is_none());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("thumbnail").is_none());
    }

    #[test]
    fn test_collection_result_links_to_product_path() {
        let collection = Collection {
            id: "gid://shopify/Collection/1".to_string(),
            handle: "hats".to_string(),
            title: "Hats".to_string(),
            description_html: String::new(),
            image: Some(image("https://cdn/hats.jpg")),
            products: vec![],
        };

        let result = transform_collection_search_result(collection).unwrap();

        assert_eq!(result.text, "Hats");
        assert_eq!(result.url, "/p/hats");
        assert_eq!(result.thumbnail.as_deref(), Some("https://cdn/hats.jpg"));
    }

    #[test]
    fn test_collection_result_requires_image() {
        let collection = Collection {
            id: "gid://shopify/Collection/1".to_string(),
            handle: "hats".to_string(),
            title: "Hats".to_string(),
            description_html: String::new(),
            image: None,
            products: vec![],
        };

        assert!(matches!(
            transform_collection_search_result(collection),
            Err(TransformError::MissingImage {
                kind: "Collection",
                ..
            })
        ));
    }
}
