use crate::clients::storefront::types::Collection;
use crate::models::{
    Breadcrumb, LoadingCategory, Menu, MenuItem, MenuItemState, MenuLevel, Prefetch,
};
use crate::transform::TransformError;

/// Builds the link for one collection.
///
/// # Errors
///
/// Returns [`TransformError::EncodeState`] if the state cannot be encoded.
pub fn transform_menu_item(collection: &Collection) -> Result<MenuItem, TransformError> {
    let title = &collection.title;
    let state = MenuItemState {
        loading_category: LoadingCategory {
            name: title.clone(),
            id: title.clone(),
        },
        breadcrumbs: vec![
            Breadcrumb {
                url: Some("/".to_string()),
                text: "Home".to_string(),
            },
            Breadcrumb {
                url: None,
                text: title.clone(),
            },
        ],
    };

    Ok(MenuItem {
        text: title.clone(),
        prefetch: Prefetch::Visible,
        url: format!("/s/{}", collection.handle),
        state: serde_json::to_string(&state)?,
    })
}

/// Builds a single-level root menu with one item per collection, in order.
///
/// # Errors
///
/// See [`transform_menu_item`].
pub fn transform_menu(collections: &[Collection]) -> Result<Menu, TransformError> {
    let items = collections
        .iter()
        .map(transform_menu_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Menu {
        levels: vec![MenuLevel { root: true, items }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(handle: &str, title: &str) -> Collection {
        Collection {
            id: format!("gid://shopify/Collection/{handle}"),
            handle: handle.to_string(),
            title: title.to_string(),
            description_html: String::new(),
            image: None,
            products: vec![],
        }
    }

    #[test]
    fn test_menu_item_links_to_collection_handle() {
        let item = transform_menu_item(&collection("mens-shirts", "Men's Shirts")).unwrap();

        assert_eq!(item.text, "Men's Shirts");
        assert_eq!(item.prefetch, Prefetch::Visible);
        assert_eq!(item.url, "/s/mens-shirts");
        assert_eq!(
            item.state,
            r#"{"loadingCategory":{"name":"Men's Shirts","id":"Men's Shirts"},"breadcrumbs":[{"url":"/","text":"Home"},{"text":"Men's Shirts"}]}"#
        );
    }

    #[test]
    fn test_menu_has_one_root_level_in_collection_order() {
        let collections = [collection("hats", "Hats"), collection("shoes", "Shoes")];
        let menu = transform_menu(&collections).unwrap();

        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value["levels"].as_array().unwrap().len(), 1);
        assert_eq!(value["levels"][0]["root"], json!(true));
        assert_eq!(value["levels"][0]["items"][0]["text"], "Hats");
        assert_eq!(value["levels"][0]["items"][1]["url"], "/s/shoes");
        assert_eq!(value["levels"][0]["items"][1]["prefetch"], "visible");
    }

    #[test]
    fn test_empty_collection_list_gives_empty_root_level() {
        let menu = transform_menu(&[]).unwrap();

        assert_eq!(menu.levels.len(), 1);
        assert!(menu.levels[0].root);
        assert!(menu.levels[0].items.is_empty());
    }
}
