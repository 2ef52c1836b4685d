//! Cart operations.
//!
//! The cart id is the session id. Mutating operations read it from the
//! `sessionid` cookie of the request.

use serde::Deserialize;
use tokio::task::JoinHandle;

use crate::adapter::StorefrontAdapter;
use crate::clients::storefront::types::Cart;
use crate::clients::storefront::{CartLineInput, CartLineUpdateInput};
use crate::error::AdapterError;
use crate::models::LineItem;
use crate::session::Cookies;
use crate::transform::transform_line_item;

/// A variant and quantity to add to the cart.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub variant_id: String,
    pub quantity: u32,
}

/// A new quantity for an existing cart line.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCart {
    pub line_item_id: String,
    pub quantity: u32,
}

/// A cart line to remove.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCart {
    pub line_item_id: String,
}

impl StorefrontAdapter {
    /// Creates an empty cart and returns its id, the new session id.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Storefront`] if the cart cannot be created.
    pub async fn create_session_id(&self) -> Result<String, AdapterError> {
        let cart = self.storefront.create_cart().await?;
        Ok(cart.id)
    }

    /// Returns the lines of the cart with the given session id.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotFound`] for an unknown or expired cart, and
    /// [`AdapterError`] if the request or a transformation fails.
    pub async fn get_cart(&self, session_id: &str) -> Result<Vec<LineItem>, AdapterError> {
        let cart = self
            .storefront
            .fetch_cart(session_id)
            .await?
            .ok_or_else(|| AdapterError::NotFound {
                resource: "cart",
                handle: session_id.to_string(),
            })?;

        Ok(cart
            .lines
            .into_iter()
            .map(transform_line_item)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Adds a variant to the session's cart and returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MissingSession`] without a `sessionid` cookie,
    /// and [`AdapterError::Storefront`] if the mutation fails.
    pub async fn add_to_cart(
        &self,
        cookies: &Cookies,
        item: &AddToCart,
    ) -> Result<Cart, AdapterError> {
        let cart_id = cookies.session_id()?;
        let lines = [CartLineInput {
            merchandise_id: item.variant_id.clone(),
            quantity: item.quantity,
        }];
        Ok(self.storefront.add_cart_lines(cart_id, &lines).await?)
    }

    /// Changes the quantity of a line in the session's cart and returns the
    /// updated cart.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MissingSession`] without a `sessionid` cookie,
    /// and [`AdapterError::Storefront`] if the mutation fails.
    pub async fn update_cart(
        &self,
        cookies: &Cookies,
        item: &UpdateCart,
    ) -> Result<Cart, AdapterError> {
        let cart_id = cookies.session_id()?;
        let lines = [CartLineUpdateInput {
            id: item.line_item_id.clone(),
            quantity: item.quantity,
        }];
        Ok(self.storefront.update_cart_lines(cart_id, &lines).await?)
    }

    /// Removes a line from the session's cart in a background task.
    ///
    /// The caller may drop the handle; a failure is logged at error level
    /// inside the task either way, and also returned through the handle.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use = "dropping the handle detaches the task; await it to observe the result"]
    pub fn remove_from_cart(
        &self,
        cookies: &Cookies,
        item: &RemoveFromCart,
    ) -> JoinHandle<Result<Cart, AdapterError>> {
        let storefront = self.storefront.clone();
        let session_id = cookies.session_id().map(str::to_string);
        let line_ids = vec![item.line_item_id.clone()];

        tokio::spawn(async move {
            let result = match session_id {
                Ok(session_id) => storefront
                    .remove_cart_lines(&session_id, &line_ids)
                    .await
                    .map_err(AdapterError::from),
                Err(error) => Err(error),
            };
            if let Err(error) = &result {
                tracing::error!(%error, line_ids = ?line_ids, "Error removing cart line");
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_deserialize_from_camel_case() {
        let json = r#"{"variantId":"gid://shopify/ProductVariant/1","quantity":2}"#;
        let add: AddToCart = serde_json::from_str(json).unwrap();
        assert_eq!(add.variant_id, "gid://shopify/ProductVariant/1");
        assert_eq!(add.quantity, 2);

        let json = r#"{"lineItemId":"gid://shopify/CartLine/1","quantity":0}"#;
        let update: UpdateCart = serde_json::from_str(json).unwrap();
        assert_eq!(update.line_item_id, "gid://shopify/CartLine/1");

        let json = r#"{"lineItemId":"gid://shopify/CartLine/1"}"#;
        let remove: RemoveFromCart = serde_json::from_str(json).unwrap();
        assert_eq!(remove.line_item_id, "gid://shopify/CartLine/1");
    }
}
