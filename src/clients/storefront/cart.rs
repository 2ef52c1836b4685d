//! Cart operations.
//!
//! A cart id doubles as the storefront session identifier. Each mutation
//! returns the updated cart, or fails with the mutation's `userErrors`.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::storefront::queries::{
    CART, CART_CREATE, CART_LINES_ADD, CART_LINES_REMOVE, CART_LINES_UPDATE,
};
use crate::clients::storefront::types::Cart;
use crate::clients::storefront::{StorefrontClient, StorefrontError, UserError};

/// A line to add to a cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    /// The product variant id.
    pub merchandise_id: String,
    pub quantity: u32,
}

/// A quantity change for an existing cart line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartLineUpdateInput {
    /// The cart line id.
    pub id: String,
    pub quantity: u32,
}

/// Shared shape of every cart mutation payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartPayload {
    cart: Option<Cart>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl CartPayload {
    fn into_cart(self) -> Result<Cart, StorefrontError> {
        if !self.user_errors.is_empty() {
            return Err(StorefrontError::UserErrors {
                errors: self.user_errors,
            });
        }
        self.cart.ok_or(StorefrontError::MissingData)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCreateData {
    cart_create: CartPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLinesAddData {
    cart_lines_add: CartPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLinesUpdateData {
    cart_lines_update: CartPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLinesRemoveData {
    cart_lines_remove: CartPayload,
}

#[derive(Deserialize)]
struct CartData {
    cart: Option<Cart>,
}

impl StorefrontClient {
    /// Creates an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request fails or the mutation
    /// reports user errors.
    pub async fn create_cart(&self) -> Result<Cart, StorefrontError> {
        let data: CartCreateData = self.query(CART_CREATE, json!({})).await?;
        data.cart_create.into_cart()
    }

    /// Fetches a cart by id. Returns `Ok(None)` for an unknown or expired cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request or decoding fails.
    pub async fn fetch_cart(&self, cart_id: &str) -> Result<Option<Cart>, StorefrontError> {
        let data: CartData = self.query(CART, json!({ "id": cart_id })).await?;
        Ok(data.cart)
    }

    /// Adds lines to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request fails or the mutation
    /// reports user errors.
    pub async fn add_cart_lines(
        &self,
        cart_id: &str,
        lines: &[CartLineInput],
    ) -> Result<Cart, StorefrontError> {
        let data: CartLinesAddData = self
            .query(CART_LINES_ADD, json!({ "cartId": cart_id, "lines": lines }))
            .await?;
        data.cart_lines_add.into_cart()
    }

    /// Changes the quantity of existing cart lines.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request fails or the mutation
    /// reports user errors.
    pub async fn update_cart_lines(
        &self,
        cart_id: &str,
        lines: &[CartLineUpdateInput],
    ) -> Result<Cart, StorefrontError> {
        let data: CartLinesUpdateData = self
            .query(
                CART_LINES_UPDATE,
                json!({ "cartId": cart_id, "lines": lines }),
            )
            .await?;
        data.cart_lines_update.into_cart()
    }

    /// Removes lines from a cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] if the request fails or the mutation
    /// reports user errors.
    pub async fn remove_cart_lines(
        &self,
        cart_id: &str,
        line_ids: &[String],
    ) -> Result<Cart, StorefrontError> {
        let data: CartLinesRemoveData = self
            .query(
                CART_LINES_REMOVE,
                json!({ "cartId": cart_id, "lineIds": line_ids }),
            )
            .await?;
        data.cart_lines_remove.into_cart()
    }
}
