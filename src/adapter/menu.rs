use crate::adapter::StorefrontAdapter;
use crate::error::AdapterError;
use crate::models::Menu;
use crate::transform::transform_menu;

impl StorefrontAdapter {
    /// Builds the navigation menu: one root level linking every collection.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the collections cannot be fetched.
    pub async fn fetch_menu(&self) -> Result<Menu, AdapterError> {
        let collections = self.storefront.fetch_menu_collections().await?;
        Ok(transform_menu(&collections)?)
    }
}
