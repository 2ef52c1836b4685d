use serde::Serialize;

/// When the storefront should prefetch a menu link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefetch {
    /// Prefetch once the link scrolls into view.
    Visible,
}

/// The navigation menu: a single root level of collection links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub levels: Vec<MenuLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuLevel {
    pub root: bool,
    pub items: Vec<MenuItem>,
}

/// A link to one collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub text: String,
    pub prefetch: Prefetch,
    /// `/s/{handle}`.
    pub url: String,
    /// [`MenuItemState`] encoded as a JSON string.
    pub state: String,
}

/// Navigation state carried by a menu link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemState {
    pub loading_category: LoadingCategory,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// The category shown while the linked collection loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoadingCategory {
    pub name: String,
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub text: String,
}
