//! View models handed to the storefront framework.
//!
//! All models serialize with camelCase field names. They are built fresh per
//! call by the functions in [`transform`](crate::transform) and are never
//! mutated afterwards.

mod collection;
mod line_item;
mod menu;
mod product;
mod search;

pub use collection::{Collection, Facet, FacetGroup, PLACEHOLDER_IMAGE};
pub use line_item::LineItem;
pub use menu::{Breadcrumb, LoadingCategory, Menu, MenuItem, MenuItemState, MenuLevel, Prefetch};
pub use product::{OptionFacet, OptionValue, Product, ProductImages};
pub use search::SearchResult;
