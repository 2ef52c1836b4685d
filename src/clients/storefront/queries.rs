//! GraphQL documents sent to the Storefront API.
//!
//! Every operation uses a fixed document; connections are read with fixed
//! `first:` sizes and never paged.

/// Page size for collection listings and searches.
pub const COLLECTION_PAGE_SIZE: u32 = 20;

/// Page size for product searches.
pub const PRODUCT_PAGE_SIZE: u32 = 20;

macro_rules! product_fields {
    () => {
        "id handle title productType descriptionHtml \
         options { name optionValues { name } } \
         images(first: 250) { nodes { url } } \
         variants(first: 250) { nodes { id title price { amount currencyCode } \
         image { url } selectedOptions { name value } } }"
    };
}

macro_rules! collection_fields {
    () => {
        "id handle title descriptionHtml image { url }"
    };
}

macro_rules! cart_fields {
    () => {
        "id checkoutUrl totalQuantity \
         lines(first: 250) { nodes { id quantity merchandise { ... on ProductVariant { \
         id title price { amount currencyCode } image { url } product { id handle } } } } }"
    };
}

/// Lists collections with their products.
pub const COLLECTIONS: &str = concat!(
    "query Collections($first: Int!) { collections(first: $first) { nodes { ",
    collection_fields!(),
    " products(first: 250) { nodes { ",
    product_fields!(),
    " } } } } }"
);

/// Lists collections for navigation, without products.
pub const MENU_COLLECTIONS: &str =
    "query MenuCollections($first: Int!) { collections(first: $first) { nodes { id handle title } } }";

/// Fetches one collection and its products by handle.
pub const COLLECTION_BY_HANDLE: &str = concat!(
    "query CollectionByHandle($handle: String!) { collection(handle: $handle) { ",
    collection_fields!(),
    " products(first: 250) { nodes { ",
    product_fields!(),
    " } } } }"
);

/// Fetches one product by handle.
pub const PRODUCT_BY_HANDLE: &str = concat!(
    "query ProductByHandle($handle: String!) { product(handle: $handle) { ",
    product_fields!(),
    " } }"
);

/// Searches products with Shopify's query syntax.
pub const PRODUCT_SEARCH: &str = concat!(
    "query ProductSearch($query: String!, $first: Int!) { products(first: $first, query: $query) { nodes { ",
    product_fields!(),
    " } } }"
);

/// Searches collections with Shopify's query syntax.
pub const COLLECTION_SEARCH: &str = concat!(
    "query CollectionSearch($query: String!, $first: Int!) { collections(first: $first, query: $query) { nodes { ",
    collection_fields!(),
    " } } }"
);

/// Creates an empty cart.
pub const CART_CREATE: &str = concat!(
    "mutation CartCreate { cartCreate { cart { ",
    cart_fields!(),
    " } userErrors { field message } } }"
);

/// Fetches a cart by id.
pub const CART: &str = concat!(
    "query Cart($id: ID!) { cart(id: $id) { ",
    cart_fields!(),
    " } }"
);

/// Adds lines to a cart.
pub const CART_LINES_ADD: &str = concat!(
    "mutation CartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) { cartLinesAdd(cartId: $cartId, lines: $lines) { cart { ",
    cart_fields!(),
    " } userErrors { field message } } }"
);

/// Changes quantities of existing cart lines.
pub const CART_LINES_UPDATE: &str = concat!(
    "mutation CartLinesUpdate($cartId: ID!, $lines: [CartLineUpdateInput!]!) { cartLinesUpdate(cartId: $cartId, lines: $lines) { cart { ",
    cart_fields!(),
    " } userErrors { field message } } }"
);

/// Removes lines from a cart.
pub const CART_LINES_REMOVE: &str = concat!(
    "mutation CartLinesRemove($cartId: ID!, $lineIds: [ID!]!) { cartLinesRemove(cartId: $cartId, lineIds: $lineIds) { cart { ",
    cart_fields!(),
    " } userErrors { field message } } }"
);
