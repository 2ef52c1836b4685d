//! Request cookie context.
//!
//! Cart operations identify the shopper's cart by the `sessionid` cookie.
//! The hosting application passes the request's cookies in explicitly; the
//! adapter never reads ambient state.
//!
//! # Example
//!
//! ```rust
//! use storefront_adapter::session::{Cookies, SESSION_COOKIE};
//!
//! let cookies = Cookies::parse("theme=dark; sessionid=gid%3A%2F%2Fshopify%2FCart%2Fc1");
//! assert_eq!(cookies.get(SESSION_COOKIE), Some("gid://shopify/Cart/c1"));
//! ```

use std::collections::HashMap;

use cookie::Cookie;

use crate::error::AdapterError;

/// Name of the cookie holding the cart id.
pub const SESSION_COOKIE: &str = "sessionid";

/// Cookies of one incoming request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cookies {
    values: HashMap<String, String>,
}

impl Cookies {
    /// Creates an empty cookie set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `Cookie` request header (`name=value; name2=value2`).
    ///
    /// Names and values are percent-decoded and surrounding double quotes are
    /// removed. Malformed pairs are skipped; for a repeated name the first
    /// value wins.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let mut values = HashMap::new();
        for cookie in Cookie::split_parse_encoded(header).filter_map(Result::ok) {
            values
                .entry(cookie.name().to_string())
                .or_insert_with(|| cookie.value_trimmed().to_string());
        }
        Self { values }
    }

    /// Adds or replaces a cookie.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a cookie.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the cart id from the `sessionid` cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MissingSession`] if the cookie is absent or empty.
    pub fn session_id(&self) -> Result<&str, AdapterError> {
        self.get(SESSION_COOKIE)
            .filter(|value| !value.is_empty())
            .ok_or(AdapterError::MissingSession {
                cookie: SESSION_COOKIE,
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Cookies {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
