//! Storefront API error types.
//!
//! GraphQL reports most failures with HTTP 200 and an `errors` array in the
//! body; mutations additionally report `userErrors` next to their payload.
//! Both are surfaced as errors here, the same way the vendor SDK rejects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    /// The error message.
    pub message: String,
}

/// One entry of a mutation's `userErrors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the input field that caused the error.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

/// Error type for Storefront API operations.
///
/// ```rust
/// use storefront_adapter::clients::StorefrontError;
///
/// let error = StorefrontError::Graphql { messages: vec!["Throttled".to_string()] };
/// assert_eq!(error.to_string(), "Storefront API returned errors: Throttled");
/// ```
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("Storefront API responded with status {code}: {body}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The JSON body, serialized.
        body: String,
    },

    /// The response carried a GraphQL `errors` array.
    #[error("Storefront API returned errors: {}", .messages.join("; "))]
    Graphql {
        /// The error messages, in response order.
        messages: Vec<String>,
    },

    /// A mutation reported `userErrors`.
    #[error("Storefront API rejected the mutation: {}", .errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
    UserErrors {
        /// The user errors, in response order.
        errors: Vec<UserError>,
    },

    /// The response had neither `data` nor `errors`.
    #[error("Storefront API response contained no data")]
    MissingData,

    /// The `data` object did not match the expected shape.
    #[error("Unexpected Storefront API response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
