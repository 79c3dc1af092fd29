use prop_json_property_map::{PropertyError, ValueKind};
use thiserror::Error;

/// Reasons a wire payload is rejected.
///
/// Updates applied before the failing member stay in the collection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property {name} expects a {expected} value")]
    TypeMismatch { name: String, expected: ValueKind },

    #[error("property {name} has a non-numeric element at index {index}")]
    InvalidElement { name: String, index: usize },

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Property(#[from] PropertyError),
}
