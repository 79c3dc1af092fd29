use thiserror::Error;

use crate::kind::ValueKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("duplicate property: {0}")]
    DuplicateProperty(String),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property {name} is {expected}, got {found}")]
    KindMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("property {name} of kind {kind} cannot carry these bounds")]
    InvalidBounds { name: String, kind: ValueKind },

    #[error("invalid declaration for {name}: {reason}")]
    InvalidDeclaration { name: String, reason: String },

    #[error("malformed declaration: {0}")]
    MalformedDeclaration(String),
}
