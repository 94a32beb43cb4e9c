//! Errors raised by form document operations

use super::FieldId;
use thiserror::Error;

/// Precondition failures of catalog and document operations.
///
/// Each error aborts only the operation that raised it; the document is left
/// in its last valid state.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field type: {0}")]
    UnknownType(String),

    #[error("index {index} out of range for document of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no field with id {0}")]
    UnknownId(FieldId),

    #[error("duplicate field id {0}")]
    DuplicateId(FieldId),

    #[error("field {id} is missing required property '{key}'")]
    MissingProperty { id: FieldId, key: &'static str },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
