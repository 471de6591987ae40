//! Error kinds produced by the domain and the repository layer.

use thiserror::Error;

/// A violated product validation rule.
///
/// The `Display` text is what ends up in the `message` field of a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("code is invalid")]
    InvalidCode,
    #[error("description is required")]
    RequiredDescription,
    #[error("title is required")]
    RequiredTitle,
    #[error("reference is required")]
    RequiredReference,
    #[error("price is invalid")]
    InvalidPrice,
}

/// Every failure a product use case can return.
///
/// Use cases propagate these unchanged; translation into HTTP statuses happens
/// only in [`crate::error::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a product with this code already exists")]
    DuplicateCode,

    #[error("product doesn't exist")]
    NotFound,

    #[error("operation timed out")]
    Timeout,

    #[error("operation was cancelled")]
    Cancelled,

    /// Backend fault. The detail is for server-side logs only.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ProductError {
    /// Returns the validation rule that failed, if this is a validation error.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}
