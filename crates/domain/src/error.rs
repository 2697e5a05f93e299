//! Unified error types for the domain layer.
//!
//! Every failure an API operation can produce is one of these variants.
//! Display strings double as the HTTP error messages, so they are part
//! of the external contract.

use thiserror::Error;

/// Unified error type for domain operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or empty on create.
    #[error("{0}")]
    Validation(String),

    /// No item with the requested id exists in the item store.
    #[error("Item not found.")]
    ItemNotFound,

    /// No character with the requested id exists.
    #[error("Character not found.")]
    CharacterNotFound,

    /// The character exists but holds no item with the requested id.
    #[error("Item not found on this character.")]
    ItemNotOnCharacter,

    /// The character holds no item of type "amulet".
    #[error("Amulet not found for this character.")]
    AmuletNotFound,
}

impl DomainError {
    /// Creates a validation error for a missing required field.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this error maps to HTTP 404 rather than 400.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}
