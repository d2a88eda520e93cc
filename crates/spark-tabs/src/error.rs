//! Tab error types

use thiserror::Error;

/// Failure reported by a `before_remove` confirmation hook.
///
/// None of these ever reach callers of the registry: a failed confirmation
/// simply resolves to `false`.
#[derive(Error, Debug)]
pub enum TabError {
    #[error("Removal cancelled: {0}")]
    Cancelled(String),

    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Confirmation failed: {0}")]
    Confirmation(#[from] Box<dyn std::error::Error + Send + Sync>),
}
