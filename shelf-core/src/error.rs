//! Error types for Shelf Core

use crate::types::ReadingStatus;
use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Shelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ShelfError {
    /// Whether retrying the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ShelfError::Store(StoreError::Unavailable(_)))
    }
}

/// Reasons the lifecycle engine rejects an intent.
///
/// A rejected intent never produces a partial record; the caller keeps the
/// record it passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Total pages must be a positive number, got {0}")]
    InvalidPages(i64),

    #[error("Cannot move a book from {from} to {to}")]
    IllegalTransition {
        from: ReadingStatus,
        to: ReadingStatus,
    },

    #[error("Only 'To Read' books can be added to the wishlist (book is {0})")]
    WishlistFromStatus(ReadingStatus),

    #[error("Already reading this book")]
    AlreadyReading,

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

impl ValidationError {
    /// Informational rejections are no-ops the UI reports without blocking
    pub fn is_informational(&self) -> bool {
        matches!(self, ValidationError::AlreadyReading)
    }
}

/// Errors raised by record store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt record data: {0}")]
    Corrupt(String),

    #[error("Record id mismatch: path {path}, body {body}")]
    IdMismatch { path: String, body: String },
}
