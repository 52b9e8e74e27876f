//! Shelf Core Library
//!
//! This crate provides the book record types, the lifecycle engine that keeps
//! reading status and page progress consistent, and the record store
//! abstraction its callers persist through.

pub mod error;
pub mod lifecycle;
pub mod query;
pub mod report;
pub mod shelf;
pub mod storage;
pub mod types;

pub use error::{Result, ShelfError, StoreError, ValidationError};
pub use query::{BookFilter, Counts};
pub use report::ReadingGoal;
pub use shelf::{Revision, Shelf};
pub use types::{Book, BookAction, BookChange, BookDraft, Genre, NewBook, ReadingStatus};
