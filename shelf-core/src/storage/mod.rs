//! Record store abstraction
//!
//! The lifecycle engine never talks to a store; callers persist the records
//! it accepts through a [`BookStore`].

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::StoreError;
use crate::types::{Book, BookDraft};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StoreError>;

/// Durable collection of books keyed by id
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new record, assigning its id and added date
    async fn create(&self, draft: BookDraft) -> StorageResult<Book>;

    /// All records; callers must not rely on the order
    async fn list(&self) -> StorageResult<Vec<Book>>;

    /// A single record
    async fn get(&self, id: Uuid) -> StorageResult<Book>;

    /// Overwrite the record stored under `id`
    async fn replace(&self, id: Uuid, book: Book) -> StorageResult<Book>;

    /// Delete the record stored under `id`
    async fn remove(&self, id: Uuid) -> StorageResult<()>;
}

/// Assign store identity to a draft
pub(crate) fn materialize(draft: BookDraft) -> Book {
    Book::from_draft(draft, Uuid::new_v4(), Utc::now())
}

pub(crate) fn ensure_same_id(id: Uuid, book: &Book) -> StorageResult<()> {
    if book.id == id {
        Ok(())
    } else {
        Err(StoreError::IdMismatch {
            path: id.to_string(),
            body: book.id.to_string(),
        })
    }
}

/// In-memory store (for tests and embedding), keeps insertion order
#[derive(Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn create(&self, draft: BookDraft) -> StorageResult<Book> {
        let book = materialize(draft);
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn list(&self) -> StorageResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> StorageResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn replace(&self, id: Uuid, book: Book) -> StorageResult<Book> {
        ensure_same_id(id, &book)?;
        let mut books = self.books.write().await;
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = book.clone();
        Ok(book)
    }

    async fn remove(&self, id: Uuid) -> StorageResult<()> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
