//! The caller side of the lifecycle: load, decide, persist

use crate::error::Result;
use crate::lifecycle;
use crate::query::{self, BookFilter, Counts};
use crate::storage::BookStore;
use crate::types::{Book, BookChange, NewBook, ReadingStatus};
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of [`Shelf::revise`]
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    /// The record as it now stands in the store
    pub book: Book,

    /// False when the accepted intent left the record as it was
    pub persisted: bool,
}

/// Routes every mutation through the lifecycle engine before it reaches the
/// store. Nothing is persisted when the engine rejects an intent.
pub struct Shelf<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for Shelf<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BookStore + ?Sized> Shelf<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and persist a new book
    pub async fn add(&self, new: NewBook) -> Result<Book> {
        let draft = lifecycle::prepare(new)?;
        let book = self.store.create(draft).await?;
        tracing::info!(id = %book.id, title = %book.title, status = %book.status, "book added");
        Ok(book)
    }

    pub async fn get(&self, id: Uuid) -> Result<Book> {
        Ok(self.store.get(id).await?)
    }

    /// All books, oldest first
    pub async fn list(&self) -> Result<Vec<Book>> {
        let mut books = self.store.list().await?;
        books.sort_by_key(|b| b.added_date);
        Ok(books)
    }

    /// Books matching `filter`, oldest first
    pub async fn find(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        let books = self.list().await?;
        Ok(filter.apply(&books).into_iter().cloned().collect())
    }

    /// Apply an intent to the stored record and persist the result
    pub async fn update(&self, id: Uuid, change: &BookChange) -> Result<Book> {
        Ok(self.revise(id, change).await?.book)
    }

    /// Like [`Shelf::update`], also reporting whether the store was written
    pub async fn revise(&self, id: Uuid, change: &BookChange) -> Result<Revision> {
        let current = self.store.get(id).await?;
        let next = match lifecycle::apply(&current, change) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!(%id, reason = %e, "intent rejected");
                return Err(e.into());
            }
        };

        if next == current {
            tracing::debug!(%id, "intent produced no change");
            return Ok(Revision {
                book: current,
                persisted: false,
            });
        }

        let saved = self.store.replace(id, next).await?;
        tracing::info!(
            %id,
            status = %saved.status,
            pages_read = saved.pages_read,
            pages = saved.pages,
            "book updated"
        );
        Ok(Revision {
            book: saved,
            persisted: true,
        })
    }

    pub async fn start_reading(&self, id: Uuid) -> Result<Book> {
        self.update(id, &BookChange::start_reading()).await
    }

    pub async fn toggle_wishlist(&self, id: Uuid) -> Result<Book> {
        self.update(id, &BookChange::toggle_wishlist()).await
    }

    pub async fn set_progress(&self, id: Uuid, pages_read: i64) -> Result<Book> {
        self.update(id, &BookChange::progress(pages_read)).await
    }

    pub async fn set_status(&self, id: Uuid, status: ReadingStatus) -> Result<Book> {
        self.update(id, &BookChange::status(status)).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.store.remove(id).await?;
        tracing::info!(%id, "book removed");
        Ok(())
    }

    /// Collection totals
    pub async fn stats(&self) -> Result<Counts> {
        Ok(query::counts(&self.store.list().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ShelfError, StoreError, ValidationError};
    use crate::storage::{MemoryStore, StorageResult};
    use crate::types::{BookDraft, Genre};
    use async_trait::async_trait;

    fn shelf() -> Shelf<MemoryStore> {
        Shelf::new(Arc::new(MemoryStore::new()))
    }

    fn new_book() -> NewBook {
        NewBook::new("Kindred", "Octavia E. Butler", Genre::HistoricalFiction, 264)
    }

    #[tokio::test]
    async fn test_add_then_progress_to_completion() {
        let shelf = shelf();
        let book = shelf.add(new_book()).await.unwrap();
        assert_eq!(book.status, ReadingStatus::ToRead);

        let book = shelf.start_reading(book.id).await.unwrap();
        assert_eq!((book.status, book.pages_read), (ReadingStatus::Reading, 0));

        let book = shelf.set_progress(book.id, 100).await.unwrap();
        assert_eq!(book.status, ReadingStatus::Reading);

        let book = shelf.set_progress(book.id, 264).await.unwrap();
        assert_eq!(book.status, ReadingStatus::Completed);
        assert_eq!(shelf.get(book.id).await.unwrap(), book);

        let stats = shelf.stats().await.unwrap();
        assert_eq!((stats.total, stats.completed), (1, 1));
    }

    #[tokio::test]
    async fn test_rejected_intent_is_not_persisted() {
        let shelf = shelf();
        let book = shelf.add(new_book()).await.unwrap();
        let book = shelf.set_progress(book.id, 10).await.unwrap();

        let err = shelf.toggle_wishlist(book.id).await.unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Validation(ValidationError::WishlistFromStatus(ReadingStatus::Reading))
        ));
        assert!(!err.is_retryable());
        assert_eq!(shelf.get(book.id).await.unwrap(), book);
    }

    #[tokio::test]
    async fn test_unchanged_record_is_not_rewritten() {
        let shelf = shelf();
        let book = shelf.add(new_book()).await.unwrap();

        let same = shelf
            .revise(book.id, &BookChange::new().with_title("Kindred"))
            .await
            .unwrap();
        assert!(!same.persisted);
        assert_eq!(same.book, book);

        let moved = shelf
            .revise(book.id, &BookChange::progress(40))
            .await
            .unwrap();
        assert!(moved.persisted);
        assert_eq!(moved.book.status, ReadingStatus::Reading);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_pages() {
        let shelf = shelf();
        let mut new = new_book();
        new.pages = Some(0);
        assert!(shelf.add(new).await.is_err());
        assert!(shelf.list().await.unwrap().is_empty());
    }

    struct DownStore;

    #[async_trait]
    impl BookStore for DownStore {
        async fn create(&self, _draft: BookDraft) -> StorageResult<Book> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn list(&self) -> StorageResult<Vec<Book>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn get(&self, _id: Uuid) -> StorageResult<Book> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn replace(&self, _id: Uuid, _book: Book) -> StorageResult<Book> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn remove(&self, _id: Uuid) -> StorageResult<()> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_outage_is_retryable() {
        let shelf = Shelf::new(Arc::new(DownStore));
        let err = shelf.add(new_book()).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let store: Arc<dyn BookStore> = Arc::new(MemoryStore::new());
        let shelf = Shelf::new(store);
        let book = shelf.add(new_book()).await.unwrap();
        assert_eq!(shelf.find(&BookFilter::default()).await.unwrap(), vec![book]);
    }
}
