//! JSON file store, one `{ "books": [...] }` document on disk

use super::{ensure_same_id, materialize, BookStore, StorageResult};
use crate::error::StoreError;
use crate::types::{Book, BookDraft};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// On-disk document layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct Database {
    #[serde(default)]
    books: Vec<Book>,
}

/// Store backed by a single JSON file.
///
/// Every call reads the file, so edits made by another process are picked
/// up. Writes within this process are serialized.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StorageResult<Database> {
        // Missing file means an empty collection
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) if data.trim().is_empty() => Ok(Database::default()),
            Ok(data) => {
                serde_json::from_str(&data).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Database::default()),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    /// Write to a temp file then rename to avoid partial writes
    async fn save(&self, db: &Database) -> StorageResult<()> {
        let data =
            serde_json::to_string_pretty(db).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl BookStore for JsonFileStore {
    async fn create(&self, draft: BookDraft) -> StorageResult<Book> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.load().await?;
        let book = materialize(draft);
        db.books.push(book.clone());
        self.save(&db).await?;
        Ok(book)
    }

    async fn list(&self) -> StorageResult<Vec<Book>> {
        Ok(self.load().await?.books)
    }

    async fn get(&self, id: Uuid) -> StorageResult<Book> {
        self.load()
            .await?
            .books
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn replace(&self, id: Uuid, book: Book) -> StorageResult<Book> {
        ensure_same_id(id, &book)?;
        let _guard = self.write_lock.lock().await;
        let mut db = self.load().await?;
        let slot = db
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = book.clone();
        self.save(&db).await?;
        Ok(book)
    }

    async fn remove(&self, id: Uuid) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.load().await?;
        let before = db.books.len();
        db.books.retain(|b| b.id != id);
        if db.books.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.save(&db).await
    }
}
