//! Application state

use anyhow::Result;
use shelf_core::storage::{BookStore, JsonFileStore};
use shelf_core::Shelf;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Lifecycle-checked access to the record store
    pub shelf: Shelf<dyn BookStore>,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

/// Server-sent events
///
/// Clients holding a cached collection refetch the affected record.
#[derive(Debug, Clone)]
pub enum ServerEvent {
    /// A book was added
    BookCreated { id: String, title: String },

    /// A book was changed through the lifecycle engine
    BookUpdated { id: String, status: String },

    /// A book was deleted
    BookDeleted { id: String },
}

impl AppState {
    /// Create application state backed by the configured JSON database
    pub async fn new(config: &ServerConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.storage_path).await?;

        let store = JsonFileStore::new(config.database_path());
        tracing::info!("Using record database at {}", store.path().display());

        Ok(Self::with_store(Arc::new(store)))
    }

    /// Create application state over any record store
    pub fn with_store(store: Arc<dyn BookStore>) -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            shelf: Shelf::new(store),
            event_tx,
        }
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}
