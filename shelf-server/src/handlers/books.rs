//! Book collection handlers

use crate::error::ApiError;
use crate::state::{AppState, ServerEvent};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use shelf_core::{Book, BookChange, BookFilter, Counts, Genre, NewBook, ReadingStatus};
use uuid::Uuid;

/// Query parameters for listing books
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    /// Status label ("Reading", "To Read", ...)
    pub status: Option<String>,

    /// Genre label, matched case-insensitively
    pub genre: Option<String>,

    /// Search query over title and author
    pub search: Option<String>,
}

impl ListBooksQuery {
    fn into_filter(self) -> Result<BookFilter, ApiError> {
        // "All" is what the genre picker sends for no filter
        let genre = self
            .genre
            .filter(|g| !g.trim().is_empty() && !g.eq_ignore_ascii_case("all"))
            .map(|g| g.parse::<Genre>())
            .transpose()?;
        let status = self
            .status
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<ReadingStatus>())
            .transpose()?;
        let search = self.search.filter(|s| !s.trim().is_empty());

        Ok(BookFilter {
            status,
            genre,
            search,
        })
    }
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
    pub total: usize,
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid book id: {}", id)))
}

/// List books, optionally filtered
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<ListBooksResponse>, ApiError> {
    let filter = query.into_filter()?;
    let books = state.shelf.find(&filter).await?;

    Ok(Json(ListBooksResponse {
        total: books.len(),
        books,
    }))
}

/// Add a book
pub async fn create_book(
    State(state): State<AppState>,
    Json(new): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = state.shelf.add(new).await?;

    state.broadcast(ServerEvent::BookCreated {
        id: book.id.to_string(),
        title: book.title.clone(),
    });

    Ok((StatusCode::CREATED, Json(book)))
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.shelf.get(id).await?))
}

/// Replace a book with an edited full record.
///
/// The record is treated as an intent carrying every field, so progress and
/// status are reconciled exactly as for a partial update.
pub async fn replace_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(edited): Json<Book>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    if edited.id != id {
        return Err(ApiError::BadRequest(format!(
            "Body id {} does not match path id {}",
            edited.id, id
        )));
    }

    update(&state, id, &BookChange::from_record(&edited)).await
}

/// Apply a partial change
pub async fn patch_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<BookChange>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    update(&state, id, &change).await
}

/// One-click "start reading"
pub async fn start_reading(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    update(&state, id, &BookChange::start_reading()).await
}

/// Wishlist heart toggle
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    update(&state, id, &BookChange::toggle_wishlist()).await
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.shelf.remove(id).await?;

    state.broadcast(ServerEvent::BookDeleted { id: id.to_string() });

    Ok(StatusCode::NO_CONTENT)
}

/// Collection totals
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Counts>, ApiError> {
    Ok(Json(state.shelf.stats().await?))
}

async fn update(state: &AppState, id: Uuid, change: &BookChange) -> Result<Json<Book>, ApiError> {
    let revision = state.shelf.revise(id, change).await?;

    if revision.persisted {
        state.broadcast(ServerEvent::BookUpdated {
            id: revision.book.id.to_string(),
            status: revision.book.status.to_string(),
        });
    }

    Ok(Json(revision.book))
}
