//! Read-only helpers over an in-memory collection of books

use crate::types::{Book, Genre, ReadingStatus};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a book has no cover of its own
pub const DEFAULT_COVER_URL: &str = "https://images.ctfassets.net/h6goo9gw1hh6/5jqrtoLoeneF3n7SArR54N/cac64aae2bda392ff390298799e0cac5/Book-Cover-Design-FB.jpg";

/// Books with the given status, in collection order
pub fn by_status(books: &[Book], status: ReadingStatus) -> Vec<&Book> {
    books.iter().filter(|b| b.status == status).collect()
}

/// Books filed under the given genre, in collection order
pub fn by_genre(books: &[Book], genre: Genre) -> Vec<&Book> {
    books.iter().filter(|b| b.genre == genre).collect()
}

/// Case-insensitive substring match on title or author
pub fn search<'a>(books: &'a [Book], term: &str) -> Vec<&'a Book> {
    books.iter().filter(|b| matches_term(b, term)).collect()
}

/// Reading progress as a percentage in `0.0..=100.0`
pub fn progress_percent(book: &Book) -> f64 {
    if book.pages == 0 {
        return 0.0;
    }
    (f64::from(book.pages_read) / f64::from(book.pages) * 100.0).min(100.0)
}

/// Cover URL to render, falling back to the shared placeholder
pub fn resolve_cover(book: &Book) -> &str {
    book.cover.as_deref().unwrap_or(DEFAULT_COVER_URL)
}

/// Collection totals shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub reading: usize,
    pub wishlist: usize,
}

/// Tally the collection by status
pub fn counts(books: &[Book]) -> Counts {
    books.iter().fold(
        Counts {
            total: books.len(),
            ..Counts::default()
        },
        |mut acc, book| {
            match book.status {
                ReadingStatus::Completed => acc.completed += 1,
                ReadingStatus::Reading => acc.reading += 1,
                ReadingStatus::Wishlist => acc.wishlist += 1,
                ReadingStatus::ToRead => {}
            }
            acc
        },
    )
}

/// Combined filter used by list views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFilter {
    pub status: Option<ReadingStatus>,
    pub genre: Option<Genre>,
    pub search: Option<String>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        self.status.map_or(true, |s| book.status == s)
            && self.genre.map_or(true, |g| book.genre == g)
            && self
                .search
                .as_deref()
                .map_or(true, |term| matches_term(book, term))
    }

    /// Apply the filter, preserving collection order
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }
}

fn matches_term(book: &Book, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    book.title.to_lowercase().contains(&term) || book.author.to_lowercase().contains(&term)
}
