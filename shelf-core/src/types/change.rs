//! Mutation intents submitted to the lifecycle engine

use super::{Book, Genre, ReadingStatus};
use serde::{Deserialize, Serialize};

/// One-click actions that carry no field values of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookAction {
    /// Move an unstarted book into Reading with progress reset
    StartReading,
    /// Flip between To Read and Wishlist
    ToggleWishlist,
}

/// A sparse set of proposed field changes.
///
/// Fields left as `None` are untouched. A field equal to the current value
/// is not treated as a change, so a form that resubmits the whole record
/// behaves like one that only sends the edited fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,

    /// Signed so that zero or negative input reaches validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,

    /// Signed so that out-of-range progress can be clamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_read: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReadingStatus>,

    /// `Some("")` clears the summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// `Some("")` clears the cover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<BookAction>,
}

impl BookChange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intent for an explicit status pick
    pub fn status(status: ReadingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Intent for a progress slider or "pages read" field
    pub fn progress(pages_read: i64) -> Self {
        Self {
            pages_read: Some(pages_read),
            ..Self::default()
        }
    }

    /// Intent for the "start reading" button
    pub fn start_reading() -> Self {
        Self {
            action: Some(BookAction::StartReading),
            ..Self::default()
        }
    }

    /// Intent for the wishlist heart toggle
    pub fn toggle_wishlist() -> Self {
        Self {
            action: Some(BookAction::ToggleWishlist),
            ..Self::default()
        }
    }

    /// Intent carrying every field of an edited record, as a form submits it
    pub fn from_record(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            genre: Some(book.genre),
            pages: Some(i64::from(book.pages)),
            pages_read: Some(i64::from(book.pages_read)),
            status: Some(book.status),
            summary: Some(book.summary.clone().unwrap_or_default()),
            cover: Some(book.cover.clone().unwrap_or_default()),
            action: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn with_pages(mut self, pages: i64) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_pages_read(mut self, pages_read: i64) -> Self {
        self.pages_read = Some(pages_read);
        self
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// True when the intent carries nothing at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Normalize optional text: blank strings become `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
