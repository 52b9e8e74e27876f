//! The Book record - the only entity on the shelf

use super::{Genre, ReadingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A book in the collection, as stored by the record store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier, immutable
    pub id: Uuid,

    pub title: String,

    pub author: String,

    pub genre: Genre,

    /// Total length in pages
    pub pages: u32,

    /// Progress, always within `0..=pages`
    #[serde(default)]
    pub pages_read: u32,

    #[serde(default)]
    pub status: ReadingStatus,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,

    /// Cover image URL; rendering falls back to a placeholder when absent
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover: Option<String>,

    /// Set once at creation
    pub added_date: DateTime<Utc>,
}

impl Book {
    /// Materialize a validated draft with its store-assigned identity
    pub fn from_draft(draft: BookDraft, id: Uuid, added_date: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            genre: draft.genre,
            pages: draft.pages,
            pages_read: draft.pages_read,
            status: draft.status,
            summary: draft.summary,
            cover: draft.cover,
            added_date,
        }
    }

    /// Returns `Err(message)` describing the first broken record invariant.
    ///
    /// `Reading` with zero pages read is accepted: starting a book from the
    /// wishlist leaves progress at zero until the first update arrives.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.pages == 0 {
            return Err("pages must be positive".to_string());
        }
        if self.pages_read > self.pages {
            return Err(format!(
                "pagesRead {} exceeds pages {}",
                self.pages_read, self.pages
            ));
        }
        match self.status {
            ReadingStatus::Completed if self.pages_read != self.pages => Err(format!(
                "Completed book has {}/{} pages read",
                self.pages_read, self.pages
            )),
            ReadingStatus::Reading if self.pages_read >= self.pages => {
                Err("Reading book is already fully read".to_string())
            }
            status if status.is_unstarted() && self.pages_read != 0 => Err(format!(
                "{} book has {} pages read",
                status, self.pages_read
            )),
            _ => Ok(()),
        }
    }
}

/// A validated book awaiting identity assignment by the store
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub pages: u32,
    pub pages_read: u32,
    pub status: ReadingStatus,
    pub summary: Option<String>,
    pub cover: Option<String>,
}

/// Fields submitted when adding a book.
///
/// Required fields are optional here so that a missing value is reported as
/// a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<Genre>,
    pub pages: Option<i64>,
    pub pages_read: Option<i64>,
    pub status: Option<ReadingStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cover: Option<String>,
}

impl NewBook {
    /// Start a submission with the required fields filled in
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        pages: i64,
    ) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            genre: Some(genre),
            pages: Some(pages),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_pages_read(mut self, pages_read: i64) -> Self {
        self.pages_read = Some(pages_read);
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
}

/// Treat `""` and `null` the same as an absent optional text field
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: Uuid::new_v4(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: Genre::SciFiction,
            pages: 412,
            pages_read: 0,
            status: ReadingStatus::ToRead,
            summary: None,
            cover: None,
            added_date: Utc::now(),
        }
    }

    #[test]
    fn test_json_shape_uses_camel_case() {
        let mut book = sample();
        book.pages_read = 0;
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["pagesRead"], 0);
        assert_eq!(json["status"], "To Read");
        assert_eq!(json["genre"], "Sci-fiction");
        assert!(json.get("addedDate").is_some());
        assert!(json.get("cover").is_none());
    }

    #[test]
    fn test_empty_cover_reads_as_absent() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "title": "Emma",
            "author": "Jane Austen",
            "genre": "Romance",
            "pages": 474,
            "pagesRead": 0,
            "status": "Not Started",
            "summary": "",
            "cover": "",
            "addedDate": "2024-05-01T10:00:00Z"
        });
        let book: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book.cover, None);
        assert_eq!(book.summary, None);
        assert_eq!(book.status, ReadingStatus::ToRead);
    }

    #[test]
    fn test_invariant_checks() {
        let mut book = sample();
        assert!(book.check_invariants().is_ok());

        book.status = ReadingStatus::Completed;
        book.pages_read = 100;
        assert!(book.check_invariants().is_err());

        book.pages_read = book.pages;
        assert!(book.check_invariants().is_ok());

        book.status = ReadingStatus::Wishlist;
        assert!(book.check_invariants().is_err());

        book.status = ReadingStatus::Reading;
        book.pages_read = 0;
        assert!(book.check_invariants().is_ok());
    }
}
