//! Lifecycle engine
//!
//! Pure functions that turn a record plus a [`BookChange`] into the next
//! valid record. The engine infers which surface produced the intent from
//! the fields that actually differ from the current record, then applies the
//! first matching rule:
//!
//! 1. explicit status change
//! 2. page count edited on a completed book
//! 3. direct progress update
//! 4. one-click action (start reading, wishlist toggle)
//! 5. plain field edit
//!
//! Every accepted result is normalized so that progress stays within the
//! page count and agrees with the status.

use crate::error::ValidationError;
use crate::types::{non_blank, Book, BookAction, BookChange, BookDraft, NewBook, ReadingStatus};

type Result<T> = std::result::Result<T, ValidationError>;

/// Compute the record that results from applying `change` to `current`.
///
/// On rejection nothing is applied; the caller still holds `current`.
pub fn apply(current: &Book, change: &BookChange) -> Result<Book> {
    let mut next = current.clone();
    apply_plain_fields(&mut next, change)?;

    let pages = match change.pages {
        Some(pages) => validate_pages(pages)?,
        None => current.pages,
    };
    next.pages = pages;

    let status_change = change.status.filter(|status| *status != current.status);
    let progress_change = change
        .pages_read
        .filter(|read| *read != i64::from(current.pages_read));

    let (status, pages_read) = if let Some(target) = status_change {
        transition_to(current, target, pages)?
    } else if pages != current.pages && current.status == ReadingStatus::Completed {
        (ReadingStatus::Completed, pages)
    } else if let Some(read) = progress_change {
        let read = clamp_progress(read, pages);
        (status_for_progress(read, pages), read)
    } else if let Some(action) = change.action {
        match action {
            BookAction::StartReading => start_reading(current)?,
            BookAction::ToggleWishlist => toggle_wishlist(current)?,
        }
    } else {
        (current.status, current.pages_read)
    };

    next.status = status;
    next.pages_read = pages_read;
    normalize(&mut next.status, &mut next.pages_read, pages);
    Ok(next)
}

/// Validate a creation request and derive its starting progress.
///
/// Status defaults to `ToRead`. When only progress is supplied the status
/// follows from it the same way a progress update would.
pub fn prepare(new: NewBook) -> Result<BookDraft> {
    let title = required_text(new.title, "title")?;
    let author = required_text(new.author, "author")?;
    let genre = new.genre.ok_or(ValidationError::MissingField("genre"))?;
    let pages = validate_pages(new.pages.ok_or(ValidationError::MissingField("pages"))?)?;

    let submitted = clamp_progress(new.pages_read.unwrap_or(0), pages);
    let (mut status, mut pages_read) = match new.status {
        Some(ReadingStatus::Completed) => (ReadingStatus::Completed, pages),
        Some(ReadingStatus::Reading) => (ReadingStatus::Reading, submitted.max(1)),
        Some(status) => (status, 0),
        None if submitted > 0 => (status_for_progress(submitted, pages), submitted),
        None => (ReadingStatus::ToRead, 0),
    };
    normalize(&mut status, &mut pages_read, pages);

    Ok(BookDraft {
        title,
        author,
        genre,
        pages,
        pages_read,
        status,
        summary: non_blank(new.summary),
        cover: non_blank(new.cover),
    })
}

/// Status implied by a progress value alone
pub fn status_for_progress(pages_read: u32, pages: u32) -> ReadingStatus {
    if pages_read >= pages {
        ReadingStatus::Completed
    } else if pages_read > 0 {
        ReadingStatus::Reading
    } else {
        ReadingStatus::ToRead
    }
}

fn apply_plain_fields(next: &mut Book, change: &BookChange) -> Result<()> {
    if let Some(title) = &change.title {
        next.title = non_empty(title, "title")?;
    }
    if let Some(author) = &change.author {
        next.author = non_empty(author, "author")?;
    }
    if let Some(genre) = change.genre {
        next.genre = genre;
    }
    if change.summary.is_some() {
        next.summary = non_blank(change.summary.clone());
    }
    if change.cover.is_some() {
        next.cover = non_blank(change.cover.clone());
    }
    Ok(())
}

fn transition_to(
    current: &Book,
    target: ReadingStatus,
    pages: u32,
) -> Result<(ReadingStatus, u32)> {
    match target {
        ReadingStatus::Completed => Ok((ReadingStatus::Completed, pages)),
        ReadingStatus::Reading => Ok((ReadingStatus::Reading, current.pages_read.min(pages).max(1))),
        ReadingStatus::ToRead => Ok((ReadingStatus::ToRead, 0)),
        ReadingStatus::Wishlist => match current.status {
            ReadingStatus::ToRead => Ok((ReadingStatus::Wishlist, 0)),
            other => Err(ValidationError::WishlistFromStatus(other)),
        },
    }
}

fn start_reading(current: &Book) -> Result<(ReadingStatus, u32)> {
    match current.status {
        ReadingStatus::ToRead | ReadingStatus::Wishlist => Ok((ReadingStatus::Reading, 0)),
        ReadingStatus::Reading => Err(ValidationError::AlreadyReading),
        ReadingStatus::Completed => Err(ValidationError::IllegalTransition {
            from: ReadingStatus::Completed,
            to: ReadingStatus::Reading,
        }),
    }
}

fn toggle_wishlist(current: &Book) -> Result<(ReadingStatus, u32)> {
    match current.status {
        ReadingStatus::ToRead => Ok((ReadingStatus::Wishlist, 0)),
        ReadingStatus::Wishlist => Ok((ReadingStatus::ToRead, 0)),
        other => Err(ValidationError::WishlistFromStatus(other)),
    }
}

// Reading at full progress becomes Completed. Reading at zero is left alone:
// that is where "start reading" lands until the first progress update.
fn normalize(status: &mut ReadingStatus, pages_read: &mut u32, pages: u32) {
    *pages_read = (*pages_read).min(pages);
    match *status {
        ReadingStatus::Completed => *pages_read = pages,
        ReadingStatus::Reading if *pages_read >= pages => {
            *status = ReadingStatus::Completed;
            *pages_read = pages;
        }
        ReadingStatus::ToRead | ReadingStatus::Wishlist => *pages_read = 0,
        ReadingStatus::Reading => {}
    }
}

fn clamp_progress(pages_read: i64, pages: u32) -> u32 {
    // pages fits in u32, so the clamped value does too
    pages_read.clamp(0, i64::from(pages)) as u32
}

fn validate_pages(pages: i64) -> Result<u32> {
    if pages <= 0 {
        return Err(ValidationError::InvalidPages(pages));
    }
    u32::try_from(pages).map_err(|_| ValidationError::InvalidPages(pages))
}

fn non_empty(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) => non_empty(&value, field),
        None => Err(ValidationError::MissingField(field)),
    }
}
