//! CLI command implementations

mod add;
mod edit;
mod list;
mod remove;
mod stats;

pub use add::add;
pub use edit::edit;
pub use list::{list, show};
pub use remove::remove;
pub use stats::{report, stats};

use anyhow::{bail, Context, Result};
use shelf_core::storage::JsonFileStore;
use shelf_core::{query, Book, Shelf};
use uuid::Uuid;

/// The shelf every command operates on
pub type FileShelf = Shelf<JsonFileStore>;

/// Resolve a full id or a unique prefix of one
pub async fn resolve_id(shelf: &FileShelf, id: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(id) {
        return Ok(id);
    }

    let prefix = id.trim().to_lowercase();
    if prefix.is_empty() {
        bail!("Book id must not be empty");
    }

    let books = shelf.list().await.context("Failed to read the collection")?;
    let matches: Vec<&Book> = books
        .iter()
        .filter(|b| b.id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [book] => Ok(book.id),
        [] => bail!("No book with id starting with '{}'", id),
        _ => bail!("Id prefix '{}' matches {} books", id, matches.len()),
    }
}

/// First eight characters of an id, enough to address a book
pub fn short_id(book: &Book) -> String {
    book.id.to_string().chars().take(8).collect()
}

/// One-line summary used by list output
pub fn summary_line(book: &Book) -> String {
    format!(
        "{}  {:<9}  {:>5}/{:<5} {:>3.0}%  {} by {}",
        short_id(book),
        book.status.label(),
        book.pages_read,
        book.pages,
        query::progress_percent(book),
        book.title,
        book.author
    )
}

/// Multi-line detail view
pub fn print_book(book: &Book) {
    println!("Id:        {}", book.id);
    println!("Title:     {}", book.title);
    println!("Author:    {}", book.author);
    println!("Genre:     {}", book.genre);
    println!("Status:    {}", book.status);
    println!(
        "Progress:  {}/{} pages ({:.0}%)",
        book.pages_read,
        book.pages,
        query::progress_percent(book)
    );
    if let Some(summary) = &book.summary {
        println!("Summary:   {}", summary);
    }
    println!("Cover:     {}", query::resolve_cover(book));
    println!("Added:     {}", book.added_date.format("%Y-%m-%d"));
}
