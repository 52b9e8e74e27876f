//! Add command implementation

use super::{print_book, FileShelf};
use anyhow::{Context, Result};
use shelf_core::NewBook;

/// Add a book to the collection
pub async fn add(shelf: &FileShelf, new: NewBook) -> Result<()> {
    let book = shelf.add(new).await.context("Failed to add book")?;

    println!("Added {}", book.title);
    print_book(&book);

    Ok(())
}
