//! List and show command implementations

use super::{print_book, resolve_id, summary_line, FileShelf};
use anyhow::{Context, Result};
use shelf_core::BookFilter;

/// List books matching the filter
pub async fn list(shelf: &FileShelf, filter: &BookFilter, json: bool) -> Result<()> {
    let books = shelf
        .find(filter)
        .await
        .context("Failed to read the collection")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books found");
        return Ok(());
    }

    for book in &books {
        println!("{}", summary_line(book));
    }
    println!("{} book(s)", books.len());

    Ok(())
}

/// Display one book
pub async fn show(shelf: &FileShelf, id: &str, json: bool) -> Result<()> {
    let id = resolve_id(shelf, id).await?;
    let book = shelf
        .get(id)
        .await
        .with_context(|| format!("Failed to load book {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_book(&book);
    }

    Ok(())
}
