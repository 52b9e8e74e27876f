//! Remove command implementation

use super::{resolve_id, FileShelf};
use anyhow::{Context, Result};

/// Remove a book from the collection
pub async fn remove(shelf: &FileShelf, id: &str) -> Result<()> {
    let id = resolve_id(shelf, id).await?;
    let book = shelf
        .get(id)
        .await
        .with_context(|| format!("Failed to load book {}", id))?;

    shelf
        .remove(id)
        .await
        .with_context(|| format!("Failed to remove book {}", id))?;

    println!("Removed {}", book.title);
    Ok(())
}
