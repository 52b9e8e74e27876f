//! Edit command implementation, shared by every mutating subcommand

use super::{resolve_id, summary_line, FileShelf};
use anyhow::{bail, Context, Result};
use shelf_core::{BookChange, ShelfError};

/// Apply a change to one book
pub async fn edit(shelf: &FileShelf, id: &str, change: &BookChange) -> Result<()> {
    if change.is_empty() {
        bail!("Nothing to change; pass at least one field");
    }

    let id = resolve_id(shelf, id).await?;

    match shelf.update(id, change).await {
        Ok(book) => {
            println!("{}", summary_line(&book));
            Ok(())
        }
        // Informational no-ops are reported but do not fail the command
        Err(ShelfError::Validation(e)) if e.is_informational() => {
            println!("Note: {}", e);
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to update book {}", id)),
    }
}
