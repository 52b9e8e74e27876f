//! Stats and report command implementations

use super::FileShelf;
use anyhow::{Context, Result};
use shelf_core::report::render_report;
use shelf_core::ReadingGoal;
use std::path::Path;

/// Display collection totals
pub async fn stats(shelf: &FileShelf, json: bool) -> Result<()> {
    let counts = shelf.stats().await.context("Failed to read the collection")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("Total:     {}", counts.total);
        println!("Completed: {}", counts.completed);
        println!("Reading:   {}", counts.reading);
        println!("Wishlist:  {}", counts.wishlist);
    }

    Ok(())
}

/// Render the goal report to a file or stdout
pub async fn report(shelf: &FileShelf, goal: &ReadingGoal, output: Option<&Path>) -> Result<()> {
    let books = shelf.list().await.context("Failed to read the collection")?;
    let report = render_report(goal, &books);

    match output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}
