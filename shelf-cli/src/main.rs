//! Shelf CLI - Command-line interface for the book collection

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shelf_core::storage::JsonFileStore;
use shelf_core::{Genre, ReadingStatus, Shelf};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Track a personal book collection", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the JSON record database
    #[arg(
        long,
        global = true,
        env = "SHELF_DATA",
        default_value = "./shelf_data/db.json"
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the collection
    Add {
        /// Book title
        title: String,

        /// Author name
        #[arg(short, long)]
        author: Option<String>,

        /// Genre, e.g. "Fantasy" or "Mystery & Thriller"
        #[arg(short, long)]
        genre: Option<Genre>,

        /// Total number of pages
        #[arg(short, long, allow_negative_numbers = true)]
        pages: Option<i64>,

        /// Initial status (defaults to "To Read")
        #[arg(short, long)]
        status: Option<ReadingStatus>,

        /// Short summary
        #[arg(long)]
        summary: Option<String>,

        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,
    },

    /// List books in the collection
    List {
        /// Only books with this status
        #[arg(short, long)]
        status: Option<ReadingStatus>,

        /// Only books in this genre
        #[arg(short, long)]
        genre: Option<Genre>,

        /// Match title or author
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one book
    Show {
        /// Book id or unique id prefix
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit book fields
    Edit {
        /// Book id or unique id prefix
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        genre: Option<Genre>,

        /// Total number of pages
        #[arg(long, allow_negative_numbers = true)]
        pages: Option<i64>,

        /// Pages read so far
        #[arg(long, allow_negative_numbers = true)]
        pages_read: Option<i64>,

        #[arg(long)]
        status: Option<ReadingStatus>,

        /// Summary (empty string clears it)
        #[arg(long)]
        summary: Option<String>,

        /// Cover image URL (empty string clears it)
        #[arg(long)]
        cover: Option<String>,
    },

    /// Record reading progress
    Progress {
        /// Book id or unique id prefix
        id: String,

        /// Pages read so far
        #[arg(allow_negative_numbers = true)]
        pages_read: i64,
    },

    /// Change a book's status
    Status {
        /// Book id or unique id prefix
        id: String,

        /// New status ("To Read", "Reading", "Wishlist", "Completed")
        status: ReadingStatus,
    },

    /// Start reading a book
    Start {
        /// Book id or unique id prefix
        id: String,
    },

    /// Add to or remove from the wishlist
    Wishlist {
        /// Book id or unique id prefix
        id: String,
    },

    /// Remove a book from the collection
    Remove {
        /// Book id or unique id prefix
        id: String,
    },

    /// Show collection totals
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the reading goal report
    Report {
        /// Number of books to finish
        #[arg(long, default_value = "10")]
        target: u32,

        /// Number of books finished so far
        #[arg(long, default_value = "0")]
        completed: u32,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelf_cli=debug,shelf_core=debug"
    } else {
        "shelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Using record database at {}", cli.data.display());
    let shelf = Shelf::new(Arc::new(JsonFileStore::new(&cli.data)));

    match cli.command {
        Commands::Add {
            title,
            author,
            genre,
            pages,
            status,
            summary,
            cover,
        } => {
            let new = shelf_core::NewBook {
                title: Some(title),
                author,
                genre,
                pages,
                pages_read: None,
                status,
                summary,
                cover,
            };
            commands::add(&shelf, new).await
        }

        Commands::List {
            status,
            genre,
            search,
            json,
        } => {
            let filter = shelf_core::BookFilter {
                status,
                genre,
                search,
            };
            commands::list(&shelf, &filter, json).await
        }

        Commands::Show { id, json } => commands::show(&shelf, &id, json).await,

        Commands::Edit {
            id,
            title,
            author,
            genre,
            pages,
            pages_read,
            status,
            summary,
            cover,
        } => {
            let change = shelf_core::BookChange {
                title,
                author,
                genre,
                pages,
                pages_read,
                status,
                summary,
                cover,
                action: None,
            };
            commands::edit(&shelf, &id, &change).await
        }

        Commands::Progress { id, pages_read } => {
            commands::edit(&shelf, &id, &shelf_core::BookChange::progress(pages_read)).await
        }

        Commands::Status { id, status } => {
            commands::edit(&shelf, &id, &shelf_core::BookChange::status(status)).await
        }

        Commands::Start { id } => {
            commands::edit(&shelf, &id, &shelf_core::BookChange::start_reading()).await
        }

        Commands::Wishlist { id } => {
            commands::edit(&shelf, &id, &shelf_core::BookChange::toggle_wishlist()).await
        }

        Commands::Remove { id } => commands::remove(&shelf, &id).await,

        Commands::Stats { json } => commands::stats(&shelf, json).await,

        Commands::Report {
            target,
            completed,
            output,
        } => {
            let goal = shelf_core::ReadingGoal::new(target, completed);
            commands::report(&shelf, &goal, output.as_deref()).await
        }
    }
}
