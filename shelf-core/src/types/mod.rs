//! Core types for the Shelf book collection

mod book;
mod change;
mod genre;
mod status;

pub use book::{Book, BookDraft, NewBook};
pub use change::{BookAction, BookChange};
pub(crate) use change::non_blank;
pub use genre::Genre;
pub use status::ReadingStatus;
