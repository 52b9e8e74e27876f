//! Reading status

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a book sits in the reading lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ReadingStatus {
    #[default]
    ToRead,
    Reading,
    Wishlist,
    Completed,
}

impl ReadingStatus {
    /// Stored label
    pub fn label(self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "To Read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Wishlist => "Wishlist",
            ReadingStatus::Completed => "Completed",
        }
    }

    /// Statuses that require zero progress
    pub fn is_unstarted(self) -> bool {
        matches!(self, ReadingStatus::ToRead | ReadingStatus::Wishlist)
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReadingStatus {
    type Err = ValidationError;

    /// Parses a stored or user-supplied status.
    ///
    /// Empty input and the legacy "Not Started"/"Available" values collapse
    /// to `ToRead`; anything else outside the four labels is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "" | "toread" | "notstarted" | "available" => Ok(ReadingStatus::ToRead),
            "reading" => Ok(ReadingStatus::Reading),
            "wishlist" => Ok(ReadingStatus::Wishlist),
            "completed" => Ok(ReadingStatus::Completed),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReadingStatus {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReadingStatus> for &'static str {
    fn from(status: ReadingStatus) -> Self {
        status.label()
    }
}
