//! Genre catalog

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed catalog of genres a book can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Genre {
    Romance,
    Crime,
    SelfHelp,
    BusinessEconomics,
    BiographiesMemoir,
    MysteryThriller,
    Comics,
    LiteratureFiction,
    Fantasy,
    SciFiction,
    Manga,
    HistoricalFiction,
}

impl Genre {
    /// Every genre, in catalog order
    pub const ALL: [Genre; 12] = [
        Genre::Romance,
        Genre::Crime,
        Genre::SelfHelp,
        Genre::BusinessEconomics,
        Genre::BiographiesMemoir,
        Genre::MysteryThriller,
        Genre::Comics,
        Genre::LiteratureFiction,
        Genre::Fantasy,
        Genre::SciFiction,
        Genre::Manga,
        Genre::HistoricalFiction,
    ];

    /// Display label, also the stored representation
    pub fn label(self) -> &'static str {
        match self {
            Genre::Romance => "Romance",
            Genre::Crime => "Crime",
            Genre::SelfHelp => "Self-help",
            Genre::BusinessEconomics => "Business & Economics",
            Genre::BiographiesMemoir => "Biographies & Memoir",
            Genre::MysteryThriller => "Mystery & Thriller",
            Genre::Comics => "Comics",
            Genre::LiteratureFiction => "Literature & Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::SciFiction => "Sci-fiction",
            Genre::Manga => "Manga",
            Genre::HistoricalFiction => "Historical Fiction",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    /// Labels match case-insensitively ("Business & economics" is accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownGenre(s.to_string()))
    }
}

impl TryFrom<String> for Genre {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for &'static str {
    fn from(genre: Genre) -> Self {
        genre.label()
    }
}
