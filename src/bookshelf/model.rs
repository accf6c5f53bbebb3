use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the catalog file, in on-disk order.
pub const COLUMNS: [&str; 5] = ["ID", "Title", "Author", "Year", "Status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    // Legacy catalogs were written with Russian labels.
    #[serde(alias = "В наличии")]
    Available,
    #[serde(alias = "Выдана", alias = "Checked out")]
    CheckedOut,
}

impl Status {
    pub fn toggled(self) -> Self {
        match self {
            Status::Available => Status::CheckedOut,
            Status::CheckedOut => Status::Available,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Available => write!(f, "Available"),
            Status::CheckedOut => write!(f, "Checked out"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Status")]
    pub status: Status,
}

impl Book {
    pub fn new(id: u32, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: Status::Available,
        }
    }

    /// Cells in `COLUMNS` order, for table rendering.
    pub fn cells(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.title.clone(),
            self.author.clone(),
            self.year.to_string(),
            self.status.to_string(),
        ]
    }
}

/// Column a search is targeted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Year => write!(f, "year"),
        }
    }
}

/// A column plus the value to match against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Title(String),
    Author(String),
    Year(i32),
}

impl SearchQuery {
    pub fn field(&self) -> SearchField {
        match self {
            SearchQuery::Title(_) => SearchField::Title,
            SearchQuery::Author(_) => SearchField::Author,
            SearchQuery::Year(_) => SearchField::Year,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            SearchQuery::Title(term) => contains_ignore_case(&book.title, term),
            SearchQuery::Author(term) => contains_ignore_case(&book.author, term),
            SearchQuery::Year(year) => book.year == *year,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
