//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate touches the
//! catalog. Every operation loads the full record set, and every mutation
//! rewrites it in full; nothing is cached between operations.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production store, a single CSV file
//!   - Header row `ID,Title,Author,Year,Status`, one book per row
//!   - `append` writes a single row without a header (the add fast path)
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Header is configurable so schema checks can be exercised
//!
//! ## Storage Format
//!
//! ```text
//! ID,Title,Author,Year,Status
//! 1,Dune,Frank Herbert,1965,Available
//! 2,Solaris,Stanisław Lem,1961,CheckedOut
//! ```

use crate::error::{LibraryError, Result};
use crate::model::{Book, COLUMNS};

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Header row currently stored, as column names
    fn header(&self) -> Result<Vec<String>>;

    /// Load every book, in stored order
    fn load(&self) -> Result<Vec<Book>>;

    /// Rewrite the whole store with `books`
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Append a single book after the existing rows
    fn append(&mut self, book: &Book) -> Result<()>;

    /// Fail with `SchemaMismatch` unless the header is exactly [`COLUMNS`].
    fn check_schema(&self) -> Result<()> {
        let header = self.header()?;
        if header.iter().map(String::as_str).eq(COLUMNS) {
            Ok(())
        } else {
            Err(LibraryError::SchemaMismatch {
                found: header.join(","),
            })
        }
    }
}

/// Identifier for the next book: one past the current maximum, or 1.
/// Fails once the maximum id is `u32::MAX`.
pub fn next_id(books: &[Book]) -> Result<u32> {
    match books.iter().map(|b| b.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| LibraryError::Store(format!("no id left after {}", max))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_follows_maximum_not_count() {
        let books = vec![
            Book::new(7, "A".into(), "X".into(), 2000),
            Book::new(3, "B".into(), "Y".into(), 2001),
        ];
        assert_eq!(next_id(&books).unwrap(), 8);
    }

    #[test]
    fn next_id_refuses_to_wrap() {
        let books = vec![Book::new(u32::MAX, "A".into(), "X".into(), 2000)];
        assert!(matches!(next_id(&books), Err(LibraryError::Store(_))));
    }

    #[test]
    fn schema_check_rejects_reordered_columns() {
        let store = InMemoryStore::with_header(&["ID", "Author", "Title", "Year", "Status"]);
        let err = store.check_schema().unwrap_err();
        assert!(matches!(err, LibraryError::SchemaMismatch { .. }));
    }

    #[test]
    fn schema_check_accepts_expected_columns() {
        assert!(InMemoryStore::new().check_schema().is_ok());
    }
}
