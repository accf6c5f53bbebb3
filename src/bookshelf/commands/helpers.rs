use crate::error::{LibraryError, Result};
use crate::model::Book;

/// Position of the book with `id`, or `BookNotFound`.
pub fn position_of(books: &[Book], id: i64) -> Result<usize> {
    books
        .iter()
        .position(|b| i64::from(b.id) == id)
        .ok_or(LibraryError::BookNotFound(id))
}
