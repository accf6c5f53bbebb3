use super::DataStore;
use crate::error::Result;
use crate::model::{Book, COLUMNS};

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    header: Vec<String>,
    books: Vec<Book>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::with_header(&COLUMNS)
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(columns: &[&str]) -> Self {
        Self {
            header: columns.iter().map(|c| c.to_string()).collect(),
            books: Vec::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl DataStore for InMemoryStore {
    fn header(&self) -> Result<Vec<String>> {
        Ok(self.header.clone())
    }

    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        Ok(())
    }

    fn append(&mut self, book: &Book) -> Result<()> {
        self.books.push(book.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = crate::store::next_id(&self.store.books).unwrap();
                let book = Book::new(
                    id,
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    2000 + i as i32,
                );
                self.store.append(&book).unwrap();
            }
            self
        }

        pub fn with_book(mut self, id: u32, title: &str, author: &str, year: i32) -> Self {
            let book = Book::new(id, title.to_string(), author.to_string(), year);
            self.store.append(&book).unwrap();
            self
        }

        pub fn with_checked_out_book(mut self, id: u32, title: &str, author: &str, year: i32) -> Self {
            let mut book = Book::new(id, title.to_string(), author.to_string(), year);
            book.status = Status::CheckedOut;
            self.store.append(&book).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
