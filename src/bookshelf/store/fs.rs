use super::DataStore;
use crate::error::{LibraryError, Result};
use crate::model::{Book, COLUMNS};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the catalog with only a header row if it does not exist yet.
    /// Returns whether a file was created.
    pub fn init(&mut self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        self.save(&[])?;
        debug!("created empty catalog at {}", self.path.display());
        Ok(true)
    }

    fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            Ok(())
        } else {
            Err(LibraryError::Store(format!(
                "Catalog file not found: {}",
                self.path.display()
            )))
        }
    }
}

impl DataStore for CsvStore {
    fn header(&self) -> Result<Vec<String>> {
        self.ensure_exists()?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(&self.path)?;
        let header = reader.headers()?;
        Ok(header.iter().map(str::to_string).collect())
    }

    fn load(&self) -> Result<Vec<Book>> {
        self.ensure_exists()?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(&self.path)?;

        let mut books = Vec::new();
        for row in reader.deserialize::<Book>() {
            let book = row.map_err(|e| {
                let line = e.position().map_or(0, |p| p.line());
                LibraryError::Store(format!("Invalid record at line {}: {}", line, e))
            })?;
            books.push(book);
        }

        debug!("loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        // Written by hand so an empty catalog still carries its header.
        writer.write_record(COLUMNS).map_err(LibraryError::Encoding)?;
        for book in books {
            writer.serialize(book).map_err(LibraryError::Encoding)?;
        }
        writer.flush()?;

        debug!("wrote {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    fn append(&mut self, book: &Book) -> Result<()> {
        self.ensure_exists()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(book).map_err(LibraryError::Encoding)?;
        writer.flush()?;

        debug!("appended book {} to {}", book.id, self.path.display());
        Ok(())
    }
}
