//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! catalog operations, whatever front end drives them.
//!
//! The API dispatches to `commands/*.rs`, passes the configured page size
//! along, and returns `Result<CmdResult>`. It holds no business logic and
//! never writes to the terminal.
//!
//! `LibraryApi<S: DataStore>` is generic over the backend:
//! - Production: `LibraryApi<CsvStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands;
use crate::config::LibraryConfig;
use crate::error::Result;
use crate::model::SearchQuery;
use crate::store::DataStore;

pub struct LibraryApi<S: DataStore> {
    store: S,
    config: LibraryConfig,
}

impl<S: DataStore> LibraryApi<S> {
    pub fn new(store: S, config: LibraryConfig) -> Self {
        Self { store, config }
    }

    /// Refuse to operate on a catalog whose columns are not the expected five.
    pub fn check_schema(&self) -> Result<()> {
        self.store.check_schema()
    }

    pub fn list_books(&self, page: i64) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, page, self.config.page_size)
    }

    pub fn add_book(&mut self, title: String, author: String, year: i32) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author, year)
    }

    pub fn delete_book(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn find_books(&self, query: &SearchQuery) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn toggle_status(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::status::toggle(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, StatusChange};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn api_with(count: usize, page_size: usize) -> LibraryApi<crate::store::memory::InMemoryStore> {
        let store = StoreFixture::new().with_books(count).build();
        LibraryApi::new(store, LibraryConfig::default().with_page_size(page_size))
    }

    #[test]
    fn list_uses_configured_page_size() {
        let api = api_with(10, 3);
        let result = api.list_books(1).unwrap();
        assert_eq!(result.listed_books.len(), 3);
        assert_eq!(result.page.unwrap().last_page, 4);
    }

    #[test]
    fn mutations_reach_the_store() {
        let mut api = api_with(2, 5);
        api.add_book("New".into(), "Someone".into(), 2020).unwrap();
        api.toggle_status(1).unwrap();
        api.delete_book(2).unwrap();

        let ids: Vec<u32> = api.store().books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn find_dispatches_query() {
        let api = api_with(3, 5);
        let result = api.find_books(&SearchQuery::Year(2001)).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].id, 2);
    }
}
