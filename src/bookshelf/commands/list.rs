use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pagination::{clamp, slice};
use crate::store::DataStore;
use log::debug;

pub fn run<S: DataStore>(store: &S, requested_page: i64, page_size: usize) -> Result<CmdResult> {
    let books = store.load()?;
    let (page, diagnostic) = clamp(requested_page, books.len(), page_size);

    let mut result = CmdResult::default();
    if let Some(diagnostic) = diagnostic {
        debug!(
            "page {} clamped to {}/{}",
            requested_page, page.current_page, page.last_page
        );
        result.add_message(CmdMessage::warning(diagnostic.to_string()));
    }

    let listed = slice(&books, &page).to_vec();
    Ok(result.with_listed_books(listed).with_page(page))
}
