use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::{next_id, DataStore};
use log::debug;

pub fn run<S: DataStore>(store: &mut S, title: String, author: String, year: i32) -> Result<CmdResult> {
    let books = store.load()?;
    let id = next_id(&books)?;
    debug!("assigning id {} (catalog holds {} books)", id, books.len());

    let book = Book::new(id, title, author, year);
    store.append(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added (ID {}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
