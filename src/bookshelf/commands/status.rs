use crate::commands::{CmdMessage, CmdResult, StatusChange};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::position_of;

/// Flip a book between available and checked out.
pub fn toggle<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut books = store.load()?;
    let pos = position_of(&books, id)?;

    let book = &mut books[pos];
    let change = StatusChange {
        from: book.status,
        to: book.status.toggled(),
    };
    book.status = change.to;
    let updated = book.clone();
    store.save(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status of book with ID {} changed from \"{}\" to \"{}\".",
        updated.id, change.from, change.to
    )));
    Ok(result
        .with_affected_books(vec![updated])
        .with_status_change(change))
}
