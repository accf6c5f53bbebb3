use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::position_of;

pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut books = store.load()?;
    let pos = position_of(&books, id)?;

    let removed = books.remove(pos);
    store.save(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book with ID {} deleted: {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_books(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_one_book() {
        let mut store = StoreFixture::new().with_books(3).build();
        let result = run(&mut store, 2).unwrap();

        assert_eq!(result.affected_books[0].id, 2);
        let ids: Vec<u32> = store.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn missing_id_leaves_store_unchanged() {
        let mut store = StoreFixture::new().with_books(3).build();
        let before = store.books().to_vec();

        let err = run(&mut store, 42).unwrap_err();
        assert!(matches!(err, LibraryError::BookNotFound(42)));
        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn negative_id_is_not_found() {
        let mut store = StoreFixture::new().with_books(1).build();
        assert!(matches!(
            run(&mut store, -1),
            Err(LibraryError::BookNotFound(-1))
        ));
    }
}
