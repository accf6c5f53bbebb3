use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SearchQuery;
use crate::store::DataStore;
use log::debug;

pub fn run<S: DataStore>(store: &S, query: &SearchQuery) -> Result<CmdResult> {
    let books = store.load()?;
    let matched: Vec<_> = books.into_iter().filter(|b| query.matches(b)).collect();
    debug!("{} search matched {} books", query.field(), matched.len());

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::error("Nothing matched your query."));
    }
    Ok(result.with_listed_books(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn catalog() -> InMemoryStore {
        StoreFixture::new()
            .with_book(1, "Dune", "Frank Herbert", 1965)
            .with_book(2, "DUNE2", "Frank Herbert", 1999)
            .with_book(3, "Solaris", "Stanisław Lem", 1961)
            .with_book(4, "Neuromancer", "William Gibson", 1999)
            .build()
    }

    #[test]
    fn title_search_is_case_insensitive_substring() {
        let result = run(&catalog(), &SearchQuery::Title("dune".into())).unwrap();
        let ids: Vec<u32> = result.listed_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn author_search_matches_partial_names() {
        let result = run(&catalog(), &SearchQuery::Author("LEM".into())).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "Solaris");
    }

    #[test]
    fn year_search_is_exact() {
        let result = run(&catalog(), &SearchQuery::Year(1999)).unwrap();
        assert!(result.listed_books.iter().all(|b| b.year == 1999));
        assert_eq!(result.listed_books.len(), 2);
    }

    #[test]
    fn no_match_reports_error_message() {
        let result = run(&catalog(), &SearchQuery::Year(1800)).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "Nothing matched your query.");
    }
}
