use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::AddressBook;
use crate::store::DataStore;

/// Number of addresses a clear would remove. Used by the CLI to ask for confirmation.
pub fn preview<S: DataStore>(book: &AddressBook<S>) -> usize {
    book.len()
}

pub fn run<S: DataStore>(book: &mut AddressBook<S>) -> Result<CmdResult> {
    let removed = book.clear()?;

    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info("Nothing to clear"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} address(es)",
            removed
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CepError;
    use crate::model::BookState;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::COLLECTION_KEY;

    #[test]
    fn clears_everything() {
        let (mut book, _) = AddressBook::open(StoreFixture::new().with_addresses(3).build());
        assert_eq!(preview(&book), 3);

        let result = run(&mut book).unwrap();

        assert_eq!(book.state(), BookState::Empty);
        assert_eq!(book.store().backend().raw(COLLECTION_KEY), None);
        assert_eq!(result.total, 0);
        assert!(result.messages[0].content.contains('3'));
    }

    #[test]
    fn clearing_empty_book_succeeds() {
        let (mut book, _) = AddressBook::open(InMemoryStore::new());
        let result = run(&mut book).unwrap();
        assert_eq!(result.messages[0].content, "Nothing to clear");
    }

    #[test]
    fn failed_clear_keeps_contents() {
        let (mut book, _) = AddressBook::open(StoreFixture::new().with_addresses(2).build());
        book.store().backend().set_simulate_write_error(true);

        let err = run(&mut book).unwrap_err();

        assert!(matches!(err, CepError::Persistence(_)));
        assert_eq!(book.len(), 2);
    }
}
