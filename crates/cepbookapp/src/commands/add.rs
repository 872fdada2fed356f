use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayAddress, DisplayIndex};
use crate::lookup::{self, CepResolver};
use crate::repository::AddressBook;
use crate::store::DataStore;

pub fn run<S: DataStore, R: CepResolver + ?Sized>(
    book: &mut AddressBook<S>,
    resolver: &R,
    code: &str,
) -> Result<CmdResult> {
    let address = lookup::resolve(resolver, code)?;
    book.add(address.clone())?;

    // New addresses are always the newest, so they get index 1
    let mut result = CmdResult::default()
        .with_affected_addresses(vec![DisplayAddress {
            index: DisplayIndex(1),
            address: address.clone(),
        }])
        .with_total(book.len());
    result.add_message(CmdMessage::success(format!(
        "Address added: {}",
        address.summary()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CepError, ResolutionError};
    use crate::lookup::fixtures::{se_record, StaticResolver};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::COLLECTION_KEY;

    #[test]
    fn adds_resolved_address_first() {
        let store = StoreFixture::new().with_addresses(2).build();
        let (mut book, _) = AddressBook::open(store);
        let resolver = StaticResolver::new().with_record("01001000", se_record());

        let result = run(&mut book, &resolver, "01001000").unwrap();

        assert_eq!(book.len(), 3);
        assert_eq!(book.addresses()[0].cep, "01001000");
        assert_eq!(book.addresses()[0].street, "Praça da Sé");
        assert_eq!(result.total, 3);
        assert_eq!(result.affected_addresses[0].index, DisplayIndex(1));
        assert!(result.messages[0].content.contains("Praça da Sé"));
    }

    #[test]
    fn short_code_never_reaches_resolver() {
        let (mut book, _) = AddressBook::open(InMemoryStore::new());
        let resolver = StaticResolver::new();

        let err = run(&mut book, &resolver, "0100100").unwrap_err();

        assert!(matches!(err, CepError::InvalidInput(_)));
        assert_eq!(resolver.calls(), 0);
        assert!(book.is_empty());
    }

    #[test]
    fn unknown_code_leaves_book_untouched() {
        let store = StoreFixture::new().with_addresses(1).build();
        let (mut book, _) = AddressBook::open(store);
        let before = book.store().backend().raw(COLLECTION_KEY);

        let err = run(&mut book, &StaticResolver::new(), "99999999").unwrap_err();

        assert!(matches!(
            err,
            CepError::Resolution(ResolutionError::NotFound(_))
        ));
        assert_eq!(book.len(), 1);
        assert_eq!(book.store().backend().raw(COLLECTION_KEY), before);
    }

    #[test]
    fn unreachable_service_is_reported() {
        let (mut book, _) = AddressBook::open(InMemoryStore::new());

        let err = run(&mut book, &StaticResolver::offline(), "01001000").unwrap_err();

        assert!(matches!(
            err,
            CepError::Resolution(ResolutionError::Unreachable(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn persistence_failure_rolls_back() {
        let (mut book, _) = AddressBook::open(InMemoryStore::new());
        book.store().backend().set_simulate_write_error(true);
        let resolver = StaticResolver::new().with("01001000", "São Paulo", "SP");

        let err = run(&mut book, &resolver, "01001000").unwrap_err();

        assert!(matches!(err, CepError::Persistence(_)));
        assert!(book.is_empty());
    }
}
