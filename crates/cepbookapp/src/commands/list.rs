use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::index::index_addresses;
use crate::repository::AddressBook;
use crate::store::DataStore;

/// Lists addresses matching `query`, keeping their canonical indexes.
pub fn run<S: DataStore>(book: &AddressBook<S>, query: &str) -> Result<CmdResult> {
    let listed = index_addresses(book.addresses())
        .into_iter()
        .filter(|da| filter::matches(&da.address, query))
        .collect();

    Ok(CmdResult::default()
        .with_listed_addresses(listed)
        .with_total(book.len()))
}
