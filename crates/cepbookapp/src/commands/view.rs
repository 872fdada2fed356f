use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::AddressSelector;
use crate::repository::AddressBook;
use crate::store::DataStore;

use super::helpers::{resolve_selectors, Resolved};

pub fn run<S: DataStore>(
    book: &AddressBook<S>,
    selectors: &[AddressSelector],
) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_total(book.len());

    for resolved in resolve_selectors(book, selectors)? {
        match resolved {
            Resolved::Found(da) => result.listed_addresses.push(da),
            Resolved::Missing(id) => {
                result.add_message(CmdMessage::warning(format!("No address with id {}", id)))
            }
        }
    }

    Ok(result)
}
