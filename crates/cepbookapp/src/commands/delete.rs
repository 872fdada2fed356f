use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::AddressSelector;
use crate::repository::AddressBook;
use crate::store::DataStore;

use super::helpers::{resolve_selectors, Resolved};

/// Removes the selected addresses one by one.
///
/// Every selector is resolved up front, so an invalid index aborts before anything
/// is removed. Each removal persists on its own; if one fails, the ones before it stay
/// removed and the error is returned.
pub fn run<S: DataStore>(
    book: &mut AddressBook<S>,
    selectors: &[AddressSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(book, selectors)?;
    let mut result = CmdResult::default();

    for entry in resolved {
        match entry {
            Resolved::Found(da) => {
                if book.remove(&da.address.id)?.is_some() {
                    result.add_message(CmdMessage::success(format!(
                        "Address deleted ({}): {}",
                        da.index,
                        da.address.summary()
                    )));
                    result.affected_addresses.push(da);
                }
            }
            Resolved::Missing(id) => {
                result.add_message(CmdMessage::info(format!(
                    "No address with id {}, nothing to delete",
                    id
                )));
            }
        }
    }

    result.total = book.len();
    Ok(result)
}
