use crate::error::{CepError, Result};
use crate::index::{index_addresses, AddressSelector, DisplayAddress, DisplayIndex};
use crate::repository::AddressBook;
use crate::store::DataStore;
use std::collections::HashSet;
use uuid::Uuid;

/// A selector resolved against the current collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Found(DisplayAddress),
    /// A UUID that is not (or no longer) in the collection.
    Missing(Uuid),
}

/// Resolves selectors to addresses, deduplicating while preserving order.
///
/// Indexes and ranges must exist; unknown UUIDs resolve to [`Resolved::Missing`] so
/// callers can treat them as no-ops.
pub fn resolve_selectors<S: DataStore>(
    book: &AddressBook<S>,
    selectors: &[AddressSelector],
) -> Result<Vec<Resolved>> {
    let indexed = index_addresses(book.addresses());
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    let by_index = |idx: DisplayIndex| -> Result<&DisplayAddress> {
        indexed
            .get(idx.0.wrapping_sub(1))
            .ok_or_else(|| CepError::Api(format!("Index {} not found", idx)))
    };

    for selector in selectors {
        match selector {
            AddressSelector::Index(idx) => {
                let da = by_index(*idx)?;
                if seen.insert(da.address.id) {
                    results.push(Resolved::Found(da.clone()));
                }
            }
            AddressSelector::Range(start, end) => {
                if start > end {
                    return Err(CepError::Api(format!(
                        "Invalid range: {} is after {}",
                        start, end
                    )));
                }
                // Validate both ends before collecting anything
                by_index(*start)?;
                by_index(*end)?;
                for da in &indexed[start.0 - 1..end.0] {
                    if seen.insert(da.address.id) {
                        results.push(Resolved::Found(da.clone()));
                    }
                }
            }
            AddressSelector::Id(id) => {
                if !seen.insert(*id) {
                    continue;
                }
                match indexed.iter().find(|da| da.address.id == *id) {
                    Some(da) => results.push(Resolved::Found(da.clone())),
                    None => results.push(Resolved::Missing(*id)),
                }
            }
        }
    }

    Ok(results)
}
