//! # Address Identifiers: UUID vs Display Index
//!
//! Every address carries a UUID, which is the only identity the repository knows. UUIDs
//! are cumbersome to type, so the CLI also shows a short **display index**.
//!
//! ## Canonical Ordering
//!
//! Display indexes are positions in the **full, unfiltered** collection, newest first,
//! starting at 1. Filtering never renumbers: if `3` is the only match for a query it is
//! still shown as `3`, and `cepbook delete 3` targets the same address with or without
//! the filter.
//!
//! Indexes do shift after an add (everything moves down by one) or a delete (everything
//! after it moves up). UUIDs never change.
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g. `1`, `42`)
//! - **Range**: `Start-End` (e.g. `1-3`), start must be ≤ end
//! - **UUID**: the full hyphenated id (e.g. `6f1c2d1e-9a3b-4c5d-8e7f-0a1b2c3d4e5f`)
//!
//! **Developer Note**: When producing lists, always use [`index_addresses`] on the full
//! collection before filtering. Never enumerate a filtered list.

use crate::model::Address;
use serde::Serialize;
use uuid::Uuid;

/// A user-facing, 1-based position in the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A user input selecting one or more addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSelector {
    Index(DisplayIndex),
    Range(DisplayIndex, DisplayIndex),
    Id(Uuid),
}

impl std::fmt::Display for AddressSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressSelector::Index(idx) => write!(f, "{}", idx),
            AddressSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            AddressSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayAddress {
    pub index: DisplayIndex,
    pub address: Address,
}

/// Pairs every address with its canonical display index. Input must be the full
/// collection in repository order.
pub fn index_addresses(addresses: &[Address]) -> Vec<DisplayAddress> {
    addresses
        .iter()
        .enumerate()
        .map(|(i, address)| DisplayAddress {
            index: DisplayIndex(i + 1),
            address: address.clone(),
        })
        .collect()
}

/// Parses a selector: a UUID, a range `N-M`, or a single index `N`.
pub fn parse_selector(s: &str) -> Result<AddressSelector, String> {
    let s = s.trim();
    if let Ok(id) = Uuid::parse_str(s) {
        return Ok(AddressSelector::Id(id));
    }

    if let Some((start, end)) = s.split_once('-') {
        let start: DisplayIndex = start.parse()?;
        let end: DisplayIndex = end.parse()?;
        if start > end {
            return Err(format!("Invalid range {}-{}: start is after end", start, end));
        }
        return Ok(AddressSelector::Range(start, end));
    }

    s.parse().map(AddressSelector::Index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::address;

    #[test]
    fn indexes_follow_collection_order() {
        let addresses = vec![
            address("20040002", "Rio de Janeiro", "RJ"),
            address("01001000", "São Paulo", "SP"),
        ];
        let indexed = index_addresses(&addresses);

        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].address.cep, "20040002");
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert_eq!(indexed[1].address.cep, "01001000");
    }

    #[test]
    fn parses_single_index() {
        assert_eq!(
            parse_selector("3"),
            Ok(AddressSelector::Index(DisplayIndex(3)))
        );
        assert_eq!(
            parse_selector(" 12 "),
            Ok(AddressSelector::Index(DisplayIndex(12)))
        );
    }

    #[test]
    fn parses_range() {
        assert_eq!(
            parse_selector("2-4"),
            Ok(AddressSelector::Range(DisplayIndex(2), DisplayIndex(4)))
        );
        assert_eq!(
            parse_selector("3-3"),
            Ok(AddressSelector::Range(DisplayIndex(3), DisplayIndex(3)))
        );
    }

    #[test]
    fn parses_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_selector(&id.to_string()),
            Ok(AddressSelector::Id(id))
        );
    }

    #[test]
    fn rejects_invalid_selectors() {
        for input in ["", "0", "abc", "-5", "3-", "5-3", "1-x", "p1"] {
            assert!(parse_selector(input).is_err(), "input {input:?}");
        }
    }
}
