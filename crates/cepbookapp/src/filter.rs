//! # Filtering the Collection
//!
//! A single free-text query narrows the visible addresses. An address matches when the
//! query is a substring of **any** of:
//!
//! - the postal code (exact substring, codes are digits so case does not apply),
//! - the city name,
//! - the state code (`uf`).
//!
//! City and state comparisons ignore case and Latin diacritics, so `"sao paulo"`
//! finds `"São Paulo"` and `"sp"` finds `"SP"`.
//!
//! The empty query is the identity filter. Matching entries keep their relative order:
//! this is a stable filter, never a re-sort.

use crate::model::Address;

/// Returns the addresses matching `query`, in collection order.
pub fn filter<'a>(addresses: &'a [Address], query: &str) -> Vec<&'a Address> {
    if query.is_empty() {
        return addresses.iter().collect();
    }
    let folded = fold(query);
    addresses
        .iter()
        .filter(|address| matches_folded(address, query, &folded))
        .collect()
}

/// Whether a single address matches `query`.
pub fn matches(address: &Address, query: &str) -> bool {
    query.is_empty() || matches_folded(address, query, &fold(query))
}

fn matches_folded(address: &Address, raw: &str, folded: &str) -> bool {
    address.cep.contains(raw)
        || fold(&address.city).contains(folded)
        || fold(&address.state_code).contains(folded)
}

/// Lowercases and strips Latin diacritics, precomposed or combining.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(strip_accent)
        .collect()
}

/// Combining Diacritical Marks block (U+0300..U+036F).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
