//! # Domain Model: Addresses and the Collection
//!
//! An [`Address`] is the structured result of resolving a Brazilian postal code (CEP).
//! It is created exactly once, by a successful lookup, and never edited afterwards:
//! the only ways an address leaves the collection are single deletion and clear.
//!
//! ## Field Mapping
//!
//! The lookup service speaks Portuguese field names; the model uses English ones.
//!
//! ```text
//! logradouro  -> street         localidade -> city
//! complemento -> complement     uf         -> state_code
//! unidade     -> unit           estado     -> state_name
//! bairro      -> neighborhood   regiao     -> region
//! ibge        -> ibge_code      gia        -> gia_code
//! ddd         -> area_code      siafi      -> siafi_code
//! ```
//!
//! ## Empty vs Absent
//!
//! Text fields may be empty strings but are never absent. Records persisted by older
//! versions (or hand-edited) that lack a text field deserialize it as `""`. The `id`,
//! `cep` and `created_at` fields are mandatory: a record without them is corrupt.
//!
//! ## Ordering
//!
//! The collection is newest-first. Position 0 is always the most recent insertion and
//! no operation reorders existing entries. See [`crate::repository`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters a postal code must have before a lookup is attempted.
pub const CEP_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub cep: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub complement: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub ibge_code: String,
    #[serde(default)]
    pub gia_code: String,
    #[serde(default)]
    pub area_code: String,
    #[serde(default)]
    pub siafi_code: String,
    pub created_at: DateTime<Utc>,
}

impl Address {
    /// A fresh address with only the postal code set. Identity and timestamp are
    /// generated here and nowhere else.
    pub fn new(cep: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cep: cep.into(),
            street: String::new(),
            complement: String::new(),
            unit: String::new(),
            neighborhood: String::new(),
            city: String::new(),
            state_code: String::new(),
            state_name: String::new(),
            region: String::new(),
            ibge_code: String::new(),
            gia_code: String::new(),
            area_code: String::new(),
            siafi_code: String::new(),
            created_at: Utc::now(),
        }
    }

    /// One-line summary used in messages: `"Praça da Sé, São Paulo/SP (01001000)"`.
    pub fn summary(&self) -> String {
        let place = match (self.city.is_empty(), self.state_code.is_empty()) {
            (false, false) => format!("{}/{}", self.city, self.state_code),
            (false, true) => self.city.clone(),
            (true, false) => self.state_code.clone(),
            (true, true) => String::new(),
        };
        let mut parts: Vec<&str> = Vec::new();
        if !self.street.is_empty() {
            parts.push(&self.street);
        }
        if !place.is_empty() {
            parts.push(&place);
        }
        if parts.is_empty() {
            format!("({})", self.cep)
        } else {
            format!("{} ({})", parts.join(", "), self.cep)
        }
    }
}

/// Observable state of the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookState {
    Empty,
    Populated,
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Address;

    /// Builds an address as a lookup would, for tests that bypass the resolver.
    pub fn address(cep: &str, city: &str, state_code: &str) -> Address {
        let mut address = Address::new(cep);
        address.street = format!("Rua {}", cep);
        address.city = city.to_string();
        address.state_code = state_code.to_string();
        address
    }
}
