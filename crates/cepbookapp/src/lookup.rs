//! # Postal Code Lookup
//!
//! Resolution of a CEP into address fields is delegated to an external service behind
//! the [`CepResolver`] trait. [`resolve`] is the adapter the rest of the crate uses:
//!
//! 1. **Shape check**: the code must be exactly [`CEP_LENGTH`] characters. Nothing else
//!    is validated. Failing codes never reach the service.
//! 2. **One call** to the resolver.
//! 3. **Mapping**: the returned [`LookupRecord`] becomes a new [`Address`] with a fresh
//!    id and `created_at = now`.
//!
//! The adapter does not touch the repository; adding the result is the caller's job.
//!
//! ## Failure Modes
//!
//! | Situation | Error |
//! |-----------|-------|
//! | Code is not 8 characters | [`CepError::InvalidInput`] |
//! | Service says the code does not exist | [`ResolutionError::NotFound`] |
//! | Network or HTTP failure | [`ResolutionError::Unreachable`] |
//! | Response cannot be decoded | [`ResolutionError::BadResponse`] |
//!
//! ## ViaCEP
//!
//! [`ViaCepClient`] talks to `GET {base}/{cep}/json/`. For unknown codes the service
//! answers `200 OK` with `{"erro": true}` (older deployments send `"true"` as a string),
//! and `400 Bad Request` for codes it considers malformed. Both are `NotFound`.

use crate::error::{CepError, ResolutionError, Result};
use crate::model::{Address, CEP_LENGTH};
use serde::Deserialize;
use std::time::Duration;

/// Address fields as returned by the lookup service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupRecord {
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "complemento")]
    pub complement: String,
    #[serde(rename = "unidade")]
    pub unit: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "localidade")]
    pub city: String,
    #[serde(rename = "uf")]
    pub state_code: String,
    #[serde(rename = "estado")]
    pub state_name: String,
    #[serde(rename = "regiao")]
    pub region: String,
    #[serde(rename = "ibge")]
    pub ibge_code: String,
    #[serde(rename = "gia")]
    pub gia_code: String,
    #[serde(rename = "ddd")]
    pub area_code: String,
    #[serde(rename = "siafi")]
    pub siafi_code: String,
}

impl LookupRecord {
    fn into_address(self, cep: &str) -> Address {
        let mut address = Address::new(cep);
        address.street = self.street;
        address.complement = self.complement;
        address.unit = self.unit;
        address.neighborhood = self.neighborhood;
        address.city = self.city;
        address.state_code = self.state_code;
        address.state_name = self.state_name;
        address.region = self.region;
        address.ibge_code = self.ibge_code;
        address.gia_code = self.gia_code;
        address.area_code = self.area_code;
        address.siafi_code = self.siafi_code;
        address
    }
}

/// The external resolution service.
pub trait CepResolver {
    fn fetch(&self, cep: &str) -> std::result::Result<LookupRecord, ResolutionError>;
}

/// Validates the code shape. Only the length is checked.
pub fn validate_cep(code: &str) -> Result<()> {
    let len = code.chars().count();
    if len != CEP_LENGTH {
        return Err(CepError::InvalidInput(format!(
            "'{}' has {} characters, expected {}",
            code, len, CEP_LENGTH
        )));
    }
    Ok(())
}

/// Resolves `code` into a brand new [`Address`].
pub fn resolve<R: CepResolver + ?Sized>(resolver: &R, code: &str) -> Result<Address> {
    validate_cep(code)?;
    tracing::debug!(cep = code, "resolving postal code");
    let record = resolver.fetch(code).inspect_err(|e| {
        tracing::info!(cep = code, error = %e, "postal code lookup failed");
    })?;
    Ok(record.into_address(code))
}

// ============================================================================
// ViaCEP client
// ============================================================================

pub const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br/ws";

pub struct ViaCepClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_config(config),
        }
    }

    pub fn url_for(&self, cep: &str) -> String {
        format!("{}/{}/json/", self.base_url, cep)
    }
}

impl CepResolver for ViaCepClient {
    fn fetch(&self, cep: &str) -> std::result::Result<LookupRecord, ResolutionError> {
        let url = self.url_for(cep);
        let mut response = self.agent.get(&url).call().map_err(|e| match e {
            ureq::Error::StatusCode(400) => ResolutionError::NotFound(cep.to_string()),
            other => ResolutionError::Unreachable(other.to_string()),
        })?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ResolutionError::Unreachable(format!("failed to read response: {}", e)))?;

        parse_viacep_body(cep, &body)
    }
}

/// Decodes a ViaCEP JSON body, recognizing the not-found marker.
pub fn parse_viacep_body(
    cep: &str,
    body: &str,
) -> std::result::Result<LookupRecord, ResolutionError> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        let head: String = body.chars().take(200).collect();
        ResolutionError::BadResponse(format!("invalid JSON ({}): {}", e, head))
    })?;

    let not_found = match json.get("erro") {
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::String(flag)) => flag == "true",
        _ => false,
    };
    if not_found {
        return Err(ResolutionError::NotFound(cep.to_string()));
    }
    if !json.is_object() {
        return Err(ResolutionError::BadResponse(format!(
            "expected an object, got: {}",
            json
        )));
    }

    serde_json::from_value(json).map_err(|e| ResolutionError::BadResponse(e.to_string()))
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Resolver answering from a fixed table. Unknown codes are `NotFound`.
    #[derive(Default)]
    pub struct StaticResolver {
        records: HashMap<String, LookupRecord>,
        offline: bool,
        calls: Cell<usize>,
    }

    impl StaticResolver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, cep: &str, city: &str, state_code: &str) -> Self {
            self.records.insert(
                cep.to_string(),
                LookupRecord {
                    street: format!("Rua {}", cep),
                    city: city.to_string(),
                    state_code: state_code.to_string(),
                    ..Default::default()
                },
            );
            self
        }

        pub fn with_record(mut self, cep: &str, record: LookupRecord) -> Self {
            self.records.insert(cep.to_string(), record);
            self
        }

        /// Every call fails as if the network were down.
        pub fn offline() -> Self {
            Self {
                offline: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl CepResolver for StaticResolver {
        fn fetch(&self, cep: &str) -> std::result::Result<LookupRecord, ResolutionError> {
            self.calls.set(self.calls.get() + 1);
            if self.offline {
                return Err(ResolutionError::Unreachable("connection refused".into()));
            }
            self.records
                .get(cep)
                .cloned()
                .ok_or_else(|| ResolutionError::NotFound(cep.to_string()))
        }
    }

    /// The record ViaCEP returns for 01001-000.
    pub fn se_record() -> LookupRecord {
        LookupRecord {
            street: "Praça da Sé".into(),
            complement: "lado ímpar".into(),
            unit: String::new(),
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state_code: "SP".into(),
            state_name: "São Paulo".into(),
            region: "Sudeste".into(),
            ibge_code: "3550308".into(),
            gia_code: "1004".into(),
            area_code: "11".into(),
            siafi_code: "7107".into(),
        }
    }
}
