//! # Configuration
//!
//! Cepbook configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `CEPBOOK__LOOKUP_URL`, `CEPBOOK__USER_NAME`, etc.
//! 2. **Data directory config**: `<data dir>/cepbook.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `lookup_url` | `https://viacep.com.br/ws` | Base URL of the ViaCEP-compatible service |
//! | `lookup_timeout_secs` | `10` | Upper bound for a single lookup |
//! | `user_name` | none | Name used in the greeting |

use crate::lookup::DEFAULT_VIACEP_URL;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for cepbook, stored in `cepbook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CepBookConfig {
    /// Base URL of the lookup service, without the trailing `/{cep}/json/`.
    #[config(default = "https://viacep.com.br/ws")]
    pub lookup_url: String,

    /// Seconds before a lookup gives up.
    #[config(default = 10)]
    pub lookup_timeout_secs: u64,

    /// Shown in the greeting. When absent the greeting is "Welcome".
    pub user_name: Option<String>,
}

impl Default for CepBookConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_VIACEP_URL.to_string(),
            lookup_timeout_secs: 10,
            user_name: None,
        }
    }
}

impl CepBookConfig {
    /// The lookup timeout, never zero.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs.max(1))
    }

    /// The configured user name, ignoring blank values.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CepBookConfig::default();
        assert_eq!(config.lookup_url, "https://viacep.com.br/ws");
        assert_eq!(config.lookup_timeout(), Duration::from_secs(10));
        assert_eq!(config.user_name(), None);
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = CepBookConfig {
            lookup_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.lookup_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_blank_user_name_is_ignored() {
        let config = CepBookConfig {
            user_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.user_name(), None);

        let config = CepBookConfig {
            user_name: Some(" Ana ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.user_name(), Some("Ana"));
    }

    #[test]
    fn test_user_name_is_optional_when_deserializing() {
        let config: CepBookConfig =
            serde_json::from_str(r#"{"lookup_url":"http://localhost:9","lookup_timeout_secs":3}"#)
                .unwrap();
        assert_eq!(config.lookup_url, "http://localhost:9");
        assert_eq!(config.user_name, None);
    }
}
