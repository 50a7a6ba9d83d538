//! # Client Configuration
//!
//! Where the catalog is fetched from and how long to wait for it.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults (`pokedex_core::primitives`)
//! 2. TOML file passed with `--config`
//! 3. Environment: `POKEDEX_URL`, `POKEDEX_TIMEOUT_SECS`
//! 4. The `--url` CLI flag (applied by the CLI)
//!
//! ```toml
//! endpoint = "https://example.org/creatures.json"
//! timeout_secs = 5
//! user_agent = "my-pokedex/1.0"
//! ```

use pokedex_core::PokedexError;
use pokedex_core::primitives::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the endpoint.
pub const ENV_URL: &str = "POKEDEX_URL";

/// Environment variable overriding the timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";

/// Settings for the HTTP remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// URL returning the full catalog as a JSON array.
    pub endpoint: String,
    /// Whole-request timeout, in seconds. Must be non-zero.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every fetch.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, PokedexError> {
        let config: Self =
            toml::from_str(text).map_err(|e| PokedexError::Config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration: defaults, then `path` if given, then environment.
    ///
    /// An explicit path that cannot be read is an error; there is no silent
    /// fallback to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, PokedexError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    PokedexError::Config(format!("Cannot read '{}': {e}", path.display()))
                })?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };

        let url = std::env::var(ENV_URL).ok();
        let timeout = std::env::var(ENV_TIMEOUT_SECS).ok();
        config.with_overrides(url.as_deref(), timeout.as_deref())
    }

    /// Apply endpoint and timeout overrides given as raw strings.
    pub fn with_overrides(
        mut self,
        endpoint: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, PokedexError> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = timeout_secs {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                PokedexError::Config(format!("Invalid timeout '{raw}': expected whole seconds"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the endpoint scheme and the timeout.
    pub fn validate(&self) -> Result<(), PokedexError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(PokedexError::Config(format!(
                "Endpoint '{}' must be an http:// or https:// URL",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(PokedexError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
