//! Handler configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("short_key_length must be at least 1")]
    InvalidKeyLength,
}

/// Parameter names and key generation settings.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```
/// use shortlink::Config;
///
/// let config = Config::from_toml_str("short_key_length = 6").unwrap();
/// assert_eq!(config.short_key_length, 6);
/// assert_eq!(config.key_param, "s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial length of generated short keys. Grows on repeated collisions.
    pub short_key_length: usize,
    /// Query parameter holding the short key for lookups.
    pub key_param: String,
    /// Query parameter holding the URL to shorten.
    pub url_param: String,
    /// Query parameter holding a caller-chosen short key.
    pub alias_param: String,
    /// Header carrying the secret stored with a new record.
    pub password_header: String,
    /// Header carrying the current secret when replacing a record.
    pub old_password_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            short_key_length: 8,
            key_param: "s".to_owned(),
            url_param: "url".to_owned(),
            alias_param: "alias".to_owned(),
            password_header: "password".to_owned(),
            old_password_header: "old_password".to_owned(),
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.short_key_length == 0 {
            return Err(ConfigError::InvalidKeyLength);
        }
        Ok(())
    }
}
