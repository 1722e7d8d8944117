//! Errors raised while locating, reading or writing `serial-factory.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("serial-factory config not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read serial-factory config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid serial-factory config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode serial-factory config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("cannot write serial-factory config '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `SERIAL_FACTORY_*` override could not be parsed
    #[error("invalid value in {var}: {message}")]
    EnvParse { var: String, message: String },

    /// `save` was called on a loader built from defaults only
    #[error("config was not loaded from a file; use save_to with an explicit path")]
    NoSavePath,
}

impl ConfigError {
    /// Create an env parse error
    pub fn env_parse<V: Into<String>, M: Into<String>>(var: V, message: M) -> Self {
        Self::EnvParse {
            var: var.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
