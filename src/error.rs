use crate::config::ConfigError;
use crate::port::{NativeDriverError, OpenError, TranslationError};
use thiserror::Error;

/// A specialized `Result` type for the command-line front end.
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error type.
///
/// The library layers return their own precise errors; this type only
/// gathers them for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("failed to list serial ports: {0}")]
    Discovery(#[from] NativeDriverError),

    #[error("no port name given; pass one on the command line or set [port] name in the config")]
    NoPortName,

    #[error("failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}
