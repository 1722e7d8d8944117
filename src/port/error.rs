//! Port-specific error types.
//!
//! Translation failures and open failures are kept apart: the first is raised
//! while building a factory and never touches the OS, the second wraps
//! whatever the driver reported.

use super::traits::{Parity, StopBits};
use thiserror::Error;

/// Boxed driver error carried as the cause of an [`OpenError`].
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic configuration field has no driver-specific equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The parity code is not one of the five recognized values.
    #[error("failed to translate parity {0} to an implementation-specific value")]
    Parity(Parity),

    /// The stop-bits code is not one of the three recognized values.
    #[error("failed to translate stop bits {0} to an implementation-specific value")]
    StopBits(StopBits),
}

impl TranslationError {
    /// Name of the configuration field that failed to translate.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Parity(_) => "parity",
            Self::StopBits(_) => "stop bits",
        }
    }
}

/// The driver refused to open the named port.
#[derive(Debug, Error)]
#[error("failed to open port '{name}': {source}")]
pub struct OpenError {
    name: String,
    #[source]
    source: DriverError,
}

impl OpenError {
    /// Wrap a driver error with the name of the port that failed to open.
    pub fn new(name: impl Into<String>, source: impl Into<DriverError>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Name of the port that failed to open.
    pub fn port_name(&self) -> &str {
        &self.name
    }

    /// The driver's original error.
    pub fn driver_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_translation_error_display() {
        let err = TranslationError::Parity(Parity(b'X'));
        assert_eq!(
            err.to_string(),
            "failed to translate parity 'X' to an implementation-specific value"
        );
        assert_eq!(err.field(), "parity");

        let err = TranslationError::StopBits(StopBits(3));
        assert_eq!(
            err.to_string(),
            "failed to translate stop bits 3 to an implementation-specific value"
        );
        assert_eq!(err.field(), "stop bits");
    }

    #[test]
    fn test_open_error_chains_driver_error() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such device");
        let err = OpenError::new("/dev/ttyUSB9", cause);

        assert!(err.to_string().starts_with("failed to open port"));
        assert!(err.to_string().contains("no such device"));
        assert_eq!(err.port_name(), "/dev/ttyUSB9");

        let source = err.source().expect("open error must expose its cause");
        assert_eq!(source.to_string(), "no such device");

        let cause = err
            .driver_error()
            .downcast_ref::<std::io::Error>()
            .expect("driver error keeps its concrete type");
        assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);
    }
}
