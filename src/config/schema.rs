//! Configuration schema definitions.
//!
//! This module defines the structure of the configuration file using serde.
//! All configuration sections are defined here with appropriate defaults.

use crate::port::{Parity, SerialPortConfig, StopBits};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which device to open
    pub port: PortConfig,
    /// Line settings
    pub serial: SerialConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Port selection section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortConfig {
    /// Device path or alias (e.g. "/dev/ttyUSB0", "COM3", "sensor")
    pub name: Option<String>,
    /// Port aliases for convenience
    pub aliases: HashMap<String, String>,
}

impl PortConfig {
    /// Resolve a port name through aliases
    pub fn resolve(&self, name: &str) -> String {
        self.aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

/// Serial line settings section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Baud rate
    pub baud: u32,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Bits per character (0 selects the driver default)
    pub size: u8,
    /// Parity: a name ("even") or a code ("E")
    pub parity: Parity,
    /// Stop bits: 1, 1.5 or 2
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        let defaults = SerialPortConfig::default();
        Self {
            baud: defaults.baud,
            read_timeout_ms: 1000,
            size: defaults.size,
            parity: defaults.parity,
            stop_bits: defaults.stop_bits,
        }
    }
}

impl SerialConfig {
    /// Get the read timeout as Duration
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// The generic configuration consumed by the port factory.
    pub fn to_port_config(&self) -> SerialPortConfig {
        SerialPortConfig {
            baud: self.baud,
            read_timeout: self.read_timeout(),
            size: self.size,
            parity: self.parity,
            stop_bits: self.stop_bits,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Log format: "json", "pretty", "compact"
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format
    Json,
    /// Pretty format with colors
    #[default]
    Pretty,
    /// Compact format
    Compact,
}
