//! Configuration module for serial-factory.
//!
//! This module provides TOML-based configuration with environment variable overrides.
//!
//! # Configuration Resolution
//!
//! Configuration is loaded from the following locations (in order of priority):
//!
//! 1. `SERIAL_FACTORY_CONFIG` environment variable (explicit path)
//! 2. `./serial-factory.toml` (current directory)
//! 3. `serial-factory.toml` in the platform config directory
//! 4. Built-in defaults (no file required)
//!
//! # Environment Overrides
//!
//! The pattern is: `SERIAL_FACTORY_<SECTION>_<KEY>`
//!
//! Examples:
//! - `SERIAL_FACTORY_PORT_NAME=/dev/ttyUSB0`
//! - `SERIAL_FACTORY_SERIAL_BAUD=9600`
//! - `SERIAL_FACTORY_SERIAL_STOP_BITS=2`
//!
//! # Example
//!
//! ```rust,no_run
//! use serial_factory::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load()?;
//! let config = loader.config();
//!
//! println!("Baud: {}", config.serial.baud);
//! println!("Parity: {}", config.serial.parity);
//! # Ok::<(), serial_factory::config::ConfigError>(())
//! ```

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    get_default_config_dir, get_default_config_path, resolve_config_path, ConfigLoader,
};
pub use schema::{Config, LogFormat, LoggingConfig, PortConfig, SerialConfig};
