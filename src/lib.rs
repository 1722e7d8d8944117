//! Serial Factory Library
//!
//! Translates a driver-independent serial configuration (baud, parity, stop
//! bits, byte size, read timeout) into the settings of a concrete driver and
//! opens the named port.
//!
//! # Modules
//!
//! - `port`: generic config, translation, the factory, and drivers
//! - `config`: Configuration management with TOML support
//! - `error`: Error type for the command-line front end
//!
//! # Example
//!
//! ```no_run
//! use serial_factory::{Parity, SerialPortConfig, SerialPortFactory, StopBits};
//! use std::io::Write;
//! use std::time::Duration;
//!
//! let config = SerialPortConfig {
//!     baud: 9600,
//!     read_timeout: Duration::from_secs(1),
//!     size: 8,
//!     parity: Parity::EVEN,
//!     stop_bits: StopBits::ONE,
//! };
//!
//! let factory = SerialPortFactory::new("/dev/ttyUSB0", &config)?;
//! let mut port = factory.open()?;
//! port.write_all(b"hello")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod port;

pub use error::{AppError, AppResult};
pub use port::{
    DriverConfig, DriverParity, DriverStopBits, MockDriver, MockPort, NativeDriver, OpenError,
    Parity, Port, SerialDriver, SerialPortConfig, SerialPortFactory, StopBits, TranslationError,
};

pub use config::{Config, ConfigError, ConfigLoader, ConfigResult};
