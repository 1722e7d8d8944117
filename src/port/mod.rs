//! Port abstraction layer for serial communication.
//!
//! Translates a generic [`SerialPortConfig`] into a [`DriverConfig`] and
//! opens it through a [`SerialDriver`], either the native `serialport`
//! backend or a mock for tests.

pub mod driver;
pub mod error;
pub mod factory;
pub mod mock;
pub mod native;
pub mod traits;

pub use driver::{DriverConfig, DriverParity, DriverStopBits};
pub use error::{DriverError, OpenError, TranslationError};
pub use factory::SerialPortFactory;
pub use mock::{MockDriver, MockPort};
pub use native::{available_ports, NativeDriver, NativeDriverError, PortInfo};
pub use traits::{Parity, Port, SerialDriver, SerialPortConfig, StopBits};
