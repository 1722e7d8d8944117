//! Factory turning a generic configuration into an openable port.

use super::driver::{DriverConfig, DriverParity, DriverStopBits};
use super::error::{OpenError, TranslationError};
use super::native::NativeDriver;
use super::traits::{SerialDriver, SerialPortConfig};

/// A translated, ready-to-open serial port.
///
/// Creating a factory performs no I/O. Each call to [`open`](Self::open) is
/// an independent request to the driver; the factory never keeps the handle
/// it returns, so a failed open can simply be retried.
#[derive(Debug, Clone)]
pub struct SerialPortFactory<D = NativeDriver> {
    config: DriverConfig,
    driver: D,
}

impl SerialPortFactory<NativeDriver> {
    /// Translate `config` for the native `serialport` driver.
    ///
    /// # Example
    /// ```no_run
    /// use serial_factory::port::{Parity, SerialPortConfig, SerialPortFactory};
    ///
    /// let config = SerialPortConfig { parity: Parity::EVEN, ..Default::default() };
    /// let factory = SerialPortFactory::new("/dev/ttyUSB0", &config)?;
    /// let port = factory.open()?;
    /// # drop(port);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        name: impl Into<String>,
        config: &SerialPortConfig,
    ) -> Result<Self, TranslationError> {
        Self::with_driver(name, config, NativeDriver)
    }
}

impl<D: SerialDriver> SerialPortFactory<D> {
    /// Translate `config` for an arbitrary driver.
    ///
    /// Parity is checked before stop bits, so when both are invalid the
    /// parity error is returned.
    pub fn with_driver(
        name: impl Into<String>,
        config: &SerialPortConfig,
        driver: D,
    ) -> Result<Self, TranslationError> {
        let parity = DriverParity::try_from(config.parity)?;
        let stop_bits = DriverStopBits::try_from(config.stop_bits)?;

        Ok(Self {
            config: DriverConfig {
                name: name.into(),
                baud: config.baud,
                read_timeout: config.read_timeout,
                size: config.size,
                parity,
                stop_bits,
            },
            driver,
        })
    }

    /// Ask the driver to open the port.
    pub fn open(&self) -> Result<D::Port, OpenError> {
        self.driver
            .open(&self.config)
            .map_err(|e| OpenError::new(&self.config.name, e))
    }

    /// The translated configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Device name the port will be opened with.
    pub fn name(&self) -> &str {
        &self.config.name
    }
}
