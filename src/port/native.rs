//! Native serial port driver.
//!
//! Wraps the `serialport` crate behind the `SerialDriver` trait.

use super::driver::{DriverConfig, DriverParity, DriverStopBits};
use super::traits::SerialDriver;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors reported by [`NativeDriver`].
#[derive(Debug, Error)]
pub enum NativeDriverError {
    /// The setting is valid but `serialport` cannot express it.
    #[error("{setting} {value} is not supported by the native driver")]
    Unsupported {
        setting: &'static str,
        value: String,
    },

    /// A serialport-specific error occurred.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

impl NativeDriverError {
    fn unsupported(setting: &'static str, value: impl ToString) -> Self {
        Self::Unsupported {
            setting,
            value: value.to_string(),
        }
    }
}

/// Driver backed by the operating system's serial ports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDriver;

impl NativeDriver {
    /// Build a `serialport` builder from a translated configuration.
    ///
    /// Fails without touching the OS when a setting has no `serialport`
    /// equivalent.
    pub fn builder(
        config: &DriverConfig,
    ) -> Result<serialport::SerialPortBuilder, NativeDriverError> {
        Ok(serialport::new(config.name.as_str(), config.baud)
            .data_bits(data_bits(config.size)?)
            .flow_control(serialport::FlowControl::None)
            .parity(parity(config.parity)?)
            .stop_bits(stop_bits(config.stop_bits)?)
            .timeout(config.read_timeout))
    }
}

impl SerialDriver for NativeDriver {
    type Port = Box<dyn serialport::SerialPort>;
    type Error = NativeDriverError;

    fn open(&self, config: &DriverConfig) -> Result<Self::Port, Self::Error> {
        debug!(
            port = %config.name,
            baud = config.baud,
            size = config.size,
            parity = ?config.parity,
            stop_bits = ?config.stop_bits,
            "opening serial port"
        );

        Ok(Self::builder(config)?.open()?)
    }
}

fn data_bits(size: u8) -> Result<serialport::DataBits, NativeDriverError> {
    match size {
        5 => Ok(serialport::DataBits::Five),
        6 => Ok(serialport::DataBits::Six),
        7 => Ok(serialport::DataBits::Seven),
        0 | 8 => Ok(serialport::DataBits::Eight),
        other => Err(NativeDriverError::unsupported("byte size", other)),
    }
}

fn parity(parity: DriverParity) -> Result<serialport::Parity, NativeDriverError> {
    match parity {
        DriverParity::None => Ok(serialport::Parity::None),
        DriverParity::Odd => Ok(serialport::Parity::Odd),
        DriverParity::Even => Ok(serialport::Parity::Even),
        DriverParity::Mark | DriverParity::Space => Err(NativeDriverError::unsupported(
            "parity",
            format!("{parity:?}").to_lowercase(),
        )),
    }
}

fn stop_bits(stop_bits: DriverStopBits) -> Result<serialport::StopBits, NativeDriverError> {
    match stop_bits {
        DriverStopBits::One => Ok(serialport::StopBits::One),
        DriverStopBits::Two => Ok(serialport::StopBits::Two),
        DriverStopBits::OneAndHalf => Err(NativeDriverError::unsupported("stop bits", "1.5")),
    }
}

/// A serial port found on the system.
#[derive(Debug, Clone, Serialize)]
pub struct PortInfo {
    pub name: String,
    pub kind: String,
    pub manufacturer: Option<String>,
    pub product: Option<String>,
}

/// List the serial ports the OS knows about.
pub fn available_ports() -> Result<Vec<PortInfo>, NativeDriverError> {
    let ports = serialport::available_ports()?;

    Ok(ports
        .into_iter()
        .map(|port| {
            let (kind, manufacturer, product) = match port.port_type {
                serialport::SerialPortType::UsbPort(usb) => (
                    format!("usb {:04x}:{:04x}", usb.vid, usb.pid),
                    usb.manufacturer,
                    usb.product,
                ),
                serialport::SerialPortType::BluetoothPort => ("bluetooth".to_string(), None, None),
                serialport::SerialPortType::PciPort => ("pci".to_string(), None, None),
                serialport::SerialPortType::Unknown => ("unknown".to_string(), None, None),
            };

            PortInfo {
                name: port.port_name,
                kind,
                manufacturer,
                product,
            }
        })
        .collect())
}
