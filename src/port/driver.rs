//! Driver-specific configuration produced by the factory.

use super::error::TranslationError;
use super::traits::{Parity, StopBits};
use serde::Serialize;
use std::time::Duration;

/// Parity setting understood by the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverParity {
    None,
    Odd,
    Even,
    Mark,
    Space,
}

impl TryFrom<Parity> for DriverParity {
    type Error = TranslationError;

    fn try_from(parity: Parity) -> Result<Self, Self::Error> {
        match parity {
            Parity::NONE => Ok(Self::None),
            Parity::ODD => Ok(Self::Odd),
            Parity::EVEN => Ok(Self::Even),
            Parity::MARK => Ok(Self::Mark),
            Parity::SPACE => Ok(Self::Space),
            other => Err(TranslationError::Parity(other)),
        }
    }
}

impl From<DriverParity> for Parity {
    fn from(parity: DriverParity) -> Self {
        match parity {
            DriverParity::None => Parity::NONE,
            DriverParity::Odd => Parity::ODD,
            DriverParity::Even => Parity::EVEN,
            DriverParity::Mark => Parity::MARK,
            DriverParity::Space => Parity::SPACE,
        }
    }
}

/// Stop-bits setting understood by the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStopBits {
    One,
    OneAndHalf,
    Two,
}

impl TryFrom<StopBits> for DriverStopBits {
    type Error = TranslationError;

    fn try_from(stop_bits: StopBits) -> Result<Self, Self::Error> {
        match stop_bits {
            StopBits::ONE => Ok(Self::One),
            StopBits::ONE_AND_HALF => Ok(Self::OneAndHalf),
            StopBits::TWO => Ok(Self::Two),
            other => Err(TranslationError::StopBits(other)),
        }
    }
}

impl From<DriverStopBits> for StopBits {
    fn from(stop_bits: DriverStopBits) -> Self {
        match stop_bits {
            DriverStopBits::One => StopBits::ONE,
            DriverStopBits::OneAndHalf => StopBits::ONE_AND_HALF,
            DriverStopBits::Two => StopBits::TWO,
        }
    }
}

/// Fully translated configuration handed to a [`SerialDriver`](super::SerialDriver).
///
/// A value of this type only exists for inputs whose parity and stop bits
/// were both recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverConfig {
    /// Device path or logical name, as given by the caller.
    pub name: String,
    pub baud: u32,
    pub read_timeout: Duration,
    /// Bits per character; 0 asks the driver for its default.
    pub size: u8,
    pub parity: DriverParity,
    pub stop_bits: DriverStopBits,
}
