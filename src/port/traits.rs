//! Core types for serial port abstraction.
//!
//! Defines the generic `SerialPortConfig` accepted by the factory and the
//! `SerialDriver` trait that lets real drivers and mocks be swapped freely.

use super::driver::DriverConfig;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::io::{Read, Write};
use std::time::Duration;

/// Driver-independent configuration parameters for a serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialPortConfig {
    /// Baud rate (bits per second).
    pub baud: u32,

    /// Read timeout, interpreted by the driver.
    pub read_timeout: Duration,

    /// Bits per character.
    pub size: u8,

    /// Parity checking mode.
    pub parity: Parity,

    /// Number of stop bits.
    pub stop_bits: StopBits,
}

impl Default for SerialPortConfig {
    fn default() -> Self {
        Self {
            baud: 9600,
            read_timeout: Duration::from_secs(1),
            size: 8,
            parity: Parity::NONE,
            stop_bits: StopBits::ONE,
        }
    }
}

/// Parity code.
///
/// The code is open: any byte can be stored, but only [`Parity::NONE`],
/// [`Parity::ODD`], [`Parity::EVEN`], [`Parity::MARK`] and [`Parity::SPACE`]
/// translate to a driver setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parity(pub u8);

impl Parity {
    pub const NONE: Self = Self(b'N');
    pub const ODD: Self = Self(b'O');
    pub const EVEN: Self = Self(b'E');
    pub const MARK: Self = Self(b'M');
    pub const SPACE: Self = Self(b'S');

    /// All recognized parity codes.
    pub const ALL: [Self; 5] = [Self::NONE, Self::ODD, Self::EVEN, Self::MARK, Self::SPACE];

    /// Whether this code is one of the recognized values.
    pub fn is_recognized(self) -> bool {
        Self::ALL.contains(&self)
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(Self::NONE),
            "odd" => Some(Self::ODD),
            "even" => Some(Self::EVEN),
            "mark" => Some(Self::MARK),
            "space" => Some(Self::SPACE),
            _ => None,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "'{}'", self.0 as char)
        } else {
            write!(f, "0x{:02x}", self.0)
        }
    }
}

impl std::str::FromStr for Parity {
    type Err = String;

    /// Accepts a full name (`even`), a single-character code (`E` or `e`),
    /// or a raw hex code (`0xc8`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(parity) = Self::from_name(s) {
            return Ok(parity);
        }
        if let Some(hex) = s.strip_prefix("0x") {
            return u8::from_str_radix(hex, 16)
                .map(Self)
                .map_err(|_| format!("invalid parity '{s}'"));
        }
        match s.as_bytes() {
            [code] => {
                let upper = Self(code.to_ascii_uppercase());
                if upper.is_recognized() {
                    Ok(upper)
                } else {
                    Ok(Self(*code))
                }
            }
            _ => Err(format!("invalid parity '{s}'")),
        }
    }
}

impl Serialize for Parity {
    /// Printable codes are written as the character itself, anything else as
    /// `0x..` so that the value parses back.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_ascii_graphic() {
            let mut buf = [0u8; 4];
            serializer.serialize_str(char::from(self.0).encode_utf8(&mut buf))
        } else {
            serializer.serialize_str(&format!("0x{:02x}", self.0))
        }
    }
}

impl<'de> Deserialize<'de> for Parity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParityVisitor;

        impl Visitor<'_> for ParityVisitor {
            type Value = Parity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a parity name, a single-character code or a 0x.. code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Parity, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ParityVisitor)
    }
}

/// Stop-bits code.
///
/// Like [`Parity`] this is open; only [`StopBits::ONE`],
/// [`StopBits::ONE_AND_HALF`] and [`StopBits::TWO`] translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopBits(pub u8);

impl StopBits {
    pub const ONE: Self = Self(1);
    pub const ONE_AND_HALF: Self = Self(15);
    pub const TWO: Self = Self(2);

    /// All recognized stop-bits codes.
    pub const ALL: [Self; 3] = [Self::ONE, Self::ONE_AND_HALF, Self::TWO];

    /// Whether this code is one of the recognized values.
    pub fn is_recognized(self) -> bool {
        Self::ALL.contains(&self)
    }
}

impl fmt::Display for StopBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ONE_AND_HALF => f.write_str("1.5"),
            Self(code) => write!(f, "{code}"),
        }
    }
}

impl std::str::FromStr for StopBits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.5" => Ok(Self::ONE_AND_HALF),
            _ => s
                .parse::<u8>()
                .map(Self)
                .map_err(|_| format!("invalid stop bits '{s}'")),
        }
    }
}

impl Serialize for StopBits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::ONE_AND_HALF => serializer.serialize_f64(1.5),
            Self(code) => serializer.serialize_u8(code),
        }
    }
}

impl<'de> Deserialize<'de> for StopBits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StopBitsVisitor;

        impl Visitor<'_> for StopBitsVisitor {
            type Value = StopBits;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("1, 1.5, 2 or a raw stop-bits code")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<StopBits, E> {
                u8::try_from(v)
                    .map(StopBits)
                    .map_err(|_| E::custom(format!("stop bits code {v} out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<StopBits, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("stop bits code {v} out of range")))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<StopBits, E> {
                if v == 1.5 {
                    Ok(StopBits::ONE_AND_HALF)
                } else if v.fract() == 0.0 && (0.0..=255.0).contains(&v) {
                    Ok(StopBits(v as u8))
                } else {
                    Err(E::custom(format!("invalid stop bits {v}")))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StopBits, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StopBitsVisitor)
    }
}

/// An open byte-stream device.
///
/// Closing is done by dropping the value.
pub trait Port: Read + Write + Send {}

impl<T: Read + Write + Send + ?Sized> Port for T {}

/// Capability to open a port from a driver-specific configuration.
///
/// This is the only seam between the factory and the hardware, so the
/// translation logic can be exercised with [`MockDriver`](super::MockDriver).
pub trait SerialDriver {
    /// Handle returned by a successful open.
    type Port: Port;

    /// Error reported when the port cannot be opened.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open the port described by `config`.
    fn open(&self, config: &DriverConfig) -> Result<Self::Port, Self::Error>;
}

impl<D: SerialDriver + ?Sized> SerialDriver for &D {
    type Port = D::Port;
    type Error = D::Error;

    fn open(&self, config: &DriverConfig) -> Result<Self::Port, Self::Error> {
        (**self).open(config)
    }
}
