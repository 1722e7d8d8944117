//! Shared test utilities for serial-factory tests.

#![allow(dead_code)]

use serial_factory::port::{Parity, SerialPortConfig, StopBits};
use std::time::Duration;

/// Every parity and stop-bits combination the factory must accept.
pub fn valid_combinations() -> Vec<(Parity, StopBits)> {
    Parity::ALL
        .into_iter()
        .flat_map(|parity| StopBits::ALL.into_iter().map(move |stop_bits| (parity, stop_bits)))
        .collect()
}

/// A config with ordinary line settings and the given codes.
pub fn config_with(parity: Parity, stop_bits: StopBits) -> SerialPortConfig {
    SerialPortConfig {
        baud: 9600,
        read_timeout: Duration::from_secs(1),
        size: 8,
        parity,
        stop_bits,
    }
}

/// A unique-looking device name.
pub fn device_name(suffix: impl std::fmt::Display) -> String {
    format!("some_device_name_or_path-{suffix}")
}
