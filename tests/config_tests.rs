//! Configuration loading tests: files on disk, environment overrides, and
//! the hand-off from config to factory.

use pretty_assertions::assert_eq;
use serial_factory::config::{ConfigError, ConfigLoader, LogFormat};
use serial_factory::port::{
    DriverParity, DriverStopBits, MockDriver, Parity, SerialPortFactory, StopBits,
};
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("serial-factory.toml");
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
#[serial]
fn test_load_from_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            [port]
            name = "sensor"
            aliases = { sensor = "/dev/ttyUSB3" }

            [serial]
            baud = 4800
            read_timeout_ms = 200
            size = 7
            parity = "O"
            stop_bits = 2

            [logging]
            level = "debug"
            format = "json"
        "#,
    );

    // Act
    let loader = ConfigLoader::load_from(&path).expect("config loads");
    let config = loader.config();

    // Assert
    assert_eq!(loader.config_path.as_deref(), Some(path.as_path()));
    assert_eq!(config.port.resolve(config.port.name.as_deref().unwrap()), "/dev/ttyUSB3");
    assert_eq!(config.serial.baud, 4800);
    assert_eq!(config.serial.read_timeout(), Duration::from_millis(200));
    assert_eq!(config.serial.size, 7);
    assert_eq!(config.serial.parity, Parity::ODD);
    assert_eq!(config.serial.stop_bits, StopBits::TWO);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = ConfigLoader::load_from(&missing).unwrap_err();

    assert!(matches!(err, ConfigError::NotFound(ref p) if p == &missing));
}

#[test]
#[serial]
fn test_malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[serial\nbaud = ");

    let err = ConfigLoader::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[serial]\nbaud = 4800\nstop_bits = 1\n");
    std::env::set_var("SERIAL_FACTORY_SERIAL_BAUD", "38400");
    std::env::set_var("SERIAL_FACTORY_SERIAL_STOP_BITS", "1.5");

    let result = ConfigLoader::load_from(&path);

    std::env::remove_var("SERIAL_FACTORY_SERIAL_BAUD");
    std::env::remove_var("SERIAL_FACTORY_SERIAL_STOP_BITS");

    let config = result.expect("config loads").into_config();
    assert_eq!(config.serial.baud, 38400);
    assert_eq!(config.serial.stop_bits, StopBits::ONE_AND_HALF);
}

#[test]
#[serial]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("serial-factory.toml");

    let mut loader = ConfigLoader::with_defaults().unwrap();
    loader.config_mut().serial.parity = Parity::SPACE;
    loader.config_mut().serial.stop_bits = StopBits::ONE_AND_HALF;
    loader.save_to(&path).expect("config saves");

    let reloaded = ConfigLoader::load_from(&path).unwrap().into_config();
    assert_eq!(reloaded.serial.parity, Parity::SPACE);
    assert_eq!(reloaded.serial.stop_bits, StopBits::ONE_AND_HALF);
}

#[test]
#[serial]
fn test_unprintable_parity_code_survives_save_and_reload() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("serial-factory.toml");
    let mut loader = ConfigLoader::with_defaults().unwrap();
    loader.config_mut().serial.parity = Parity(200);

    // Act
    loader.save_to(&path).expect("config saves");
    let reloaded = ConfigLoader::load_from(&path).expect("saved config reloads");

    // Assert
    assert!(std::fs::read_to_string(&path).unwrap().contains("parity = \"0xc8\""));
    assert_eq!(reloaded.config().serial.parity, Parity(200));
}

#[test]
#[serial]
fn test_lowercase_parity_code_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[serial]\nparity = \"e\"\n");

    let config = ConfigLoader::load_from(&path).unwrap().into_config();

    assert_eq!(config.serial.parity, Parity::EVEN);
}

#[test]
#[serial]
fn test_save_without_path_fails() {
    let loader = ConfigLoader::with_defaults().unwrap();

    assert!(matches!(loader.save(), Err(ConfigError::NoSavePath)));
}

#[test]
#[serial]
fn test_config_feeds_factory() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[serial]\nparity = \"mark\"\nstop_bits = 2\n");
    let config = ConfigLoader::load_from(&path).unwrap().into_config();

    let factory =
        SerialPortFactory::with_driver("dev", &config.serial.to_port_config(), MockDriver::new())
            .unwrap();

    assert_eq!(factory.config().parity, DriverParity::Mark);
    assert_eq!(factory.config().stop_bits, DriverStopBits::Two);
}

#[test]
#[serial]
fn test_unknown_parity_in_config_fails_translation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[serial]\nparity = \"X\"\n");
    let config = ConfigLoader::load_from(&path).unwrap().into_config();

    let err =
        SerialPortFactory::with_driver("dev", &config.serial.to_port_config(), MockDriver::new())
            .unwrap_err();

    assert!(err.to_string().contains("failed to translate parity"));
}
