//! Mock driver and port for testing.
//!
//! `MockDriver` records every open request and hands out in-memory
//! `MockPort`s, so factories can be exercised without hardware.

use super::driver::DriverConfig;
use super::traits::SerialDriver;
use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Driver that never touches the OS.
///
/// # Example
/// ```
/// use serial_factory::port::{MockDriver, SerialPortConfig, SerialPortFactory};
///
/// let driver = MockDriver::new();
/// let factory = SerialPortFactory::with_driver("MOCK0", &SerialPortConfig::default(), &driver)?;
/// let _port = factory.open()?;
///
/// assert_eq!(driver.opened().len(), 1);
/// assert_eq!(driver.opened()[0].name, "MOCK0");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    /// Error kind returned by every open, if set.
    fail_with: Option<ErrorKind>,
    opened: Arc<Mutex<Vec<DriverConfig>>>,
}

impl MockDriver {
    /// A driver whose opens always succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver whose opens always fail with an I/O error of `kind`.
    pub fn failing(kind: ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::default()
        }
    }

    /// Configurations of every open request so far, in order.
    pub fn opened(&self) -> Vec<DriverConfig> {
        lock(&self.opened).clone()
    }
}

impl SerialDriver for MockDriver {
    type Port = MockPort;
    type Error = io::Error;

    fn open(&self, config: &DriverConfig) -> Result<Self::Port, Self::Error> {
        lock(&self.opened).push(config.clone());

        match self.fail_with {
            Some(kind) => Err(io::Error::new(
                kind,
                format!("mock driver refused to open {}", config.name),
            )),
            None => Ok(MockPort::new(config.clone())),
        }
    }
}

/// Inner state of the mock port.
#[derive(Debug, Default)]
struct MockPortState {
    /// Bytes returned by read operations.
    read_queue: VecDeque<u8>,
    /// All bytes written to the port, one entry per write.
    write_log: Vec<Vec<u8>>,
}

/// In-memory port handed out by [`MockDriver`].
///
/// Clones share state, so a test can keep a clone to feed reads and
/// inspect writes while the code under test owns the original.
#[derive(Debug, Clone)]
pub struct MockPort {
    config: DriverConfig,
    state: Arc<Mutex<MockPortState>>,
}

impl MockPort {
    fn new(config: DriverConfig) -> Self {
        Self {
            config,
            state: Arc::default(),
        }
    }

    /// Configuration the port was opened with.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Enqueue bytes to be returned by subsequent reads.
    pub fn enqueue_read(&self, data: &[u8]) {
        lock(&self.state).read_queue.extend(data);
    }

    /// Get a copy of all data written to the port.
    pub fn write_log(&self) -> Vec<Vec<u8>> {
        lock(&self.state).write_log.clone()
    }

    pub fn available_bytes(&self) -> usize {
        lock(&self.state).read_queue.len()
    }
}

impl Read for MockPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let mut state = lock(&self.state);
        if state.read_queue.is_empty() {
            return Err(io::Error::new(ErrorKind::WouldBlock, "No data available"));
        }

        let n = buf.len().min(state.read_queue.len());
        for (slot, byte) in buf.iter_mut().zip(state.read_queue.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for MockPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.state).write_log.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// A poisoned lock only means another test thread panicked mid-update.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::driver::{DriverParity, DriverStopBits};
    use std::time::Duration;

    fn config() -> DriverConfig {
        DriverConfig {
            name: "MOCK0".to_string(),
            baud: 115_200,
            read_timeout: Duration::from_millis(100),
            size: 8,
            parity: DriverParity::None,
            stop_bits: DriverStopBits::One,
        }
    }

    #[test]
    fn test_open_records_config() {
        let driver = MockDriver::new();
        let port = driver.open(&config()).unwrap();

        assert_eq!(port.config(), &config());
        assert_eq!(driver.opened(), vec![config()]);
    }

    #[test]
    fn test_failing_driver() {
        let driver = MockDriver::failing(ErrorKind::NotFound);
        let err = driver.open(&config()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("MOCK0"));
        assert_eq!(driver.opened().len(), 1);
    }

    #[test]
    fn test_enqueue_and_read() {
        let mut port = MockDriver::new().open(&config()).unwrap();
        port.enqueue_read(b"Hello");

        let mut buffer = [0u8; 10];
        let n = port.read(&mut buffer).unwrap();
        assert_eq!(n, 5);
        assert_eq!(&buffer[..n], b"Hello");
    }

    #[test]
    fn test_partial_read() {
        let mut port = MockDriver::new().open(&config()).unwrap();
        port.enqueue_read(b"Hello, World!");

        let mut buffer = [0u8; 5];
        let n = port.read(&mut buffer).unwrap();
        assert_eq!(&buffer[..n], b"Hello");
        assert_eq!(port.available_bytes(), 8);
    }

    #[test]
    fn test_empty_read() {
        let mut port = MockDriver::new().open(&config()).unwrap();
        let mut buffer = [0u8; 10];

        let err = port.read(&mut buffer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WouldBlock);
    }

    #[test]
    fn test_write_logging_is_shared_by_clones() {
        let mut port = MockDriver::new().open(&config()).unwrap();
        let observer = port.clone();

        port.write_all(b"Test1").unwrap();
        port.write_all(b"Test2").unwrap();

        let log = observer.write_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], b"Test1");
        assert_eq!(log[1], b"Test2");
    }
}
