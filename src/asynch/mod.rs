//! Async variant of the [blocking adapter](crate::adapter)
//!
//! Uses [embedded-io-async](embedded_io_async) for the serial port and
//! [embassy-time](embassy_time) for pausing before reads.
mod adapter;

pub use adapter::Adapter;

use crate::config::PortConfig;
use embedded_io::ReadReady;
use embedded_io_async::{Read, Write};

/// Async UART connected to the ESP8266
pub trait Serial: Read + Write + ReadReady {
    /// (Re)configures the UART. Gets called once by [Adapter::new] and again on every pin change.
    fn configure(&mut self, config: &PortConfig) -> Result<(), Self::Error>;
}
