//! Serial transport used for talking to the ESP8266
//!
//! Any UART implementing the [embedded-io](embedded_io) traits can be used. The only addition is
//! [Serial::configure], which applies pin pair, baud rate and receive buffer size.
use crate::config::PortConfig;
use embedded_io::{Read, ReadReady, Write};

/// Blocking UART connected to the ESP8266
pub trait Serial: Read + Write + ReadReady {
    /// (Re)configures the UART. Gets called once by [Adapter::new](crate::adapter::Adapter::new)
    /// and again on every pin change.
    fn configure(&mut self, config: &PortConfig) -> Result<(), Self::Error>;
}
