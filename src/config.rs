//! Serial port configuration
//!
//! The ESP8266 AT firmware talks 115200 baud 8N1 out of the box. The pin pair is a board detail,
//! the numbers are passed unchanged to [Serial::configure](crate::transport::Serial::configure).

/// Baud rate of the AT firmware after a factory reset
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Receive buffer size requested from the transport
pub const DEFAULT_RX_BUFFER_SIZE: usize = 256;

/// Default transmit pin
pub const DEFAULT_TX_PIN: u8 = 0;

/// Default receive pin
pub const DEFAULT_RX_PIN: u8 = 1;

/// Configuration of the UART connected to the ESP8266
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PortConfig {
    /// Pin used for transmitting to the module
    pub tx_pin: u8,

    /// Pin used for receiving from the module
    pub rx_pin: u8,

    /// UART baud rate
    pub baud_rate: u32,

    /// Size of the receive buffer in bytes
    pub rx_buffer_size: usize,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TX_PIN, DEFAULT_RX_PIN)
    }
}

impl PortConfig {
    /// Configuration for the given pin pair with default baud rate and buffer size
    pub fn new(tx_pin: u8, rx_pin: u8) -> Self {
        Self {
            tx_pin,
            rx_pin,
            baud_rate: DEFAULT_BAUD_RATE,
            rx_buffer_size: DEFAULT_RX_BUFFER_SIZE,
        }
    }

    /// Overrides the baud rate, e.g. after the module was switched by `AT+UART`
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_rx_buffer_size(mut self, rx_buffer_size: usize) -> Self {
        self.rx_buffer_size = rx_buffer_size;
        self
    }

    /// Same configuration with another pin pair
    pub(crate) fn with_pins(mut self, tx_pin: u8, rx_pin: u8) -> Self {
        self.tx_pin = tx_pin;
        self.rx_pin = rx_pin;
        self
    }
}
