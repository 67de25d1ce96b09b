//! # Blocking command adapter
//!
//! Writes AT commands to the serial port and reads back raw responses. Replies of the module
//! are never interpreted, [send_and_wait()](Adapter::send_and_wait) just pauses and returns what
//! was received until then.
//!
//! ## Example
//!
//! ````
//! # use esp8266_at::adapter::Adapter;
//! # use esp8266_at::config::PortConfig;
//! # use esp8266_at::example::{ExampleSerial, ExampleTimer};
//! #
//! let serial = ExampleSerial::default();
//! let mut adapter: Adapter<_, _, 1_000_000> =
//!     Adapter::new(serial, ExampleTimer::default(), PortConfig::default()).unwrap();
//!
//! adapter.set_mode(1).unwrap();
//! adapter.connect_ap("test_wifi", "secret").unwrap();
//!
//! // Dropping the replies to the previous commands
//! adapter.read_response().unwrap();
//!
//! let response = adapter.send_and_wait("AT+CIFSR", 500).unwrap();
//! assert_eq!(Some("+CIFSR:STAIP,\"10.0.0.181\""), response.lines().next());
//! ````
use crate::commands::ArgumentError;
use crate::config::PortConfig;
use crate::operations::command_operations;
use crate::response::Response;
use crate::transport::Serial;
use atat::AtatCmd;
use embedded_io::ErrorKind;
use fugit::TimerDurationU32;
use fugit_timer::Timer;

/// AT command line terminator
pub(crate) const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Central client for the ESP8266
///
/// TX_SIZE: Buffer size in bytes for serializing a single command. Commands which may exceed it are
/// rejected with [Error::CommandTooLong].
///
/// RX_SIZE: Max. bytes returned by a single read.
pub struct Adapter<
    S: Serial,
    T: Timer<TIMER_HZ>,
    const TIMER_HZ: u32,
    const TX_SIZE: usize = 256,
    const RX_SIZE: usize = 256,
> {
    /// UART connected to the module
    pub(crate) serial: S,

    /// Timer used for pausing before reads
    pub(crate) timer: T,

    /// Configuration applied to the serial port
    config: PortConfig,
}

/// Errors of the host side. Device replies never result in an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Error<E> {
    /// Serial port could not be configured
    Configure(E),

    /// Writing to the serial port failed
    Write(E),

    /// Reading from the serial port failed
    Read(E),

    /// Upstream timer error
    TimerError,

    /// Serialized command may exceed the TX buffer
    CommandTooLong,

    /// Invalid command argument
    Argument(ArgumentError),
}

impl<E> From<ArgumentError> for Error<E> {
    fn from(error: ArgumentError) -> Self {
        Error::Argument(error)
    }
}

impl<E: embedded_io::Error> embedded_io::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Configure(error) | Error::Write(error) | Error::Read(error) => error.kind(),
            Error::TimerError => ErrorKind::TimedOut,
            Error::CommandTooLong | Error::Argument(_) => ErrorKind::InvalidInput,
        }
    }
}

impl<S: Serial, T: Timer<TIMER_HZ>, const TIMER_HZ: u32, const TX_SIZE: usize, const RX_SIZE: usize>
    Adapter<S, T, TIMER_HZ, TX_SIZE, RX_SIZE>
{
    /// Creates a new adapter and configures the serial port once
    pub fn new(mut serial: S, timer: T, config: PortConfig) -> Result<Self, Error<S::Error>> {
        serial.configure(&config).map_err(Error::Configure)?;

        #[cfg(feature = "log")]
        log::debug!(
            "Serial configured: TX={} RX={} baud={} rx_buffer={}",
            config.tx_pin,
            config.rx_pin,
            config.baud_rate,
            config.rx_buffer_size
        );

        Ok(Self { serial, timer, config })
    }

    /// Switches to another pin pair. Baud rate and buffer size are kept.
    pub fn set_serial_pins(&mut self, tx_pin: u8, rx_pin: u8) -> Result<(), Error<S::Error>> {
        let config = self.config.with_pins(tx_pin, rx_pin);
        self.serial.configure(&config).map_err(Error::Configure)?;
        self.config = config;
        Ok(())
    }

    /// Currently applied port configuration
    pub fn config(&self) -> &PortConfig {
        &self.config
    }

    /// Releases serial port and timer
    pub fn release(self) -> (S, T) {
        (self.serial, self.timer)
    }

    /// Serializes and writes a single command
    pub fn send_command<Cmd: AtatCmd>(&mut self, command: &Cmd) -> Result<(), Error<S::Error>> {
        if Cmd::MAX_LEN > TX_SIZE {
            return Err(Error::CommandTooLong);
        }

        let mut buffer = [0x0; TX_SIZE];
        let length = command.write(&mut buffer);
        self.write(&buffer[..length])
    }

    /// Writes the given command text as is, terminated by CRLF
    pub fn send_at(&mut self, command: &str) -> Result<(), Error<S::Error>> {
        self.write_line(command.as_bytes())
    }

    /// Writes the command text, pauses for `delay_ms` and returns the data received until then
    pub fn send_and_wait(&mut self, command: &str, delay_ms: u32) -> Result<Response<RX_SIZE>, Error<S::Error>> {
        self.send_at(command)?;
        self.pause_ms(delay_ms)?;
        self.read_response()
    }

    /// Typed variant of [send_and_wait()](Self::send_and_wait)
    pub fn send_command_and_wait<Cmd: AtatCmd>(
        &mut self,
        command: &Cmd,
        delay_ms: u32,
    ) -> Result<Response<RX_SIZE>, Error<S::Error>> {
        self.send_command(command)?;
        self.pause_ms(delay_ms)?;
        self.read_response()
    }

    /// Returns the data currently buffered by the serial port. Does not block for new data.
    pub fn read_response(&mut self) -> Result<Response<RX_SIZE>, Error<S::Error>> {
        let mut response = Response::new();

        while !response.is_full() && self.serial.read_ready().map_err(Error::Read)? {
            let used = response.len();
            let count = self.serial.read(response.spare_capacity()).map_err(Error::Read)?;
            response.commit(used, count);

            if count == 0 {
                break;
            }
        }

        #[cfg(feature = "log")]
        log::trace!("Received {} bytes: {:?}", response.len(), response.as_str());

        Ok(response)
    }

    /// Blocks for the given duration. Durations exceeding the timer range are split into several runs.
    fn pause_ms(&mut self, duration: u32) -> Result<(), Error<S::Error>> {
        let mut remaining = u64::from(duration) * u64::from(TIMER_HZ) / 1_000;

        loop {
            let ticks = remaining.min(u64::from(u32::MAX)) as u32;
            self.timer
                .start(TimerDurationU32::from_ticks(ticks))
                .map_err(|_| Error::TimerError)?;
            nb::block!(self.timer.wait()).map_err(|_| Error::TimerError)?;

            remaining -= u64::from(ticks);
            if remaining == 0 {
                return Ok(());
            }
        }
    }

    fn write_line(&mut self, line: &[u8]) -> Result<(), Error<S::Error>> {
        self.serial.write_all(line).map_err(Error::Write)?;
        self.serial.write_all(LINE_TERMINATOR).map_err(Error::Write)?;
        self.serial.flush().map_err(Error::Write)?;

        #[cfg(feature = "log")]
        log::debug!("Sent: {:?}", core::str::from_utf8(line));

        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error<S::Error>> {
        self.serial.write_all(data).map_err(Error::Write)?;
        self.serial.flush().map_err(Error::Write)?;

        #[cfg(feature = "log")]
        log::debug!("Sent: {:?}", core::str::from_utf8(data));

        Ok(())
    }

    command_operations!();
}
