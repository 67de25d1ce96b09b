use crate::adapter::{Error, LINE_TERMINATOR};
use crate::asynch::Serial;
use crate::config::PortConfig;
use crate::operations::command_operations;
use crate::response::Response;
use atat::AtatCmd;
use embassy_time::{Duration, Timer};

/// Async client for the ESP8266
///
/// ````
/// # use embassy_futures::block_on;
/// # use esp8266_at::asynch::Adapter;
/// # use esp8266_at::config::PortConfig;
/// # use esp8266_at::example::ExampleSerial;
/// #
/// block_on(async {
///     let mut adapter: Adapter<_> = Adapter::new(ExampleSerial::default(), PortConfig::default()).unwrap();
///
///     adapter.start_tcp("10.0.0.1", 21).await.unwrap();
///     let response = adapter.send_and_wait("AT+CIPSTATUS", 10).await.unwrap();
///     assert!(response.lines().any(|line| line == "STATUS:3"));
/// });
/// ````
pub struct Adapter<S: Serial, const TX_SIZE: usize = 256, const RX_SIZE: usize = 256> {
    /// UART connected to the module
    pub(crate) serial: S,

    /// Configuration applied to the serial port
    config: PortConfig,
}

impl<S: Serial, const TX_SIZE: usize, const RX_SIZE: usize> Adapter<S, TX_SIZE, RX_SIZE> {
    /// Creates a new adapter and configures the serial port once
    pub fn new(mut serial: S, config: PortConfig) -> Result<Self, Error<S::Error>> {
        serial.configure(&config).map_err(Error::Configure)?;
        Ok(Self { serial, config })
    }

    /// Switches to another pin pair. Baud rate and buffer size are kept.
    pub fn set_serial_pins(&mut self, tx_pin: u8, rx_pin: u8) -> Result<(), Error<S::Error>> {
        let config = self.config.with_pins(tx_pin, rx_pin);
        self.serial.configure(&config).map_err(Error::Configure)?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &PortConfig {
        &self.config
    }

    pub fn release(self) -> S {
        self.serial
    }

    /// Serializes and writes a single command
    pub async fn send_command<Cmd: AtatCmd>(&mut self, command: &Cmd) -> Result<(), Error<S::Error>> {
        if Cmd::MAX_LEN > TX_SIZE {
            return Err(Error::CommandTooLong);
        }

        let mut buffer = [0x0; TX_SIZE];
        let length = command.write(&mut buffer);
        self.serial.write_all(&buffer[..length]).await.map_err(Error::Write)?;
        self.serial.flush().await.map_err(Error::Write)?;

        #[cfg(feature = "log")]
        log::debug!("Sent: {:?}", core::str::from_utf8(&buffer[..length]));

        Ok(())
    }

    /// Writes the given command text as is, terminated by CRLF
    pub async fn send_at(&mut self, command: &str) -> Result<(), Error<S::Error>> {
        self.serial.write_all(command.as_bytes()).await.map_err(Error::Write)?;
        self.serial.write_all(LINE_TERMINATOR).await.map_err(Error::Write)?;
        self.serial.flush().await.map_err(Error::Write)?;

        #[cfg(feature = "log")]
        log::debug!("Sent: {:?}", command);

        Ok(())
    }

    /// Writes the command text, pauses for `delay_ms` and returns the data received until then
    pub async fn send_and_wait(&mut self, command: &str, delay_ms: u32) -> Result<Response<RX_SIZE>, Error<S::Error>> {
        self.send_at(command).await?;
        Timer::after(Duration::from_millis(u64::from(delay_ms))).await;
        self.read_response().await
    }

    /// Typed variant of [send_and_wait()](Self::send_and_wait)
    pub async fn send_command_and_wait<Cmd: AtatCmd>(
        &mut self,
        command: &Cmd,
        delay_ms: u32,
    ) -> Result<Response<RX_SIZE>, Error<S::Error>> {
        self.send_command(command).await?;
        Timer::after(Duration::from_millis(u64::from(delay_ms))).await;
        self.read_response().await
    }

    /// Returns the data currently buffered by the serial port. Does not wait for new data.
    pub async fn read_response(&mut self) -> Result<Response<RX_SIZE>, Error<S::Error>> {
        let mut response = Response::new();

        while !response.is_full() && self.serial.read_ready().map_err(Error::Read)? {
            let used = response.len();
            let count = self.serial.read(response.spare_capacity()).await.map_err(Error::Read)?;
            response.commit(used, count);

            if count == 0 {
                break;
            }
        }

        #[cfg(feature = "log")]
        log::trace!("Received {} bytes: {:?}", response.len(), response.as_str());

        Ok(response)
    }

    command_operations!(async);
}
