//! Typed AT commands of the ESP8266 firmware
//!
//! Every command derives [AtatCmd](atat::AtatCmd) and serializes to the exact wire text, e.g.
//! [WifiModeCommand::new(2)](wifi::WifiModeCommand) results in `AT+CWMODE=2\r\n`. Integer
//! arguments are written in decimal, string arguments are quoted. Device responses are not
//! interpreted, so all commands share [NoResponse].
//!
//! String arguments are bounded by the capacity of the corresponding field. Constructors return
//! [ArgumentError::TooLong] instead of truncating.
pub mod dns;
pub mod ip;
pub mod power;
pub mod server;
pub mod smart_config;
pub mod system;
pub mod tcp;
pub mod uart;
pub mod wifi;

use atat::atat_derive::AtatResp;
use heapless::String;

/// Placeholder response, replies of the module are read raw
#[derive(Clone, AtatResp)]
pub struct NoResponse;

/// Invalid command argument
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// String argument exceeds the capacity of the command field
    TooLong,
}

/// Copies the argument into a bounded string
pub(crate) fn bounded<const N: usize>(value: &str) -> Result<String<N>, ArgumentError> {
    String::try_from(value).map_err(|_| ArgumentError::TooLong)
}

/// Formats the value into a bounded string
pub(crate) fn formatted<const N: usize>(value: impl core::fmt::Display) -> Result<String<N>, ArgumentError> {
    use core::fmt::Write;

    let mut buffer = String::new();
    write!(buffer, "{}", value).map_err(|_| ArgumentError::TooLong)?;
    Ok(buffer)
}
