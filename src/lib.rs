//! # ESP8266 AT command client
//!
//! Sends AT commands to an ESP8266 Wi-Fi module over a serial UART and reads back raw
//! responses. The crate does not track any module state and does not parse replies.
//!
//! * [commands]: one typed struct per AT command, serialized by [atat]
//! * [adapter]: blocking client based on [embedded-io](embedded_io) and [fugit-timer](fugit_timer)
//! * [asynch]: async client based on [embedded-io-async](embedded_io_async) and [embassy-time](embassy_time)
#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate alloc;

pub mod adapter;
pub mod asynch;
pub mod commands;
pub mod config;
pub(crate) mod operations;
pub mod response;
pub mod transport;

#[cfg(feature = "examples")]
pub mod example;

#[cfg(test)]
mod tests;
