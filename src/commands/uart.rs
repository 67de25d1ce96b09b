//! UART settings of the module
use super::NoResponse;
use atat::atat_derive::AtatCmd;

/// Changes the UART configuration of the module (`AT+UART`)
///
/// Takes effect immediately. The host port must be reconfigured accordingly,
/// s. [PortConfig::with_baud_rate](crate::config::PortConfig::with_baud_rate).
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+UART", NoResponse, termination = "\r\n")]
pub struct UartConfigCommand {
    /// Baud rate, e.g. 115200
    #[at_arg(position = 0)]
    baud_rate: u32,

    /// 5-8 data bits
    #[at_arg(position = 1)]
    data_bits: u8,

    /// 1: 1 bit, 2: 1.5 bits, 3: 2 bits
    #[at_arg(position = 2)]
    stop_bits: u8,

    /// 0: none, 1: odd, 2: even
    #[at_arg(position = 3)]
    parity: u8,

    /// 0: disabled, 1: RTS, 2: CTS, 3: RTS and CTS
    #[at_arg(position = 4)]
    flow_control: u8,
}

impl UartConfigCommand {
    pub fn new(baud_rate: u32, data_bits: u8, stop_bits: u8, parity: u8, flow_control: u8) -> Self {
        Self {
            baud_rate,
            data_bits,
            stop_bits,
            parity,
            flow_control,
        }
    }

    /// 8N1 without flow control
    pub fn default_framing(baud_rate: u32) -> Self {
        Self::new(baud_rate, 8, 1, 0, 0)
    }
}

/// Queries the current UART configuration
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+UART?", NoResponse, termination = "\r\n")]
pub struct UartConfigQuery;
