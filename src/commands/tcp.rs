//! TCP/UDP connection commands
use super::{bounded, formatted, ArgumentError, NoResponse};
use atat::atat_derive::AtatCmd;
use core::net::SocketAddrV4;
use heapless::String;

/// Queries the multiple connections mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPMUX?", NoResponse, termination = "\r\n")]
pub struct MultipleConnectionsQuery;

/// Enables/Disables multiple connections
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPMUX", NoResponse, termination = "\r\n")]
pub struct SetMultipleConnectionsCommand {
    /// 0: single connection, 1: multiple connections
    #[at_arg(position = 0)]
    mode: u8,
}

impl SetMultipleConnectionsCommand {
    pub fn new(mode: u8) -> Self {
        Self { mode }
    }

    /// Enables multiple connections
    pub fn multiple() -> Self {
        Self { mode: 1 }
    }
}

/// Establishes a TCP connection or UDP transmission in single connection mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSTART", NoResponse, termination = "\r\n")]
pub struct ConnectCommand {
    /// Connection type, e.g. TCP, UDP, SSL
    #[at_arg(position = 0)]
    connection_type: String<5>,

    /// Remote IP address or domain name
    #[at_arg(position = 1)]
    remote_host: String<64>,

    #[at_arg(position = 2)]
    port: u16,
}

impl ConnectCommand {
    pub fn tcp(remote_host: &str, port: u16) -> Result<Self, ArgumentError> {
        Self::new("TCP", remote_host, port)
    }

    pub fn udp(remote_host: &str, port: u16) -> Result<Self, ArgumentError> {
        Self::new("UDP", remote_host, port)
    }

    /// Establishes a IPv4 TCP connection
    pub fn tcp_v4(remote: SocketAddrV4) -> Result<Self, ArgumentError> {
        Ok(Self {
            connection_type: bounded("TCP")?,
            remote_host: formatted(remote.ip())?,
            port: remote.port(),
        })
    }

    pub fn udp_v4(remote: SocketAddrV4) -> Result<Self, ArgumentError> {
        Ok(Self {
            connection_type: bounded("UDP")?,
            remote_host: formatted(remote.ip())?,
            port: remote.port(),
        })
    }

    fn new(connection_type: &str, remote_host: &str, port: u16) -> Result<Self, ArgumentError> {
        Ok(Self {
            connection_type: bounded(connection_type)?,
            remote_host: bounded(remote_host)?,
            port,
        })
    }
}

/// Establishes a connection on the given link in multiple connections mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSTART", NoResponse, termination = "\r\n")]
pub struct LinkConnectCommand {
    /// Socket ID
    #[at_arg(position = 0)]
    link_id: u8,

    /// Connection type, e.g. TCP, UDP, SSL
    #[at_arg(position = 1)]
    connection_type: String<5>,

    /// Remote IP address or domain name
    #[at_arg(position = 2)]
    remote_host: String<64>,

    #[at_arg(position = 3)]
    port: u16,
}

impl LinkConnectCommand {
    pub fn new(link_id: u8, connection_type: &str, remote_host: &str, port: u16) -> Result<Self, ArgumentError> {
        Ok(Self {
            link_id,
            connection_type: bounded(connection_type)?,
            remote_host: bounded(remote_host)?,
            port,
        })
    }
}

/// Announces the length of data to send in single connection mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSEND", NoResponse, termination = "\r\n")]
pub struct TransmissionPrepareCommand {
    #[at_arg(position = 0)]
    length: u16,
}

impl TransmissionPrepareCommand {
    pub fn new(length: u16) -> Self {
        Self { length }
    }
}

/// Announces the length of data to send on the given link
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSEND", NoResponse, termination = "\r\n")]
pub struct LinkTransmissionPrepareCommand {
    /// Socket ID
    #[at_arg(position = 0)]
    link_id: u8,

    /// Number of bytes to send
    #[at_arg(position = 1)]
    length: u16,
}

impl LinkTransmissionPrepareCommand {
    pub fn new(link_id: u8, length: u16) -> Self {
        Self { link_id, length }
    }
}

/// Closes the connection in single connection mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPCLOSE", NoResponse, termination = "\r\n")]
pub struct CloseCommand;

/// Closes the connection of the given link
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPCLOSE", NoResponse, termination = "\r\n")]
pub struct CloseLinkCommand {
    /// Socket ID, 5 closes all links
    #[at_arg(position = 0)]
    link_id: u8,
}

impl CloseLinkCommand {
    pub fn new(link_id: u8) -> Self {
        Self { link_id }
    }
}

/// Queries the connection status
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSTATUS", NoResponse, termination = "\r\n")]
pub struct ConnectionStatusCommand;

/// Sets the socket receiving mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPRECVMODE", NoResponse, termination = "\r\n")]
pub struct SetSocketReceivingModeCommand {
    /// 0: active mode => ESP-AT will send all the received socket data instantly to the host MCU
    /// 1: passive mode => ESP-AT will keep the received socket data in an internal buffer
    #[at_arg(position = 0)]
    mode: u8,
}

impl SetSocketReceivingModeCommand {
    pub fn new(mode: u8) -> Self {
        Self { mode }
    }
}

/// Enables/Disables the transparent transmission mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPMODE", NoResponse, termination = "\r\n")]
pub struct TransparentModeCommand {
    /// 0: normal mode, 1: transparent (UART-WIFI passthrough) mode
    #[at_arg(position = 0)]
    mode: u8,
}

impl TransparentModeCommand {
    pub fn new(mode: u8) -> Self {
        Self { mode }
    }
}
