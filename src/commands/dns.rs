//! DNS and ping
use super::{bounded, formatted, ArgumentError, NoResponse};
use atat::atat_derive::AtatCmd;
use core::net::IpAddr;
use heapless::String;

/// Queries the configured DNS servers
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CDNSCFG?", NoResponse, termination = "\r\n")]
pub struct DnsConfigQuery;

/// Sets primary and secondary DNS server
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CDNSCFG", NoResponse, termination = "\r\n")]
pub struct DnsConfigCommand {
    #[at_arg(position = 0)]
    primary: String<39>,

    #[at_arg(position = 1)]
    secondary: String<39>,
}

impl DnsConfigCommand {
    pub fn new(primary: &str, secondary: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            primary: bounded(primary)?,
            secondary: bounded(secondary)?,
        })
    }

    pub fn from_addrs(primary: IpAddr, secondary: IpAddr) -> Result<Self, ArgumentError> {
        Ok(Self {
            primary: formatted(primary)?,
            secondary: formatted(secondary)?,
        })
    }
}

/// Pings the given host
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+PING", NoResponse, termination = "\r\n")]
pub struct PingCommand {
    /// IP address or domain name
    #[at_arg(position = 0)]
    host: String<64>,
}

impl PingCommand {
    pub fn new(host: &str) -> Result<Self, ArgumentError> {
        Ok(Self { host: bounded(host)? })
    }
}
