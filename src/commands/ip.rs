//! Local address and DHCP commands
use super::{bounded, formatted, ArgumentError, NoResponse};
use atat::atat_derive::AtatCmd;
use core::net::Ipv4Addr;
use heapless::String;

/// Queries the local IP and MAC addresses
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIFSR", NoResponse, termination = "\r\n")]
pub struct ObtainLocalAddressCommand;

/// Queries the station IP configuration
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSTA?", NoResponse, termination = "\r\n")]
pub struct StationIpQuery;

/// Assigns a static station IP
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSTA", NoResponse, termination = "\r\n")]
pub struct StaticIpCommand {
    #[at_arg(position = 0)]
    ip: String<39>,

    #[at_arg(position = 1)]
    gateway: String<39>,

    #[at_arg(position = 2)]
    netmask: String<39>,
}

impl StaticIpCommand {
    pub fn new(ip: &str, gateway: &str, netmask: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            ip: bounded(ip)?,
            gateway: bounded(gateway)?,
            netmask: bounded(netmask)?,
        })
    }

    pub fn from_addrs(ip: Ipv4Addr, gateway: Ipv4Addr, netmask: Ipv4Addr) -> Result<Self, ArgumentError> {
        Ok(Self {
            ip: formatted(ip)?,
            gateway: formatted(gateway)?,
            netmask: formatted(netmask)?,
        })
    }
}

/// Queries the DHCP state
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWDHCP?", NoResponse, termination = "\r\n")]
pub struct DhcpQuery;

/// Enables/Disables DHCP
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWDHCP", NoResponse, termination = "\r\n")]
pub struct DhcpCommand {
    /// 0: SoftAP, 1: Station, 2: both
    #[at_arg(position = 0)]
    mode: u8,

    /// 0: disable, 1: enable
    #[at_arg(position = 1)]
    enabled: u8,
}

impl DhcpCommand {
    pub fn new(mode: u8, enabled: u8) -> Self {
        Self { mode, enabled }
    }
}
