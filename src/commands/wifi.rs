//! Station and soft access point commands
use super::{bounded, ArgumentError, NoResponse};
use atat::atat_derive::AtatCmd;
use heapless::String;

/// Queries the WIFI mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWMODE?", NoResponse, termination = "\r\n")]
pub struct WifiModeQuery;

/// Sets the WIFI mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWMODE", NoResponse, termination = "\r\n")]
pub struct WifiModeCommand {
    /// WIFI mode:
    ///     1: Station mode.
    ///     2: SoftAP mode.
    ///     3: SoftAP+Station mode.
    #[at_arg(position = 0)]
    mode: u8,
}

impl WifiModeCommand {
    pub fn new(mode: u8) -> Self {
        Self { mode }
    }

    pub fn station_mode() -> Self {
        Self { mode: 1 }
    }

    pub fn soft_ap_mode() -> Self {
        Self { mode: 2 }
    }
}

/// Queries the access point the station is connected to
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWJAP?", NoResponse, termination = "\r\n")]
pub struct AccessPointQuery;

/// Connects to an access point without storing the credentials in flash
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWJAP_CUR", NoResponse, termination = "\r\n")]
pub struct AccessPointConnectCommand {
    /// The SSID of the target access point
    #[at_arg(position = 0)]
    ssid: String<32>,

    /// The password/key of the target access point
    #[at_arg(position = 1)]
    password: String<64>,
}

impl AccessPointConnectCommand {
    pub fn new(ssid: &str, password: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            ssid: bounded(ssid)?,
            password: bounded(password)?,
        })
    }
}

/// Disconnects from the current access point
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWQAP", NoResponse, termination = "\r\n")]
pub struct AccessPointDisconnectCommand;

/// Lists the available access points
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWLAP", NoResponse, termination = "\r\n")]
pub struct AccessPointScanCommand;

/// Configures the soft access point of the module
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWSAP", NoResponse, termination = "\r\n")]
pub struct SoftApConfigCommand {
    #[at_arg(position = 0)]
    ssid: String<32>,

    #[at_arg(position = 1)]
    password: String<64>,

    /// WIFI channel
    #[at_arg(position = 2)]
    channel: u8,

    /// 0: open, 2: WPA_PSK, 3: WPA2_PSK, 4: WPA_WPA2_PSK
    #[at_arg(position = 3)]
    encryption: u8,
}

impl SoftApConfigCommand {
    pub fn new(ssid: &str, password: &str, channel: u8, encryption: u8) -> Result<Self, ArgumentError> {
        Ok(Self {
            ssid: bounded(ssid)?,
            password: bounded(password)?,
            channel,
            encryption,
        })
    }
}

/// Queries the soft access point configuration
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWSAP?", NoResponse, termination = "\r\n")]
pub struct SoftApConfigQuery;

/// Lists the stations connected to the soft access point
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CWLIF", NoResponse, termination = "\r\n")]
pub struct ConnectedStationsCommand;
