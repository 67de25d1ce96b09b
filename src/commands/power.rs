//! Sleep mode and RF power
use super::NoResponse;
use atat::atat_derive::AtatCmd;

/// Sets the sleep mode
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+SLEEP", NoResponse, termination = "\r\n")]
pub struct SleepModeCommand {
    /// 0: disabled, 1: light sleep, 2: modem sleep
    #[at_arg(position = 0)]
    mode: u8,
}

impl SleepModeCommand {
    pub fn new(mode: u8) -> Self {
        Self { mode }
    }
}

#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+RFPOWER?", NoResponse, termination = "\r\n")]
pub struct RfPowerQuery;

/// Sets the maximum RF TX power
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+RFPOWER", NoResponse, termination = "\r\n")]
pub struct RfPowerCommand {
    /// 0-82, unit 0.25 dBm
    #[at_arg(position = 0)]
    level: u8,
}

impl RfPowerCommand {
    pub fn new(level: u8) -> Self {
        Self { level }
    }
}
