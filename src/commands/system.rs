//! Basic system commands
use super::NoResponse;
use atat::atat_derive::AtatCmd;

/// Restarts the module
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+RST", NoResponse, termination = "\r\n")]
pub struct RestartCommand;

/// Restores the factory settings, the module restarts afterwards
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+RESTORE", NoResponse, termination = "\r\n")]
pub struct RestoreCommand;

/// Queries the AT and SDK version
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+GMR", NoResponse, termination = "\r\n")]
pub struct VersionQuery;

/// Queries the remaining heap size
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+SYSRAM?", NoResponse, termination = "\r\n")]
pub struct RamQuery;

#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+SYSFLASH?", NoResponse, termination = "\r\n")]
pub struct FlashQuery;

/// Upgrades the firmware through the network
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIUPDATE", NoResponse, termination = "\r\n")]
pub struct FirmwareUpdateCommand;

/// Configures system prompt messages
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+SYSMSG", NoResponse, termination = "\r\n")]
pub struct SystemMessageCommand {
    #[at_arg(position = 0)]
    level: u8,
}

impl SystemMessageCommand {
    pub fn new(level: u8) -> Self {
        Self { level }
    }
}
