//! TCP server commands
use super::NoResponse;
use atat::atat_derive::AtatCmd;

/// Creates a TCP server. Requires multiple connections mode.
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSERVER", NoResponse, termination = "\r\n")]
pub struct EnableServerCommand {
    #[at_arg(position = 0)]
    mode: u8,

    #[at_arg(position = 1)]
    port: u16,
}

impl EnableServerCommand {
    pub fn new(port: u16) -> Self {
        Self { mode: 1, port }
    }
}

/// Deletes the TCP server
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSERVER", NoResponse, termination = "\r\n")]
pub struct DisableServerCommand {
    #[at_arg(position = 0)]
    mode: u8,
}

impl DisableServerCommand {
    pub fn new() -> Self {
        Self { mode: 0 }
    }
}

impl Default for DisableServerCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets the timeout after which the server closes idle client connections
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+CIPSTO", NoResponse, termination = "\r\n")]
pub struct ServerTimeoutCommand {
    /// Timeout in seconds, 0-7200
    #[at_arg(position = 0)]
    seconds: u16,
}

impl ServerTimeoutCommand {
    pub fn new(seconds: u16) -> Self {
        Self { seconds }
    }
}
