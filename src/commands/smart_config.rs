//! SmartConfig provisioning
use super::NoResponse;
use atat::atat_derive::AtatCmd;

/// Starts SmartConfig
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+SMARTSTART", NoResponse, termination = "\r\n")]
pub struct SmartConfigStartCommand;

/// Stops SmartConfig. Must be called after provisioning, regardless of the result.
#[derive(Clone, Debug, AtatCmd)]
#[at_cmd("+SMARTSTOP", NoResponse, termination = "\r\n")]
pub struct SmartConfigStopCommand;
