use serde::{Deserialize, Serialize};

use crate::veml6070::{AckThreshold, CMD_ACK, CMD_RESERVED, IntegrationTime};

/// Settings written to the VEML6070 command register.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub integration_time: IntegrationTime,
    /// Assert the ACK line when the reading moves past `ack_threshold`
    pub ack: bool,
    pub ack_threshold: AckThreshold,
}

impl Config {
    pub const fn new(integration_time: IntegrationTime, ack: bool) -> Self {
        Self {
            integration_time,
            ack,
            ack_threshold: AckThreshold::Steps102,
        }
    }

    /// Command byte for this configuration with the device running (SD = 0).
    pub fn command_byte(&self) -> u8 {
        let ack = if self.ack { CMD_ACK } else { 0 };
        ack | self.ack_threshold.to_register() | self.integration_time.to_register() | CMD_RESERVED
    }
}
