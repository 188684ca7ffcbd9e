//! Vishay VEML6070 UV sensor: register map, command encoding and driver errors.
//!
//! The VEML6070 does not have register addresses in the usual sense. Each
//! function of the chip answers on its own 7-bit I2C address: the command
//! register is written at [`ADDR_CMD`], the two halves of the UV reading are
//! read from [`ADDR_DATA_LSB`] and [`ADDR_DATA_MSB`], and a pending ACK alert is
//! cleared by reading the SMBus Alert Response Address [`ADDR_ARA`].

pub mod blocking;

#[cfg(feature = "async")]
pub mod asynch;

use serde::{Deserialize, Serialize};

// =============================================================================
// I2C Addresses
// =============================================================================

/// Alert Response Address, read to clear the ACK state
pub const ADDR_ARA: u8 = 0x18 >> 1;
/// Command register, written; a read on the same address returns the data LSB
pub const ADDR_CMD: u8 = 0x70 >> 1;
/// UV data, least significant byte (read on the command address)
pub const ADDR_DATA_LSB: u8 = 0x71 >> 1;
/// UV data, most significant byte
pub const ADDR_DATA_MSB: u8 = 0x73 >> 1;

// =============================================================================
// Command Register Bits
// =============================================================================

/// ACK enable
pub const CMD_ACK: u8 = 1 << 5;
/// ACK threshold select
pub const CMD_ACK_THD: u8 = 1 << 4;
/// Integration time field offset (bits 3:2)
pub const CMD_IT_SHIFT: u8 = 2;
/// Reserved bit, must always be written as 1
pub const CMD_RESERVED: u8 = 1 << 1;
/// Shutdown
pub const CMD_SD: u8 = 1 << 0;

/// Command byte that puts the device into shutdown
pub const CMD_SHUTDOWN: u8 = CMD_RESERVED | CMD_SD;

// =============================================================================
// Enums
// =============================================================================

/// Integration time, expressed in multiples of the base period `T`.
///
/// `T` is set by the R_SET resistor on the board (125 ms with the usual 270 kΩ).
/// Longer integration gives a higher count for the same irradiance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum IntegrationTime {
    /// 1/2 T
    Half = 0b00,
    /// 1 T
    #[default]
    One = 0b01,
    /// 2 T
    Two = 0b10,
    /// 4 T
    Four = 0b11,
}

impl IntegrationTime {
    /// Every supported setting, shortest first
    pub const ALL: [IntegrationTime; 4] = [Self::Half, Self::One, Self::Two, Self::Four];

    /// Convert from the two-bit IT field
    pub fn from_register(val: u8) -> Option<Self> {
        match val {
            0b00 => Some(Self::Half),
            0b01 => Some(Self::One),
            0b10 => Some(Self::Two),
            0b11 => Some(Self::Four),
            _ => None,
        }
    }

    /// Convert to the IT field, already shifted into place
    pub fn to_register(self) -> u8 {
        (self as u8) << CMD_IT_SHIFT
    }
}

/// Change in UV counts that triggers the ACK alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum AckThreshold {
    /// 102 steps
    #[default]
    Steps102 = 0,
    /// 145 steps
    Steps145 = 1,
}

impl AckThreshold {
    /// Convert from the ACK_THD bit
    pub fn from_register(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Steps102),
            1 => Some(Self::Steps145),
            _ => None,
        }
    }

    /// Convert to the ACK_THD bit, already shifted into place
    pub fn to_register(self) -> u8 {
        match self {
            Self::Steps102 => 0,
            Self::Steps145 => CMD_ACK_THD,
        }
    }

    /// Number of counts the reading has to move before ACK fires
    pub fn steps(self) -> u16 {
        match self {
            Self::Steps102 => 102,
            Self::Steps145 => 145,
        }
    }
}

// =============================================================================
// Driver Error Type
// =============================================================================

/// Errors that can occur during VEML6070 operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::I2c(e)
    }
}

/// Combine the two data register bytes into the raw UV count
pub(crate) fn combine(msb: u8, lsb: u8) -> u16 {
    ((msb as u16) << 8) | (lsb as u16)
}
