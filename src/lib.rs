//! Driver for the Vishay VEML6070 UV index sensor
//!
//! The driver writes the command register once at construction, reads the raw
//! 16-bit UV count from the two data registers on demand, and classifies a
//! count into a [`RiskLevel`] using threshold tables scaled to the configured
//! integration time.
//!
//! It is `#![no_std]` and generic over the `embedded-hal` 1.0 I2C traits, so it
//! runs on microcontrollers and on desktop hosts (see the `read_uv` binary and
//! the tests).
//!
//! ```ignore
//! use veml6070::{IntegrationTime, Veml6070};
//!
//! let mut uv = Veml6070::with_options(i2c, IntegrationTime::One, false)?;
//! let raw = uv.uv_raw()?;
//! let risk = uv.get_index(raw);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "async")]
pub mod async_i2c_bus;
pub mod config;
pub mod risk;
#[cfg(feature = "async")]
pub mod sensors;
pub mod veml6070;

#[cfg(test)]
mod test_bus;

pub use config::Config;
pub use risk::{RiskLevel, get_index};
pub use veml6070::blocking::Veml6070;
pub use veml6070::{AckThreshold, Error, IntegrationTime};

#[cfg(feature = "async")]
pub use veml6070::asynch::Veml6070Async;
