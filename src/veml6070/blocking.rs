use embedded_hal::i2c::I2c;
use log::{debug, info};

use super::{
    ADDR_ARA, ADDR_CMD, ADDR_DATA_LSB, ADDR_DATA_MSB, AckThreshold, CMD_SHUTDOWN, Error,
    IntegrationTime, combine,
};
use crate::config::Config;
use crate::risk::{self, RiskLevel};

/// VEML6070 UV sensor driver over a blocking I2C bus.
///
/// Every transaction goes straight to the bus; nothing is retried and no
/// reading is cached. If the bus is shared, wrap it in a bus-sharing device
/// (for example from `embedded-hal-bus`) that locks per transaction.
pub struct Veml6070<I2C> {
    /// I2C bus the sensor sits on
    i2c: I2C,
    /// Configuration last written to the command register
    config: Config,
}

impl<I2C> Veml6070<I2C>
where
    I2C: I2c,
{
    /// Create a driver with the default configuration (1 T, ACK off).
    pub fn new(i2c: I2C) -> Result<Self, Error<I2C::Error>> {
        Self::with_config(i2c, Config::default())
    }

    /// Create a driver with the given integration time and ACK setting.
    pub fn with_options(
        i2c: I2C,
        integration_time: IntegrationTime,
        ack: bool,
    ) -> Result<Self, Error<I2C::Error>> {
        Self::with_config(i2c, Config::new(integration_time, ack))
    }

    /// Create a driver and write `config` to the command register.
    ///
    /// A pending ACK is cleared first. The device does not always answer on the
    /// alert response address, so that read is allowed to fail.
    pub fn with_config(i2c: I2C, config: Config) -> Result<Self, Error<I2C::Error>> {
        let mut dev = Self { i2c, config };

        if let Err(e) = dev.clear_ack() {
            debug!("VEML6070: ARA read not acknowledged: {:?}", e);
        }

        dev.write_command(config.command_byte())?;
        info!(
            "VEML6070: configured (IT = {:?}, ACK = {}, command = {:#04x})",
            config.integration_time,
            config.ack,
            config.command_byte()
        );

        Ok(dev)
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    // =========================================================================
    // Private I2C Helper Methods
    // =========================================================================

    fn write_command(&mut self, cmd: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(ADDR_CMD, &[cmd])?;
        Ok(())
    }

    fn read_byte(&mut self, addr: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.read(addr, &mut buf)?;
        Ok(buf[0])
    }

    /// Write `config` and adopt it once the bus accepted it.
    fn apply(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        self.write_command(config.command_byte())?;
        self.config = config;
        Ok(())
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Read the raw UV count from the two data registers.
    pub fn uv_raw(&mut self) -> Result<u16, Error<I2C::Error>> {
        let lsb = self.read_byte(ADDR_DATA_LSB)?;
        let msb = self.read_byte(ADDR_DATA_MSB)?;
        Ok(combine(msb, lsb))
    }

    /// Same as [`uv_raw`](Self::uv_raw).
    pub fn read(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.uv_raw()
    }

    /// Risk level of `raw` for the configured integration time.
    pub fn get_index(&self, raw: u16) -> RiskLevel {
        risk::get_index(raw, self.config.integration_time)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn integration_time(&self) -> IntegrationTime {
        self.config.integration_time
    }

    pub fn set_integration_time(
        &mut self,
        integration_time: IntegrationTime,
    ) -> Result<(), Error<I2C::Error>> {
        self.apply(Config {
            integration_time,
            ..self.config
        })
    }

    pub fn ack(&self) -> bool {
        self.config.ack
    }

    /// Enable or disable the ACK alert output.
    pub fn set_ack(&mut self, ack: bool) -> Result<(), Error<I2C::Error>> {
        self.apply(Config { ack, ..self.config })
    }

    pub fn ack_threshold(&self) -> AckThreshold {
        self.config.ack_threshold
    }

    pub fn set_ack_threshold(
        &mut self,
        ack_threshold: AckThreshold,
    ) -> Result<(), Error<I2C::Error>> {
        self.apply(Config {
            ack_threshold,
            ..self.config
        })
    }

    /// Read the alert response address, which releases the ACK line.
    ///
    /// Returns the byte the device answered with.
    pub fn clear_ack(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_byte(ADDR_ARA)
    }

    // =========================================================================
    // Power
    // =========================================================================

    /// Put the device into shutdown (about 1 µA).
    pub fn sleep(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(CMD_SHUTDOWN)
    }

    /// Leave shutdown, restoring the current configuration.
    pub fn wake(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(self.config.command_byte())
    }
}
