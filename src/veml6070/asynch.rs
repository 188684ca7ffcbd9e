//! Async flavour of the VEML6070 driver.
//!
//! Same register traffic as [`super::blocking::Veml6070`], over
//! `embedded_hal_async::i2c::I2c` so the executor can run other tasks while a
//! transaction is on the wire.

use embedded_hal_async::i2c::I2c;
use log::{debug, info};

use super::{
    ADDR_ARA, ADDR_CMD, ADDR_DATA_LSB, ADDR_DATA_MSB, AckThreshold, CMD_SHUTDOWN, Error,
    IntegrationTime, combine,
};
use crate::config::Config;
use crate::risk::{self, RiskLevel};

/// VEML6070 UV sensor driver with async I2C interface
pub struct Veml6070Async<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C> Veml6070Async<I2C>
where
    I2C: I2c,
{
    /// Create a driver with the default configuration (1 T, ACK off).
    pub async fn new(i2c: I2C) -> Result<Self, Error<I2C::Error>> {
        Self::with_config(i2c, Config::default()).await
    }

    pub async fn with_options(
        i2c: I2C,
        integration_time: IntegrationTime,
        ack: bool,
    ) -> Result<Self, Error<I2C::Error>> {
        Self::with_config(i2c, Config::new(integration_time, ack)).await
    }

    /// Create a driver and write `config` to the command register.
    ///
    /// The ARA read that clears a pending ACK may be NACKed; only the command
    /// write has to succeed.
    pub async fn with_config(i2c: I2C, config: Config) -> Result<Self, Error<I2C::Error>> {
        let mut dev = Self { i2c, config };

        if let Err(e) = dev.clear_ack().await {
            debug!("VEML6070: ARA read not acknowledged: {:?}", e);
        }

        dev.write_command(config.command_byte()).await?;
        info!(
            "VEML6070: configured (IT = {:?}, ACK = {}, command = {:#04x})",
            config.integration_time,
            config.ack,
            config.command_byte()
        );

        Ok(dev)
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    async fn write_command(&mut self, cmd: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(ADDR_CMD, &[cmd]).await?;
        Ok(())
    }

    async fn read_byte(&mut self, addr: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.read(addr, &mut buf).await?;
        Ok(buf[0])
    }

    async fn apply(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        self.write_command(config.command_byte()).await?;
        self.config = config;
        Ok(())
    }

    /// Read the raw UV count (LSB register first, then MSB).
    pub async fn uv_raw(&mut self) -> Result<u16, Error<I2C::Error>> {
        let lsb = self.read_byte(ADDR_DATA_LSB).await?;
        let msb = self.read_byte(ADDR_DATA_MSB).await?;
        Ok(combine(msb, lsb))
    }

    pub async fn read(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.uv_raw().await
    }

    /// Risk level of `raw` for the configured integration time.
    pub fn get_index(&self, raw: u16) -> RiskLevel {
        risk::get_index(raw, self.config.integration_time)
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn integration_time(&self) -> IntegrationTime {
        self.config.integration_time
    }

    pub async fn set_integration_time(
        &mut self,
        integration_time: IntegrationTime,
    ) -> Result<(), Error<I2C::Error>> {
        self.apply(Config {
            integration_time,
            ..self.config
        })
        .await
    }

    pub fn ack(&self) -> bool {
        self.config.ack
    }

    pub async fn set_ack(&mut self, ack: bool) -> Result<(), Error<I2C::Error>> {
        self.apply(Config { ack, ..self.config }).await
    }

    pub fn ack_threshold(&self) -> AckThreshold {
        self.config.ack_threshold
    }

    pub async fn set_ack_threshold(
        &mut self,
        ack_threshold: AckThreshold,
    ) -> Result<(), Error<I2C::Error>> {
        self.apply(Config {
            ack_threshold,
            ..self.config
        })
        .await
    }

    pub async fn clear_ack(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_byte(ADDR_ARA).await
    }

    pub async fn sleep(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(CMD_SHUTDOWN).await
    }

    pub async fn wake(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(self.config.command_byte()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_bus::FakeBus;
    use embassy_futures::block_on;

    #[test]
    fn test_new_clears_ack_and_configures() {
        let dev = block_on(Veml6070Async::with_options(
            FakeBus::new(),
            IntegrationTime::Half,
            true,
        ))
        .unwrap();
        let bus = dev.release();

        assert_eq!(bus.reads, vec![ADDR_ARA]);
        assert_eq!(bus.writes, vec![(ADDR_CMD, vec![0x22])]);
    }

    #[test]
    fn test_uv_raw() {
        let bus = FakeBus::new()
            .with_register(ADDR_DATA_LSB, 0x07)
            .with_register(ADDR_DATA_MSB, 0x06);

        block_on(async {
            let mut dev = Veml6070Async::new(bus).await.unwrap();
            let raw = dev.read().await.unwrap();

            assert_eq!(raw, 0x0607);
            assert_eq!(dev.get_index(raw), RiskLevel::VeryHigh);
        });
    }

    #[test]
    fn test_errors_propagate() {
        let result = block_on(Veml6070Async::new(FakeBus::new().fail_on(ADDR_CMD)));
        assert!(result.is_err());

        block_on(async {
            let mut dev = Veml6070Async::new(FakeBus::new().fail_read_on(ADDR_DATA_LSB))
                .await
                .unwrap();
            assert!(dev.uv_raw().await.is_err());

            let bus = dev.release();
            assert_eq!(bus.writes, vec![(ADDR_CMD, vec![0x06])]);
        });

        block_on(async {
            let mut dev = Veml6070Async::new(FakeBus::new().fail_read_on(ADDR_DATA_MSB))
                .await
                .unwrap();
            assert!(dev.read().await.is_err());
        });
    }

    #[test]
    fn test_setters_sleep_wake() {
        block_on(async {
            let mut dev = Veml6070Async::new(FakeBus::new()).await.unwrap();

            dev.set_integration_time(IntegrationTime::Four).await.unwrap();
            dev.set_ack(true).await.unwrap();
            dev.set_ack_threshold(AckThreshold::Steps145).await.unwrap();
            dev.sleep().await.unwrap();
            dev.wake().await.unwrap();

            assert_eq!(dev.integration_time(), IntegrationTime::Four);
            let bus = dev.release();
            let commands: Vec<u8> = bus.writes.iter().map(|(_, bytes)| bytes[0]).collect();
            assert_eq!(commands, vec![0x06, 0x0E, 0x2E, 0x3E, 0x03, 0x3E]);
        });
    }
}
