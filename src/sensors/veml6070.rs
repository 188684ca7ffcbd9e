use crate::config::Config;
use crate::risk::RiskLevel;
use crate::sensors::{SensorError, SensorReadings};
use crate::veml6070::asynch::Veml6070Async;

use super::Sensor;
use embedded_hal_async::i2c::I2c;
use log::{error, info};

const SENSOR_NAME: &str = "VEML6070";

/// Typed readings from the VEML6070 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvReadings {
    pub uv_raw: u16,
    pub risk_level: RiskLevel,
}

impl SensorReadings<2> for UvReadings {
    fn to_array(self) -> [i32; 2] {
        [self.uv_raw as i32, self.risk_level as i32]
    }
}

pub struct UvSensor<I> {
    sensor: Veml6070Async<I>,
}

impl<I: I2c> UvSensor<I> {
    pub fn new(sensor: Veml6070Async<I>) -> Self {
        Self { sensor }
    }

    /// Configure the sensor on `i2c` and wrap it.
    pub async fn init(i2c: I, config: Config) -> Result<Self, SensorError> {
        let sensor = Veml6070Async::with_config(i2c, config).await.map_err(|e| {
            error!("VEML6070 configuration failed: {:?}", e);
            SensorError::InitializationFailed {
                sensor: SENSOR_NAME,
                details: "Failed to write the command register",
            }
        })?;

        Ok(Self::new(sensor))
    }

    pub fn driver(&mut self) -> &mut Veml6070Async<I> {
        &mut self.sensor
    }

    pub fn into_inner(self) -> Veml6070Async<I> {
        self.sensor
    }
}

impl<I: I2c> Sensor<2> for UvSensor<I> {
    type Readings = UvReadings;

    async fn read(&mut self) -> Result<UvReadings, SensorError> {
        let uv_raw = self.sensor.uv_raw().await.map_err(|e| {
            error!("VEML6070 UV read failed: {:?}", e);
            SensorError::ReadFailed {
                sensor: SENSOR_NAME,
                operation: "read UV data registers",
                details: "I2C communication error",
            }
        })?;

        let risk_level = self.sensor.get_index(uv_raw);
        info!("VEML6070: raw = {} ({})", uv_raw, risk_level);

        Ok(UvReadings { uv_raw, risk_level })
    }
}
