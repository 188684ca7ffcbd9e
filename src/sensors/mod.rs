mod veml6070;

use thiserror_no_std::Error;

pub use veml6070::{UvReadings, UvSensor};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("{sensor}: initialization failed ({details})")]
    InitializationFailed {
        sensor: &'static str,
        details: &'static str,
    },
    #[error("{sensor}: {operation} failed ({details})")]
    ReadFailed {
        sensor: &'static str,
        operation: &'static str,
        details: &'static str,
    },
}

/// Trait for sensor reading data structures.
/// Provides compile-time guarantees about the number of values and their conversion to arrays.
pub trait SensorReadings<const COUNT: usize> {
    /// Convert the readings into a fixed-size array.
    fn to_array(self) -> [i32; COUNT];
}

/// Trait for sensors that produce typed readings.
pub trait Sensor<const COUNT: usize> {
    /// The type of readings this sensor produces.
    type Readings: SensorReadings<COUNT>;

    /// Read the sensor and return typed readings.
    fn read(&mut self) -> impl Future<Output = Result<Self::Readings, SensorError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_error_display() {
        let err = SensorError::ReadFailed {
            sensor: "VEML6070",
            operation: "read UV data registers",
            details: "I2C communication error",
        };
        assert_eq!(
            format!("{}", err),
            "VEML6070: read UV data registers failed (I2C communication error)"
        );
    }
}
