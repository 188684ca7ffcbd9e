//! Shared async I2C bus
//!
//! Several drivers can hold an [`AsyncI2cDevice`] pointing at the same
//! `embassy_sync` mutex. The lock is taken for exactly one transaction and
//! released before the driver's next one, so devices interleave on the bus
//! without ever splitting a transaction.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::{ErrorType, I2c, Operation};

/// Handle to a bus shared behind an async mutex.
///
/// # Example
///
/// ```ignore
/// use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
/// use embassy_sync::mutex::Mutex;
/// use static_cell::StaticCell;
///
/// static I2C_BUS: StaticCell<Mutex<CriticalSectionRawMutex, Bus>> = StaticCell::new();
///
/// let i2c_bus = I2C_BUS.init(Mutex::new(i2c));
/// let uv = Veml6070Async::new(AsyncI2cDevice::new(i2c_bus)).await?;
/// let other = OtherDriver::new(AsyncI2cDevice::new(i2c_bus));
/// ```
pub struct AsyncI2cDevice<'a, M: RawMutex, T> {
    bus: &'a Mutex<M, T>,
}

impl<'a, M: RawMutex, T> AsyncI2cDevice<'a, M, T> {
    #[inline]
    pub const fn new(bus: &'a Mutex<M, T>) -> Self {
        Self { bus }
    }
}

impl<M: RawMutex, T> ErrorType for AsyncI2cDevice<'_, M, T>
where
    T: ErrorType,
{
    type Error = T::Error;
}

impl<M: RawMutex, T> I2c for AsyncI2cDevice<'_, M, T>
where
    T: I2c,
{
    // read/write/write_read fall back to `transaction`, so every
    // operation holds the lock for exactly one bus transaction.
    #[inline]
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut bus = self.bus.lock().await;
        bus.transaction(address, operations).await
    }
}
