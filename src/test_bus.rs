//! In-memory I2C bus for driver tests.
//!
//! Each 7-bit address holds one byte that reads return. Writes and reads are
//! recorded in order, and one address can be made to NACK.

use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

#[derive(Debug)]
pub struct FakeBus {
    /// `(address, bytes)` for every write, in order
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Address of every read, in order
    pub reads: Vec<u8>,
    /// Any transaction to this address fails
    pub fail_addr: Option<u8>,
    /// Only reads from this address fail; writes still go through
    pub fail_read_addr: Option<u8>,
    registers: [u8; 128],
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            reads: Vec::new(),
            fail_addr: None,
            fail_read_addr: None,
            registers: [0; 128],
        }
    }

    pub fn with_register(mut self, addr: u8, value: u8) -> Self {
        self.registers[addr as usize] = value;
        self
    }

    pub fn fail_on(mut self, addr: u8) -> Self {
        self.fail_addr = Some(addr);
        self
    }

    pub fn fail_read_on(mut self, addr: u8) -> Self {
        self.fail_read_addr = Some(addr);
        self
    }

    fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        if self.fail_addr == Some(address) {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        let reads = operations.iter().any(|op| matches!(op, Operation::Read(_)));
        if reads && self.fail_read_addr == Some(address) {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        }

        for op in operations {
            match op {
                Operation::Read(buf) => {
                    self.reads.push(address);
                    buf.fill(self.registers[address as usize]);
                }
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
            }
        }
        Ok(())
    }
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for FakeBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}
