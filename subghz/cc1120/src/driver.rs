use crate::{
    access::{Access, Direction, Strobe, Target},
    error::DriverError,
    regs::RegisterAddress,
    statusbyte::StatusByte,
    traits,
};

/// Total attempts for the readiness gate on a checked byte.
const READY_ATTEMPTS: u8 = 5;

pub struct Driver<Spi: traits::Spi> {
    pub(crate) spi: Spi,
    last_status: Option<StatusByte>,
}

impl<Spi: traits::Spi> Driver<Spi> {
    pub fn new(spi: Spi) -> Self {
        Self {
            spi,
            last_status: None,
        }
    }

    pub fn release(self) -> Spi {
        self.spi
    }

    /// The chip status returned by the most recent gated exchange.
    pub fn last_status(&self) -> Option<StatusByte> {
        self.last_status
    }

    /// Read a single register value from chip.
    pub fn read_reg(&mut self, address: RegisterAddress) -> Result<u8, DriverError<Spi::Error>> {
        let mut value = [0];
        self.read_regs(address, &mut value)?;
        Ok(value[0])
    }

    /// Read a sequence of consecutive register values from chip.
    pub fn read_regs(
        &mut self,
        first: RegisterAddress,
        buffer: &mut [u8],
    ) -> Result<(), DriverError<Spi::Error>> {
        let access = Access::new(Target::Register(first), Direction::Read, buffer.len())
            .map_err(|e| e.into_driver_error())?;
        self.run_read(access, buffer)
    }

    /// Write a single register value to chip.
    pub fn write_reg(
        &mut self,
        address: RegisterAddress,
        value: u8,
    ) -> Result<(), DriverError<Spi::Error>> {
        self.write_regs(address, &[value])
    }

    /// Write a sequence of consecutive register values to chip.
    pub fn write_regs(
        &mut self,
        first: RegisterAddress,
        values: &[u8],
    ) -> Result<(), DriverError<Spi::Error>> {
        let access = Access::new(Target::Register(first), Direction::Write, values.len())
            .map_err(|e| e.into_driver_error())?;
        self.run_write(access, values)
    }

    /// Read-modify-write a single register.
    pub fn modify_reg<F: FnOnce(u8) -> u8>(
        &mut self,
        address: RegisterAddress,
        configure: F,
    ) -> Result<(), DriverError<Spi::Error>> {
        let value = self.read_reg(address)?;
        self.write_reg(address, configure(value))
    }

    /// Strobe a command to the chip.
    ///
    /// The chip acts on the strobe internally; the caller confirms any
    /// resulting state transition by reading MARCSTATE.
    pub fn strobe(&mut self, strobe: Strobe) -> Result<StatusByte, DriverError<Spi::Error>> {
        let mut transaction = Transaction::begin(self)?;
        transaction.exchange_checked(strobe as u8)
    }

    /// Read from the RX FIFO through the chip's sequential access pointer.
    pub fn read_fifo(&mut self, buffer: &mut [u8]) -> Result<(), DriverError<Spi::Error>> {
        let access = Access::new(Target::Fifo, Direction::Read, buffer.len())
            .map_err(|e| e.into_driver_error())?;
        self.run_read(access, buffer)
    }

    /// Write to the TX FIFO through the chip's sequential access pointer.
    pub fn write_fifo(&mut self, values: &[u8]) -> Result<(), DriverError<Spi::Error>> {
        let access = Access::new(Target::Fifo, Direction::Write, values.len())
            .map_err(|e| e.into_driver_error())?;
        self.run_write(access, values)
    }

    /// Read from the 256-byte FIFO memory window at an explicit address.
    ///
    /// Diagnostic access; production receive paths use [`Self::read_fifo`].
    pub fn read_fifo_direct(
        &mut self,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<(), DriverError<Spi::Error>> {
        let access = Access::new(Target::FifoDirect(address), Direction::Read, buffer.len())
            .map_err(|e| e.into_driver_error())?;
        self.run_read(access, buffer)
    }

    /// Write into the 256-byte FIFO memory window at an explicit address.
    ///
    /// Diagnostic access; production transmit paths use [`Self::write_fifo`].
    pub fn write_fifo_direct(
        &mut self,
        address: u8,
        values: &[u8],
    ) -> Result<(), DriverError<Spi::Error>> {
        let access = Access::new(Target::FifoDirect(address), Direction::Write, values.len())
            .map_err(|e| e.into_driver_error())?;
        self.run_write(access, values)
    }

    fn run_read(
        &mut self,
        access: Access,
        buffer: &mut [u8],
    ) -> Result<(), DriverError<Spi::Error>> {
        let mut transaction = Transaction::begin(self)?;
        transaction.run_header(&access)?;
        for slot in buffer.iter_mut() {
            // Data bytes of a read are pulled back with filler; they are not
            // status-gated, the chip streams memory content on SO.
            *slot = transaction.exchange(0x00)?;
        }
        Ok(())
    }

    fn run_write(&mut self, access: Access, values: &[u8]) -> Result<(), DriverError<Spi::Error>> {
        let mut transaction = Transaction::begin(self)?;
        transaction.run_header(&access)?;
        for (_index, &byte) in values.iter().enumerate() {
            if let Err(error) = transaction.exchange_checked(byte) {
                #[cfg(feature = "defmt")]
                defmt::error!("write aborted at payload byte {}", _index);
                return Err(error);
            }
        }
        Ok(())
    }
}

/// An open SPI transaction.
///
/// Chip-select is asserted on construction and released in `Drop`, so every
/// exit path, early errors included, closes the transaction.
struct Transaction<'a, Spi: traits::Spi> {
    driver: &'a mut Driver<Spi>,
}

impl<'a, Spi: traits::Spi> Transaction<'a, Spi> {
    fn begin(driver: &'a mut Driver<Spi>) -> Result<Self, DriverError<Spi::Error>> {
        driver.spi.select().map_err(DriverError::Spi)?;
        Ok(Self { driver })
    }

    /// Exchange the header byte and, for addressed classes, the literal
    /// address byte.
    fn run_header(&mut self, access: &Access) -> Result<(), DriverError<Spi::Error>> {
        self.exchange_checked(access.header())?;
        if let Some(address) = access.address_phase() {
            let echo = self.exchange(address)?;
            if access.checks_echo() && echo != 0x00 {
                #[cfg(feature = "defmt")]
                defmt::error!("extended address echo 0x{:02x}, expected 0x00", echo);
                return Err(DriverError::ExtAddrEchoMismatch);
            }
        }
        Ok(())
    }

    /// Raw full-duplex byte exchange.
    fn exchange(&mut self, byte: u8) -> Result<u8, DriverError<Spi::Error>> {
        self.driver.spi.transfer(byte).map_err(DriverError::Spi)
    }

    /// Status-gated exchange: resend the same byte while the chip reports
    /// not ready, up to the retry budget.
    fn exchange_checked(&mut self, byte: u8) -> Result<StatusByte, DriverError<Spi::Error>> {
        for _attempt in 1..=READY_ATTEMPTS {
            let status = StatusByte(self.exchange(byte)?);
            self.driver.last_status = Some(status);
            if status.chip_rdy() {
                return Ok(status);
            }
            #[cfg(feature = "defmt")]
            defmt::warn!("chip not ready, retrying ({}/{})", _attempt, READY_ATTEMPTS);
        }
        Err(DriverError::ChipNotReady)
    }
}

impl<Spi: traits::Spi> Drop for Transaction<'_, Spi> {
    fn drop(&mut self) {
        // Nothing sensible to do with a deselect failure on the error path.
        let _ = self.driver.spi.deselect();
    }
}
