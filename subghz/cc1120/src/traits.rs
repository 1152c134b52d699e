//! Transport boundary towards the host platform.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Byte-level SPI transport with explicit chip-select control.
///
/// The protocol layer decides per byte whether to continue a transaction
/// based on the status byte riding on every transfer, so the transport must
/// expose single-byte full-duplex exchange while chip-select stays asserted.
pub trait Spi {
    type Error;

    /// Assert chip-select (active low on the chip).
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Deassert chip-select.
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Full-duplex single-byte exchange.
    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error>;
}

/// Error of the [`SpiInterface`] adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError<BusE, CsE> {
    Bus(BusE),
    Cs(CsE),
}

/// [`Spi`] implementation over a blocking embedded-hal bus and a
/// chip-select output pin.
///
/// The driver owns bus exclusivity by construction: the core is
/// single-threaded and blocking, and only one transaction can hold the
/// `&mut` borrow of this interface at a time.
pub struct SpiInterface<Bus, Cs> {
    bus: Bus,
    cs: Cs,
}

impl<Bus, Cs> SpiInterface<Bus, Cs>
where
    Bus: SpiBus,
    Cs: OutputPin,
{
    pub fn new(bus: Bus, cs: Cs) -> Self {
        Self { bus, cs }
    }

    pub fn release(self) -> (Bus, Cs) {
        (self.bus, self.cs)
    }
}

impl<Bus, Cs> Spi for SpiInterface<Bus, Cs>
where
    Bus: SpiBus,
    Cs: OutputPin,
{
    type Error = InterfaceError<Bus::Error, Cs::Error>;

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Cs)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        // Drain the bus before releasing the chip; a buffered transfer must
        // not outlive its transaction.
        self.bus.flush().map_err(InterfaceError::Bus)?;
        self.cs.set_high().map_err(InterfaceError::Cs)
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut word = [byte];
        self.bus
            .transfer_in_place(&mut word)
            .map_err(InterfaceError::Bus)?;
        self.bus.flush().map_err(InterfaceError::Bus)?;
        Ok(word[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mocks::digital::MockOutputPin;
    use embedded_hal_mocks::spi::MockSpiBus;
    use mockall::Sequence;

    #[test]
    fn select_drives_cs_low_and_deselect_high() {
        let mut seq = Sequence::new();

        let mut cs = MockOutputPin::new();
        cs.expect_set_low()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        cs.expect_set_high()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let mut bus = MockSpiBus::new();
        bus.expect_flush().returning(|| Ok(()));

        let mut spi = SpiInterface::new(bus, cs);
        spi.select().unwrap();
        spi.deselect().unwrap();
    }

    #[test]
    fn transfer_is_full_duplex() {
        let mut bus = MockSpiBus::new();
        bus.expect_transfer_in_place()
            .withf(|words| words == [0xA5])
            .returning(|words| {
                words[0] = 0x0F;
                Ok(())
            });
        bus.expect_flush().returning(|| Ok(()));

        let mut spi = SpiInterface::new(bus, MockOutputPin::new());
        assert_eq!(0x0F, spi.transfer(0xA5).unwrap());
    }
}
