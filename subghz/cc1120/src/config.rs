use crate::{
    driver::Driver,
    error::{ConfigError, DriverError},
    regs::RegisterAddress,
    traits,
};

/// An ordered list of register writes forming a radio configuration.
///
/// Entries are applied one register at a time in table order, so a patch may
/// mix primary and extended addresses freely.
#[derive(Clone, Copy)]
pub struct ConfigPatch<'a> {
    pub entries: &'a [(RegisterAddress, u8)],
}

impl<'a> ConfigPatch<'a> {
    pub const fn new(entries: &'a [(RegisterAddress, u8)]) -> Self {
        Self { entries }
    }

    /// Get the value a patch assigns to a register, or None if the register
    /// is not part of the configuration.
    pub fn get(&self, address: RegisterAddress) -> Option<u8> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == address)
            .map(|(_, value)| *value)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Spi: traits::Spi> Driver<Spi> {
    /// Apply a configuration patch register by register.
    ///
    /// On failure the error carries the table index and address of the entry
    /// that could not be written.
    pub fn write_patch(&mut self, patch: ConfigPatch) -> Result<(), ConfigError<Spi::Error>> {
        for (index, &(address, value)) in patch.entries.iter().enumerate() {
            self.write_reg(address, value).map_err(|source| ConfigError {
                index,
                address,
                source,
            })?;
        }
        Ok(())
    }

    /// Read every register named by a patch and compare against the table.
    ///
    /// Returns the first mismatching entry as `(index, address, read value)`.
    pub fn verify_patch(
        &mut self,
        patch: ConfigPatch,
    ) -> Result<Option<(usize, RegisterAddress, u8)>, DriverError<Spi::Error>> {
        for (index, &(address, expected)) in patch.entries.iter().enumerate() {
            let actual = self.read_reg(address)?;
            if actual != expected {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "config mismatch at entry {}: read 0x{:02x}, expected 0x{:02x}",
                    index,
                    actual,
                    expected
                );
                return Ok(Some((index, address, actual)));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        regs::{ext, pri},
        testutil::FakeChip,
    };

    const PATCH: ConfigPatch = ConfigPatch::new(&[
        (pri::IOCFG3, 0xB0),
        (pri::SYNC_CFG1, 0x08),
        (ext::FREQ2, 0x6C),
        (ext::FREQ1, 0x7A),
    ]);

    #[test]
    fn get_finds_entries_in_both_spaces() {
        assert_eq!(Some(0xB0), PATCH.get(pri::IOCFG3));
        assert_eq!(Some(0x6C), PATCH.get(ext::FREQ2));
        assert_eq!(None, PATCH.get(pri::CHAN_BW));
    }

    #[test]
    fn write_patch_applies_all_entries() {
        let mut driver = Driver::new(FakeChip::new());
        driver.write_patch(PATCH).unwrap();
        assert_eq!(None, driver.verify_patch(PATCH).unwrap());
    }

    #[test]
    fn verify_patch_reports_first_mismatch() {
        let mut driver = Driver::new(FakeChip::new());
        driver.write_patch(PATCH).unwrap();
        driver.write_reg(ext::FREQ2, 0x00).unwrap();

        let mismatch = driver.verify_patch(PATCH).unwrap();
        assert_eq!(Some((2, ext::FREQ2, 0x00)), mismatch);
    }

    #[test]
    fn write_patch_error_names_the_failing_entry() {
        let bad = ConfigPatch::new(&[
            (pri::IOCFG3, 0xB0),
            (crate::regs::RegisterAddress(0x2F50), 0x00),
        ]);

        let mut driver = Driver::new(FakeChip::new());
        let err = driver.write_patch(bad).unwrap_err();
        assert_eq!(1, err.index);
        assert_eq!(crate::regs::RegisterAddress(0x2F50), err.address);
        assert_eq!(DriverError::InvalidRegister, err.source);
    }
}
