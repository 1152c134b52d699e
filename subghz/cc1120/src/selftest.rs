//! Power-on verification of the SPI link and the chip register file.

use crate::{
    access::{Strobe, FIFO_TX_START},
    config::ConfigPatch,
    driver::Driver,
    error::DriverError,
    regs::{ext, pri, MarcState, RegisterAddress},
    traits,
};

pub type RegisterDefaults = ConfigPatch<'static>;

/// Reset values of the complete primary register space.
pub static POWER_ON_DEFAULTS: RegisterDefaults = ConfigPatch::new(&[
    (pri::IOCFG3, 0x06),
    (pri::IOCFG2, 0x07),
    (pri::IOCFG1, 0x30),
    (pri::IOCFG0, 0x3C),
    (pri::SYNC3, 0x93),
    (pri::SYNC2, 0x0B),
    (pri::SYNC1, 0x51),
    (pri::SYNC0, 0xDE),
    (pri::SYNC_CFG1, 0x0A),
    (pri::SYNC_CFG0, 0x17),
    (pri::DEVIATION_M, 0x06),
    (pri::MODCFG_DEV_E, 0x03),
    (pri::DCFILT_CFG, 0x4C),
    (pri::PREAMBLE_CFG1, 0x14),
    (pri::PREAMBLE_CFG0, 0x2A),
    (pri::FREQ_IF_CFG, 0x40),
    (pri::IQIC, 0xC4),
    (pri::CHAN_BW, 0x14),
    (pri::MDMCFG1, 0x46),
    (pri::MDMCFG0, 0x0D),
    (pri::SYMBOL_RATE2, 0x43),
    (pri::SYMBOL_RATE1, 0xA9),
    (pri::SYMBOL_RATE0, 0x2A),
    (pri::AGC_REF, 0x36),
    (pri::AGC_CS_THR, 0x00),
    (pri::AGC_GAIN_ADJUST, 0x00),
    (pri::AGC_CFG3, 0x91),
    (pri::AGC_CFG2, 0x20),
    (pri::AGC_CFG1, 0xAA),
    (pri::AGC_CFG0, 0xC3),
    (pri::FIFO_CFG, 0x80),
    (pri::DEV_ADDR, 0x00),
    (pri::SETTLING_CFG, 0x0B),
    (pri::FS_CFG, 0x02),
    (pri::WOR_CFG1, 0x08),
    (pri::WOR_CFG0, 0x21),
    (pri::WOR_EVENT0_MSB, 0x00),
    (pri::WOR_EVENT0_LSB, 0x00),
    (pri::PKT_CFG2, 0x04),
    (pri::PKT_CFG1, 0x05),
    (pri::PKT_CFG0, 0x00),
    (pri::RFEND_CFG1, 0x0F),
    (pri::RFEND_CFG0, 0x00),
    (pri::PA_CFG2, 0x7F),
    (pri::PA_CFG1, 0x56),
    (pri::PA_CFG0, 0x7C),
    (pri::PKT_LEN, 0x03),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTestError<SpiE> {
    /// A register did not hold its expected value.
    Mismatch {
        address: RegisterAddress,
        expected: u8,
        actual: u8,
    },
    /// The radio state machine was not idle.
    NotIdle,
    Driver(DriverError<SpiE>),
}

impl<SpiE> From<DriverError<SpiE>> for SelfTestError<SpiE> {
    fn from(error: DriverError<SpiE>) -> Self {
        Self::Driver(error)
    }
}

/// Compare the primary register space against expected values, first with
/// single reads, then again through one burst read.
pub fn verify_defaults<Spi: traits::Spi>(
    driver: &mut Driver<Spi>,
    defaults: &RegisterDefaults,
) -> Result<(), SelfTestError<Spi::Error>> {
    for &(address, expected) in defaults.entries {
        let actual = driver.read_reg(address)?;
        if actual != expected {
            return Err(SelfTestError::Mismatch {
                address,
                expected,
                actual,
            });
        }
    }

    let mut space = [0u8; 0x2F];
    driver.read_regs(pri::IOCFG3, &mut space)?;
    for &(address, expected) in defaults.entries {
        if !address.is_primary() {
            continue;
        }
        let actual = space[address.addr() as usize];
        if actual != expected {
            return Err(SelfTestError::Mismatch {
                address,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Confirm the extended address space answers and the state machine idles.
pub fn verify_ext_space<Spi: traits::Spi>(
    driver: &mut Driver<Spi>,
) -> Result<(), SelfTestError<Spi::Error>> {
    let marcstate = driver.read_marc_state()?;
    if marcstate.marc_state() != Some(MarcState::IDLE) {
        return Err(SelfTestError::NotIdle);
    }

    let num_txbytes = driver.read_reg(ext::NUM_TXBYTES)?;
    if num_txbytes != 0 {
        return Err(SelfTestError::Mismatch {
            address: ext::NUM_TXBYTES,
            expected: 0,
            actual: num_txbytes,
        });
    }
    Ok(())
}

/// Probe the FIFO memory through the direct window.
pub fn verify_fifo_direct<Spi: traits::Spi>(
    driver: &mut Driver<Spi>,
) -> Result<(), SelfTestError<Spi::Error>> {
    let pattern = [0x55, 0xAA, 0x0F, 0xF0];
    driver.write_fifo_direct(FIFO_TX_START, &pattern)?;

    let mut readback = [0u8; 4];
    driver.read_fifo_direct(FIFO_TX_START, &mut readback)?;
    for (offset, (&expected, &actual)) in pattern.iter().zip(readback.iter()).enumerate() {
        if expected != actual {
            return Err(SelfTestError::Mismatch {
                address: RegisterAddress(FIFO_TX_START as u16 + offset as u16),
                expected,
                actual,
            });
        }
    }

    driver.strobe(Strobe::SFTX)?;
    Ok(())
}

/// A no-op strobe must come back with a ready status.
pub fn verify_strobe<Spi: traits::Spi>(
    driver: &mut Driver<Spi>,
) -> Result<(), SelfTestError<Spi::Error>> {
    let status = driver.strobe(Strobe::SNOP)?;
    if !status.chip_rdy() {
        return Err(SelfTestError::Driver(DriverError::ChipNotReady));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeChip;

    fn chip_with_defaults() -> FakeChip {
        let mut chip = FakeChip::new();
        for &(address, value) in POWER_ON_DEFAULTS.entries {
            chip.regs[address.addr() as usize] = value;
        }
        chip.ext[0x73] = 0x41;
        chip
    }

    #[test]
    fn defaults_pass_on_a_pristine_chip() {
        let mut driver = Driver::new(chip_with_defaults());
        verify_defaults(&mut driver, &POWER_ON_DEFAULTS).unwrap();
    }

    #[test]
    fn defaults_report_the_first_deviating_register() {
        let mut chip = chip_with_defaults();
        chip.regs[0x11] = 0xFF;

        let mut driver = Driver::new(chip);
        let err = verify_defaults(&mut driver, &POWER_ON_DEFAULTS).unwrap_err();
        assert_eq!(
            SelfTestError::Mismatch {
                address: pri::CHAN_BW,
                expected: 0x14,
                actual: 0xFF,
            },
            err
        );
    }

    #[test]
    fn ext_space_expects_an_idle_state_machine() {
        let mut driver = Driver::new(chip_with_defaults());
        verify_ext_space(&mut driver).unwrap();

        driver.spi.ext[0x73] = 0x6E;
        let err = verify_ext_space(&mut driver).unwrap_err();
        assert_eq!(SelfTestError::NotIdle, err);
    }

    #[test]
    fn fifo_probe_round_trips_and_flushes() {
        let mut driver = Driver::new(chip_with_defaults());
        verify_fifo_direct(&mut driver).unwrap();

        let chip = driver.release();
        assert_eq!(vec![Strobe::SFTX as u8], chip.strobes());
    }

    #[test]
    fn snop_reports_ready() {
        let mut driver = Driver::new(chip_with_defaults());
        verify_strobe(&mut driver).unwrap();
    }
}
