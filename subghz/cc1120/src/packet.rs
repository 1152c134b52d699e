use crate::{
    access::Strobe,
    config::ConfigPatch,
    driver::Driver,
    error::DriverError,
    regs::{ext, pri, LengthConfigValue, Marcstate, PktCfg0},
    traits, MAX_PACKET_LEN, TX_FIFO_SIZE,
};

impl<Spi: traits::Spi> Driver<Spi> {
    /// Reset the chip by command strobe.
    pub fn reset(&mut self) -> Result<(), DriverError<Spi::Error>> {
        self.strobe(Strobe::SRES)?;
        Ok(())
    }

    /// Configure the chip for transmission and enable the frequency
    /// synthesizer.
    pub fn tx_init(&mut self, config: ConfigPatch) -> Result<(), DriverError<Spi::Error>> {
        self.apply_config(config)?;
        self.strobe(Strobe::SFSTXON)?;
        Ok(())
    }

    /// Configure the chip for reception, calibrate and enter RX.
    pub fn rx_init(&mut self, config: ConfigPatch) -> Result<(), DriverError<Spi::Error>> {
        self.apply_config(config)?;
        self.strobe(Strobe::SCAL)?;
        self.strobe(Strobe::SRX)?;
        Ok(())
    }

    fn apply_config(&mut self, config: ConfigPatch) -> Result<(), DriverError<Spi::Error>> {
        self.write_patch(config).map_err(|error| {
            #[cfg(feature = "defmt")]
            defmt::error!("config entry {} failed", error.index);
            error.source
        })
    }

    /// Queue a packet for transmission.
    ///
    /// Payloads up to [`MAX_PACKET_LEN`] go out in variable packet length
    /// mode with a one-byte length prefix. Longer payloads switch the chip
    /// to infinite packet length mode, program PKT_LEN with the wraparound
    /// byte count and stream the data in FIFO-sized chunks, strobing STX
    /// after each chunk.
    pub fn send(&mut self, data: &[u8]) -> Result<(), DriverError<Spi::Error>> {
        if data.is_empty() {
            return Err(DriverError::InvalidParam);
        }

        if data.len() <= MAX_PACKET_LEN {
            self.set_length_mode(LengthConfigValue::VariablePacketLengthMode)?;
            self.write_fifo(&[data.len() as u8])?;
            self.write_fifo(data)?;
            self.strobe(Strobe::STX)?;
        } else {
            self.set_length_mode(LengthConfigValue::InfinitePacketLengthMode)?;
            self.write_reg(pri::PKT_LEN, (data.len() % 256) as u8)?;
            let mut remaining = data;
            while !remaining.is_empty() {
                if remaining.len() <= TX_FIFO_SIZE {
                    // The rest fits the FIFO; transition from infinite to
                    // fixed packet length mode so the transmission ends when
                    // the byte counter reaches PKT_LEN.
                    self.set_length_mode(LengthConfigValue::FixedPacketLengthMode)?;
                }
                let (chunk, rest) = remaining.split_at(remaining.len().min(TX_FIFO_SIZE));
                self.write_fifo(chunk)?;
                self.strobe(Strobe::STX)?;
                remaining = rest;
            }
        }
        Ok(())
    }

    fn set_length_mode(&mut self, mode: LengthConfigValue) -> Result<(), DriverError<Spi::Error>> {
        self.modify_reg(pri::PKT_CFG0, |value| {
            let mut pkt_cfg0 = PktCfg0(value);
            pkt_cfg0.set_length_config(mode);
            pkt_cfg0.0
        })
    }

    /// Drain pending bytes from the RX FIFO into `buffer`.
    ///
    /// Returns the number of bytes read, at most `buffer.len()`.
    pub fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, DriverError<Spi::Error>> {
        let pending = self.rx_fifo_bytes()? as usize;
        let len = pending.min(buffer.len());
        if len == 0 {
            return Ok(0);
        }
        self.read_fifo(&mut buffer[..len])?;
        Ok(len)
    }

    /// Read the main radio control state machine state.
    ///
    /// The chip is the sole authority on its state; callers confirm strobe
    /// effects through this read rather than by bookkeeping.
    pub fn read_marc_state(&mut self) -> Result<Marcstate, DriverError<Spi::Error>> {
        Ok(Marcstate(self.read_reg(ext::MARCSTATE)?))
    }

    /// Number of bytes queued in the TX FIFO.
    pub fn tx_fifo_bytes(&mut self) -> Result<u8, DriverError<Spi::Error>> {
        self.read_reg(ext::NUM_TXBYTES)
    }

    /// Number of bytes pending in the RX FIFO.
    pub fn rx_fifo_bytes(&mut self) -> Result<u8, DriverError<Spi::Error>> {
        self.read_reg(ext::NUM_RXBYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{configs::GFSK_434MHZ, regs::MarcState, testutil::FakeChip};

    fn driver() -> Driver<FakeChip> {
        Driver::new(FakeChip::new())
    }

    #[test]
    fn send_rejects_an_empty_payload() {
        let mut driver = driver();
        let err = driver.send(&[]).unwrap_err();
        assert_eq!(DriverError::InvalidParam, err);

        let chip = driver.release();
        assert_eq!(0, chip.transfer_count);
    }

    #[test]
    fn short_send_uses_variable_length_with_prefix() {
        let mut driver = driver();
        driver.send(&[0xAA, 0xBB, 0xCC]).unwrap();

        let chip = driver.release();
        let pkt_cfg0 = PktCfg0(chip.regs[0x28]);
        assert_eq!(
            LengthConfigValue::VariablePacketLengthMode,
            pkt_cfg0.length_config()
        );
        assert_eq!(vec![vec![3], vec![0xAA, 0xBB, 0xCC]], chip.fifo_writes());
        assert_eq!(vec![Strobe::STX as u8], chip.strobes());
    }

    #[test]
    fn max_length_payload_still_takes_the_short_path() {
        let mut driver = driver();
        driver.send(&[0x55; 255]).unwrap();

        let chip = driver.release();
        assert_eq!(1, chip.strobes().len());
        assert_eq!(vec![255], chip.fifo_writes()[0]);
    }

    #[test]
    fn long_send_streams_fifo_sized_chunks() {
        let payload: Vec<u8> = (0..300u16).map(|i| i as u8).collect();

        let mut driver = driver();
        driver.send(&payload).unwrap();

        let chip = driver.release();
        assert_eq!(44, chip.regs[0x2E]);

        // ceil(300 / 128) chunks, each followed by a transmit strobe.
        let writes = chip.fifo_writes();
        assert_eq!(3, writes.len());
        assert_eq!(vec![Strobe::STX as u8; 3], chip.strobes());

        let streamed: Vec<u8> = writes.into_iter().flatten().collect();
        assert_eq!(payload, streamed);
    }

    #[test]
    fn long_send_ends_in_fixed_length_mode() {
        let mut driver = driver();
        driver.send(&[0x5A; 300]).unwrap();

        // Infinite mode is temporary; the final chunk goes out in fixed
        // mode so TX terminates at the PKT_LEN byte count.
        let chip = driver.release();
        let pkt_cfg0 = PktCfg0(chip.regs[0x28]);
        assert_eq!(
            LengthConfigValue::FixedPacketLengthMode,
            pkt_cfg0.length_config()
        );
    }

    #[test]
    fn chunk_boundary_is_exact_at_a_fifo_multiple() {
        let payload = vec![0xA5; 256];

        let mut driver = driver();
        driver.send(&payload).unwrap();

        let chip = driver.release();
        let writes = chip.fifo_writes();
        assert_eq!(2, writes.len());
        assert_eq!(128, writes[0].len());
        assert_eq!(128, writes[1].len());
        assert_eq!(0, chip.regs[0x2E]);
    }

    #[test]
    fn tx_init_applies_the_config_and_arms_the_synthesizer() {
        let mut driver = driver();
        driver.tx_init(GFSK_434MHZ).unwrap();
        assert_eq!(None, driver.verify_patch(GFSK_434MHZ).unwrap());

        let chip = driver.release();
        assert_eq!(vec![Strobe::SFSTXON as u8], chip.strobes());
    }

    #[test]
    fn rx_init_calibrates_then_enters_rx() {
        let mut driver = driver();
        driver.rx_init(GFSK_434MHZ).unwrap();

        let chip = driver.release();
        assert_eq!(
            vec![Strobe::SCAL as u8, Strobe::SRX as u8],
            chip.strobes()
        );
    }

    #[test]
    fn receive_drains_the_pending_byte_count() {
        let mut driver = driver();
        driver.spi.ext[0xD7] = 4;
        driver.spi.fifo[0x80..0x84].copy_from_slice(&[0x11, 0x22, 0x33, 0x44]);

        let mut buffer = [0; 16];
        let len = driver.receive(&mut buffer).unwrap();
        assert_eq!(4, len);
        assert_eq!([0x11, 0x22, 0x33, 0x44], buffer[..4]);
    }

    #[test]
    fn receive_is_bounded_by_the_caller_buffer() {
        let mut driver = driver();
        driver.spi.ext[0xD7] = 100;

        let mut buffer = [0; 8];
        assert_eq!(8, driver.receive(&mut buffer).unwrap());
    }

    #[test]
    fn receive_with_an_empty_fifo_reads_nothing() {
        let mut driver = driver();
        let mut buffer = [0; 8];
        assert_eq!(0, driver.receive(&mut buffer).unwrap());
    }

    #[test]
    fn marc_state_decodes_idle_after_power_on() {
        let mut driver = driver();
        driver.spi.ext[0x73] = 0x41;

        let marcstate = driver.read_marc_state().unwrap();
        assert_eq!(Some(MarcState::IDLE), marcstate.marc_state());
        assert_eq!(0b10, marcstate.marc_2pin_state());
    }

    #[test]
    fn fifo_byte_counts_come_from_the_extended_space() {
        let mut driver = driver();
        driver.spi.ext[0xD6] = 17;
        driver.spi.ext[0xD7] = 5;

        assert_eq!(17, driver.tx_fifo_bytes().unwrap());
        assert_eq!(5, driver.rx_fifo_bytes().unwrap());
    }
}
