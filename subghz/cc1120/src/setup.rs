//! Register-math helpers for tuning the radio outside of a full config patch.
//!
//! Field updates go through masked read-modify-write, untouched bits of the
//! register keep their current value.

use crate::{
    access::Strobe,
    driver::Driver,
    error::DriverError,
    regs::{
        ext, pri, AddressCheckValue, BandSelectValue, ChanBw, CrcConfigValue, FsCfg,
        LengthConfigValue, ModFormatValue, ModcfgDevE, OffModeValue, PktCfg0, PktCfg1,
        PreambleCfg1, RfendCfg0, RfendCfg1, SyncCfg0,
    },
    traits, FXOSC,
};

/// Which packet-end transition a [`Driver::configure_transition`] call
/// reconfigures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionTarget {
    Rx,
    Tx,
}

impl<Spi: traits::Spi> Driver<Spi> {
    /// Set the modulation format, leaving deviation settings untouched.
    pub fn set_modulation(&mut self, format: ModFormatValue) -> Result<(), DriverError<Spi::Error>> {
        self.modify_reg(pri::MODCFG_DEV_E, |value| {
            let mut modcfg = ModcfgDevE(value);
            modcfg.set_mod_format_value(format);
            modcfg.0
        })
    }

    /// Program the symbol rate in symbols per second.
    ///
    /// Uses a zero exponent, so the 20-bit mantissa bounds the reachable
    /// rates; rates whose mantissa overflows are rejected.
    pub fn set_symbol_rate(&mut self, sps: u32) -> Result<(), DriverError<Spi::Error>> {
        // srate_m = 2^38 * rate_ksps / f_xosc with srate_e = 0
        let mantissa = (sps as u64)
            .checked_mul(1 << 38)
            .map(|scaled| scaled / (1000 * FXOSC as u64))
            .ok_or(DriverError::InvalidParam)?;
        if mantissa >= 1 << 20 {
            return Err(DriverError::InvalidParam);
        }

        self.write_regs(
            pri::SYMBOL_RATE2,
            &[
                (mantissa >> 16) as u8,
                (mantissa >> 8) as u8,
                mantissa as u8,
            ],
        )
    }

    /// Program the RX channel filter for the requested bandwidth in Hz.
    ///
    /// The decimation factors already configured in CHAN_BW are kept; only
    /// the baseband CIC decimation is recomputed.
    pub fn set_rx_filter_bandwidth(&mut self, hz: u32) -> Result<(), DriverError<Spi::Error>> {
        if hz == 0 {
            return Err(DriverError::InvalidParam);
        }

        let mut chan_bw = ChanBw(self.read_reg(pri::CHAN_BW)?);
        let (decimation, chfilt) = chan_bw_factors(&chan_bw);

        let bb_cic_decfact = FXOSC as u64 / (decimation as u64 * hz as u64 * chfilt as u64);
        if bb_cic_decfact == 0 || bb_cic_decfact >= 1 << 6 {
            return Err(DriverError::InvalidParam);
        }

        chan_bw.set_bb_cic_decfact(bb_cic_decfact as u8);
        self.write_reg(pri::CHAN_BW, chan_bw.0)
    }

    /// Compute the currently configured RX filter bandwidth in Hz.
    pub fn rx_filter_bandwidth(&mut self) -> Result<u32, DriverError<Spi::Error>> {
        let chan_bw = ChanBw(self.read_reg(pri::CHAN_BW)?);
        let (decimation, chfilt) = chan_bw_factors(&chan_bw);

        let bb_cic_decfact = chan_bw.bb_cic_decfact() as u32;
        if bb_cic_decfact == 0 {
            return Err(DriverError::InvalidParam);
        }
        Ok(FXOSC / (decimation * bb_cic_decfact * chfilt))
    }

    /// Program the AGC reference level from the configured RX filter
    /// bandwidth.
    ///
    /// AGC_REFERENCE = 10 log10(bandwidth) - 106 - rssi_offset, with the
    /// logarithm evaluated in integer fixed point (worst case error is
    /// about 0.3 dB).
    pub fn set_agc_ref(&mut self, rssi_offset: i8) -> Result<(), DriverError<Spi::Error>> {
        let bandwidth = self.rx_filter_bandwidth()?;
        let reference = ten_log10(bandwidth) as i32 - 106 - rssi_offset as i32;
        if !(0..=255).contains(&reference) {
            return Err(DriverError::InvalidParam);
        }
        self.write_reg(pri::AGC_REF, reference as u8)
    }

    /// Configure sync word detection and the 32-bit sync word itself.
    pub fn configure_sync_word(
        &mut self,
        mode: u8,
        allowed_bit_errors: u8,
        word: u32,
    ) -> Result<(), DriverError<Spi::Error>> {
        if mode >= 1 << 3 || allowed_bit_errors >= 1 << 2 {
            return Err(DriverError::InvalidParam);
        }

        self.modify_reg(pri::SYNC_CFG0, |value| {
            let mut sync_cfg0 = SyncCfg0(value);
            sync_cfg0.set_sync_mode(mode);
            sync_cfg0.set_sync_num_error(allowed_bit_errors);
            sync_cfg0.0
        })?;
        self.write_regs(pri::SYNC3, &word.to_be_bytes())
    }

    /// Configure the preamble pattern and the number of preamble bytes.
    pub fn configure_preamble(
        &mut self,
        word: u8,
        count: u8,
    ) -> Result<(), DriverError<Spi::Error>> {
        if word >= 1 << 2 || count >= 1 << 4 {
            return Err(DriverError::InvalidParam);
        }

        self.modify_reg(pri::PREAMBLE_CFG1, |value| {
            let mut preamble_cfg1 = PreambleCfg1(value);
            preamble_cfg1.set_preamble_word(word);
            preamble_cfg1.set_num_preamble(count);
            preamble_cfg1.0
        })
    }

    /// Select how the packet length is determined.
    pub fn set_length_field_config(
        &mut self,
        mode: LengthConfigValue,
        pkt_bit_len: u8,
    ) -> Result<(), DriverError<Spi::Error>> {
        if pkt_bit_len >= 1 << 3 {
            return Err(DriverError::InvalidParam);
        }

        self.modify_reg(pri::PKT_CFG0, |value| {
            let mut pkt_cfg0 = PktCfg0(value);
            pkt_cfg0.set_length_config(mode);
            pkt_cfg0.set_pkt_bit_len(pkt_bit_len);
            pkt_cfg0.0
        })
    }

    /// Select the CRC polynomial, or disable the checksum entirely.
    pub fn set_checksum_config(
        &mut self,
        config: CrcConfigValue,
    ) -> Result<(), DriverError<Spi::Error>> {
        self.modify_reg(pri::PKT_CFG1, |value| {
            let mut pkt_cfg1 = PktCfg1(value);
            pkt_cfg1.set_crc_cfg(config);
            pkt_cfg1.0
        })
    }

    /// Configure hardware address filtering of received packets.
    pub fn set_address_check(
        &mut self,
        config: AddressCheckValue,
    ) -> Result<(), DriverError<Spi::Error>> {
        self.modify_reg(pri::PKT_CFG1, |value| {
            let mut pkt_cfg1 = PktCfg1(value);
            pkt_cfg1.set_addr_check_cfg(config);
            pkt_cfg1.0
        })
    }

    /// Select the state the chip enters after finishing a packet.
    pub fn configure_transition(
        &mut self,
        target: TransitionTarget,
        mode: OffModeValue,
    ) -> Result<(), DriverError<Spi::Error>> {
        match target {
            TransitionTarget::Rx => self.modify_reg(pri::RFEND_CFG1, |value| {
                let mut rfend_cfg1 = RfendCfg1(value);
                rfend_cfg1.set_rxoff_mode(mode);
                rfend_cfg1.0
            }),
            TransitionTarget::Tx => self.modify_reg(pri::RFEND_CFG0, |value| {
                let mut rfend_cfg0 = RfendCfg0(value);
                rfend_cfg0.set_txoff_mode(mode);
                rfend_cfg0.0
            }),
        }
    }

    /// Select the RF band and with it the LO divider.
    pub fn set_rf_band(&mut self, band: BandSelectValue) -> Result<(), DriverError<Spi::Error>> {
        self.modify_reg(pri::FS_CFG, |value| {
            let mut fs_cfg = FsCfg(value);
            fs_cfg.set_fsd_bandselect(band);
            fs_cfg.0
        })
    }

    /// Program the carrier frequency in Hz for the currently selected band.
    pub fn set_rf_frequency(&mut self, hz: u32) -> Result<(), DriverError<Spi::Error>> {
        let fs_cfg = FsCfg(self.read_reg(pri::FS_CFG)?);
        let lo_divider = match fs_cfg.fsd_bandselect() {
            0b1011 => 24,
            setting => 2 * setting as u64,
        };

        // freq = 2^16 * f_vco / f_xosc, f_vco = carrier * LO divider
        let freq = (1u64 << 16) * hz as u64 * lo_divider / FXOSC as u64;
        if freq >= 1 << 24 {
            return Err(DriverError::InvalidParam);
        }

        self.write_regs(
            ext::FREQ2,
            &[(freq >> 16) as u8, (freq >> 8) as u8, freq as u8],
        )
    }

    /// Set the TX output power in dBm, valid from -16 to 14 dBm.
    pub fn set_tx_power(&mut self, dbm: i8) -> Result<(), DriverError<Spi::Error>> {
        if !(-16..=14).contains(&dbm) {
            return Err(DriverError::InvalidParam);
        }

        // PA_POWER_RAMP = 2 * (power + 18) - 1
        let ramp = ((dbm as i16 + 18) * 2 - 1) as u8;
        self.write_reg(pri::PA_CFG2, ramp)
    }

    /// Flush the RX FIFO. Only valid in IDLE or RX_FIFO_ERROR.
    pub fn flush_rx(&mut self) -> Result<(), DriverError<Spi::Error>> {
        self.strobe(Strobe::SFRX)?;
        Ok(())
    }

    /// Flush the TX FIFO. Only valid in IDLE or TX_FIFO_ERROR.
    pub fn flush_tx(&mut self) -> Result<(), DriverError<Spi::Error>> {
        self.strobe(Strobe::SFTX)?;
        Ok(())
    }
}

fn chan_bw_factors(chan_bw: &ChanBw) -> (u32, u32) {
    let decimation = if chan_bw.adc_cic_decfact() { 32 } else { 20 };
    let chfilt = if chan_bw.chfilt_bypass() { 2 } else { 8 };
    (decimation, chfilt)
}

/// Integer 10 * log10: binary log in Q8 with linear interpolation of the
/// mantissa, scaled by 10 * log10(2).
fn ten_log10(x: u32) -> u32 {
    if x == 0 {
        return 0;
    }
    let exp = 31 - x.leading_zeros();
    let mantissa = if exp >= 8 {
        x >> (exp - 8)
    } else {
        x << (8 - exp)
    };
    let log2_q8 = (exp << 8) + (mantissa - 256);
    log2_q8 * 301 / 25600
}
