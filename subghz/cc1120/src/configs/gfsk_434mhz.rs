use crate::{
    config::ConfigPatch,
    regs::{ext, pri},
};

/// 2-GFSK link configuration for the 434 MHz band.
///
/// Derived from TI Smart RF Studio register export for the CC1120:
/// 434.0 MHz carrier, 50 ksps symbol rate, 25 kHz deviation, 100 kHz RX
/// filter bandwidth, 32 MHz crystal. GPIO3/GPIO1 carry PKT_SYNC_RXTX with
/// inverted polarity, GPIO0 carries TXFIFO_THR.
pub const GFSK_434MHZ: ConfigPatch<'static> = ConfigPatch::new(&[
    (pri::IOCFG3, 0xB0),         // GPIO3 IO Pin Configuration
    (pri::IOCFG2, 0x06),         // GPIO2 IO Pin Configuration
    (pri::IOCFG1, 0xB0),         // GPIO1 IO Pin Configuration
    (pri::IOCFG0, 0x40),         // GPIO0 IO Pin Configuration
    (pri::SYNC_CFG1, 0x08),      // Sync Word Detection Configuration Reg. 1
    (pri::DEVIATION_M, 0x3A),    // Frequency Deviation Configuration
    (pri::MODCFG_DEV_E, 0x0A),   // Modulation Format and Frequency Deviation Configuration
    (pri::DCFILT_CFG, 0x1C),     // Digital DC Removal Configuration
    (pri::PREAMBLE_CFG1, 0x18),  // Preamble Length Configuration Reg. 1
    (pri::IQIC, 0xC6),           // Digital Image Channel Compensation Configuration
    (pri::CHAN_BW, 0x08),        // Channel Filter Configuration
    (pri::MDMCFG0, 0x05),        // General Modem Parameter Configuration Reg. 0
    (pri::SYMBOL_RATE2, 0x73),   // Symbol Rate Configuration Exponent and Mantissa [19:16]
    (pri::AGC_REF, 0x20),        // AGC Reference Level Configuration
    (pri::AGC_CS_THR, 0x19),     // Carrier Sense Threshold Configuration
    (pri::AGC_CFG1, 0xA9),       // AGC Configuration Reg. 1
    (pri::AGC_CFG0, 0xCF),       // AGC Configuration Reg. 0
    (pri::FIFO_CFG, 0x00),       // FIFO Configuration
    (pri::FS_CFG, 0x14),         // Frequency Synthesizer Configuration
    (pri::PKT_CFG0, 0x20),      // Packet Configuration Reg. 0
    (pri::PA_CFG0, 0x7D),        // Power Amplifier Configuration Reg. 0
    (pri::PKT_LEN, 0xFF),        // Packet Length Configuration
    (ext::IF_MIX_CFG, 0x00),     // IF Mix Configuration
    (ext::FREQOFF_CFG, 0x22),    // Frequency Offset Correction Configuration
    (ext::FREQ2, 0x6C),          // Frequency Configuration [23:16]
    (ext::FREQ1, 0x7A),          // Frequency Configuration [15:8]
    (ext::FREQ0, 0xE1),          // Frequency Configuration [7:0]
    (ext::FS_DIG1, 0x00),        // Frequency Synthesizer Digital Reg. 1
    (ext::FS_DIG0, 0x5F),        // Frequency Synthesizer Digital Reg. 0
    (ext::FS_CAL1, 0x40),        // Frequency Synthesizer Calibration Reg. 1
    (ext::FS_CAL0, 0x0E),        // Frequency Synthesizer Calibration Reg. 0
    (ext::FS_DIVTWO, 0x03),      // Frequency Synthesizer Divide by 2
    (ext::FS_DSM0, 0x33),        // FS Digital Synthesizer Module Configuration Reg. 0
    (ext::FS_DVC0, 0x17),        // Frequency Synthesizer Divider Chain Configuration
    (ext::FS_PFD, 0x50),         // Frequency Synthesizer Phase Frequency Detector
    (ext::FS_PRE, 0x6E),         // Frequency Synthesizer Prescaler Configuration
    (ext::FS_REG_DIV_CML, 0x14), // Frequency Synthesizer Divider Regulator Configuration
    (ext::FS_SPARE, 0xAC),       // Frequency Synthesizer Spare
    (ext::FS_VCO0, 0xB4),        // FS Voltage Controlled Oscillator Configuration Reg. 0
    (ext::XOSC5, 0x0E),          // Crystal Oscillator Configuration Reg. 5
    (ext::XOSC1, 0x03),          // Crystal Oscillator Configuration Reg. 1
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::{BandSelectValue, FsCfg, LengthConfigValue, PktCfg0};

    #[test]
    fn carrier_is_in_the_410_to_480_band() {
        let fs_cfg = FsCfg(GFSK_434MHZ.get(pri::FS_CFG).unwrap());
        assert_eq!(BandSelectValue::Band410To480 as u8, fs_cfg.fsd_bandselect());
    }

    #[test]
    fn packet_mode_starts_out_variable_length() {
        let pkt_cfg0 = PktCfg0(GFSK_434MHZ.get(pri::PKT_CFG0).unwrap());
        assert_eq!(
            LengthConfigValue::VariablePacketLengthMode,
            pkt_cfg0.length_config()
        );
    }

    #[test]
    fn every_entry_addresses_a_valid_register() {
        for &(address, _) in GFSK_434MHZ.entries {
            assert!(address.is_valid(), "{address:?}");
        }
    }
}
