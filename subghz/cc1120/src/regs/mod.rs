//! CC1120 register address space and bit layouts.
//!
//! Addresses follow the user guide notation: primary registers are
//! `0x0000..=0x002E`, extended registers carry the `0x2F` page in the high
//! byte (e.g. MARCSTATE is `0x2F73`).

use bitfield::bitfield;

mod marc_state;
pub use marc_state::MarcState;

/// A register address in either the primary or the extended space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress(pub u16);

const EXT_PAGE: u16 = 0x2F00;

impl RegisterAddress {
    pub const fn is_primary(&self) -> bool {
        self.0 < 0x2F
    }

    pub const fn is_extended(&self) -> bool {
        self.0 & 0xFF00 == EXT_PAGE
    }

    /// The low address byte that goes on the wire.
    pub const fn addr(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Whether the address names a documented register.
    ///
    /// Primary addresses end at PKT_LEN; 0x2F is the extended-space access
    /// sentinel, never a register. Extended addresses are only valid inside
    /// the documented blocks; the gaps between PA_CFG3 and WOR_TIME1,
    /// XOSC_TEST0 and RXFIRST, and beyond FIFO_NUM_RXBYTES are rejected.
    pub const fn is_valid(&self) -> bool {
        if self.is_primary() {
            true
        } else if self.is_extended() {
            let a = self.addr();
            a <= ext::PA_CFG3.addr()
                || (a >= ext::WOR_TIME1.addr() && a <= ext::XOSC_TEST0.addr())
                || (a >= ext::RXFIRST.addr() && a <= ext::FIFO_NUM_RXBYTES.addr())
        } else {
            false
        }
    }
}

/// Primary register space, 0x00..=0x2E.
pub mod pri {
    use super::RegisterAddress;

    pub const IOCFG3: RegisterAddress = RegisterAddress(0x0000);
    pub const IOCFG2: RegisterAddress = RegisterAddress(0x0001);
    pub const IOCFG1: RegisterAddress = RegisterAddress(0x0002);
    pub const IOCFG0: RegisterAddress = RegisterAddress(0x0003);
    pub const SYNC3: RegisterAddress = RegisterAddress(0x0004);
    pub const SYNC2: RegisterAddress = RegisterAddress(0x0005);
    pub const SYNC1: RegisterAddress = RegisterAddress(0x0006);
    pub const SYNC0: RegisterAddress = RegisterAddress(0x0007);
    pub const SYNC_CFG1: RegisterAddress = RegisterAddress(0x0008);
    pub const SYNC_CFG0: RegisterAddress = RegisterAddress(0x0009);
    pub const DEVIATION_M: RegisterAddress = RegisterAddress(0x000A);
    pub const MODCFG_DEV_E: RegisterAddress = RegisterAddress(0x000B);
    pub const DCFILT_CFG: RegisterAddress = RegisterAddress(0x000C);
    pub const PREAMBLE_CFG1: RegisterAddress = RegisterAddress(0x000D);
    pub const PREAMBLE_CFG0: RegisterAddress = RegisterAddress(0x000E);
    pub const FREQ_IF_CFG: RegisterAddress = RegisterAddress(0x000F);
    pub const IQIC: RegisterAddress = RegisterAddress(0x0010);
    pub const CHAN_BW: RegisterAddress = RegisterAddress(0x0011);
    pub const MDMCFG1: RegisterAddress = RegisterAddress(0x0012);
    pub const MDMCFG0: RegisterAddress = RegisterAddress(0x0013);
    pub const SYMBOL_RATE2: RegisterAddress = RegisterAddress(0x0014);
    pub const SYMBOL_RATE1: RegisterAddress = RegisterAddress(0x0015);
    pub const SYMBOL_RATE0: RegisterAddress = RegisterAddress(0x0016);
    pub const AGC_REF: RegisterAddress = RegisterAddress(0x0017);
    pub const AGC_CS_THR: RegisterAddress = RegisterAddress(0x0018);
    pub const AGC_GAIN_ADJUST: RegisterAddress = RegisterAddress(0x0019);
    pub const AGC_CFG3: RegisterAddress = RegisterAddress(0x001A);
    pub const AGC_CFG2: RegisterAddress = RegisterAddress(0x001B);
    pub const AGC_CFG1: RegisterAddress = RegisterAddress(0x001C);
    pub const AGC_CFG0: RegisterAddress = RegisterAddress(0x001D);
    pub const FIFO_CFG: RegisterAddress = RegisterAddress(0x001E);
    pub const DEV_ADDR: RegisterAddress = RegisterAddress(0x001F);
    pub const SETTLING_CFG: RegisterAddress = RegisterAddress(0x0020);
    pub const FS_CFG: RegisterAddress = RegisterAddress(0x0021);
    pub const WOR_CFG1: RegisterAddress = RegisterAddress(0x0022);
    pub const WOR_CFG0: RegisterAddress = RegisterAddress(0x0023);
    pub const WOR_EVENT0_MSB: RegisterAddress = RegisterAddress(0x0024);
    pub const WOR_EVENT0_LSB: RegisterAddress = RegisterAddress(0x0025);
    pub const PKT_CFG2: RegisterAddress = RegisterAddress(0x0026);
    pub const PKT_CFG1: RegisterAddress = RegisterAddress(0x0027);
    pub const PKT_CFG0: RegisterAddress = RegisterAddress(0x0028);
    pub const RFEND_CFG1: RegisterAddress = RegisterAddress(0x0029);
    pub const RFEND_CFG0: RegisterAddress = RegisterAddress(0x002A);
    pub const PA_CFG2: RegisterAddress = RegisterAddress(0x002B);
    pub const PA_CFG1: RegisterAddress = RegisterAddress(0x002C);
    pub const PA_CFG0: RegisterAddress = RegisterAddress(0x002D);
    pub const PKT_LEN: RegisterAddress = RegisterAddress(0x002E);
}

/// Extended register space, reached through the 0x2F access sentinel.
pub mod ext {
    use super::RegisterAddress;

    pub const IF_MIX_CFG: RegisterAddress = RegisterAddress(0x2F00);
    pub const FREQOFF_CFG: RegisterAddress = RegisterAddress(0x2F01);
    pub const TOC_CFG: RegisterAddress = RegisterAddress(0x2F02);
    pub const MARC_SPARE: RegisterAddress = RegisterAddress(0x2F03);
    pub const ECG_CFG: RegisterAddress = RegisterAddress(0x2F04);
    pub const CFM_DATA_CFG: RegisterAddress = RegisterAddress(0x2F05);
    pub const EXT_CTRL: RegisterAddress = RegisterAddress(0x2F06);
    pub const RCCAL_FINE: RegisterAddress = RegisterAddress(0x2F07);
    pub const RCCAL_COARSE: RegisterAddress = RegisterAddress(0x2F08);
    pub const RCCAL_OFFSET: RegisterAddress = RegisterAddress(0x2F09);
    pub const FREQOFF1: RegisterAddress = RegisterAddress(0x2F0A);
    pub const FREQOFF0: RegisterAddress = RegisterAddress(0x2F0B);
    pub const FREQ2: RegisterAddress = RegisterAddress(0x2F0C);
    pub const FREQ1: RegisterAddress = RegisterAddress(0x2F0D);
    pub const FREQ0: RegisterAddress = RegisterAddress(0x2F0E);
    pub const IF_ADC2: RegisterAddress = RegisterAddress(0x2F0F);
    pub const IF_ADC1: RegisterAddress = RegisterAddress(0x2F10);
    pub const IF_ADC0: RegisterAddress = RegisterAddress(0x2F11);
    pub const FS_DIG1: RegisterAddress = RegisterAddress(0x2F12);
    pub const FS_DIG0: RegisterAddress = RegisterAddress(0x2F13);
    pub const FS_CAL3: RegisterAddress = RegisterAddress(0x2F14);
    pub const FS_CAL2: RegisterAddress = RegisterAddress(0x2F15);
    pub const FS_CAL1: RegisterAddress = RegisterAddress(0x2F16);
    pub const FS_CAL0: RegisterAddress = RegisterAddress(0x2F17);
    pub const FS_CHP: RegisterAddress = RegisterAddress(0x2F18);
    pub const FS_DIVTWO: RegisterAddress = RegisterAddress(0x2F19);
    pub const FS_DSM1: RegisterAddress = RegisterAddress(0x2F1A);
    pub const FS_DSM0: RegisterAddress = RegisterAddress(0x2F1B);
    pub const FS_DVC1: RegisterAddress = RegisterAddress(0x2F1C);
    pub const FS_DVC0: RegisterAddress = RegisterAddress(0x2F1D);
    pub const FS_LBI: RegisterAddress = RegisterAddress(0x2F1E);
    pub const FS_PFD: RegisterAddress = RegisterAddress(0x2F1F);
    pub const FS_PRE: RegisterAddress = RegisterAddress(0x2F20);
    pub const FS_REG_DIV_CML: RegisterAddress = RegisterAddress(0x2F21);
    pub const FS_SPARE: RegisterAddress = RegisterAddress(0x2F22);
    pub const FS_VCO4: RegisterAddress = RegisterAddress(0x2F23);
    pub const FS_VCO3: RegisterAddress = RegisterAddress(0x2F24);
    pub const FS_VCO2: RegisterAddress = RegisterAddress(0x2F25);
    pub const FS_VCO1: RegisterAddress = RegisterAddress(0x2F26);
    pub const FS_VCO0: RegisterAddress = RegisterAddress(0x2F27);
    pub const GBIAS6: RegisterAddress = RegisterAddress(0x2F28);
    pub const GBIAS5: RegisterAddress = RegisterAddress(0x2F29);
    pub const GBIAS4: RegisterAddress = RegisterAddress(0x2F2A);
    pub const GBIAS3: RegisterAddress = RegisterAddress(0x2F2B);
    pub const GBIAS2: RegisterAddress = RegisterAddress(0x2F2C);
    pub const GBIAS1: RegisterAddress = RegisterAddress(0x2F2D);
    pub const GBIAS0: RegisterAddress = RegisterAddress(0x2F2E);
    pub const IFAMP: RegisterAddress = RegisterAddress(0x2F2F);
    pub const LNA: RegisterAddress = RegisterAddress(0x2F30);
    pub const RXMIX: RegisterAddress = RegisterAddress(0x2F31);
    pub const XOSC5: RegisterAddress = RegisterAddress(0x2F32);
    pub const XOSC4: RegisterAddress = RegisterAddress(0x2F33);
    pub const XOSC3: RegisterAddress = RegisterAddress(0x2F34);
    pub const XOSC2: RegisterAddress = RegisterAddress(0x2F35);
    pub const XOSC1: RegisterAddress = RegisterAddress(0x2F36);
    pub const XOSC0: RegisterAddress = RegisterAddress(0x2F37);
    pub const ANALOG_SPARE: RegisterAddress = RegisterAddress(0x2F38);
    pub const PA_CFG3: RegisterAddress = RegisterAddress(0x2F39);

    pub const WOR_TIME1: RegisterAddress = RegisterAddress(0x2F64);
    pub const WOR_TIME0: RegisterAddress = RegisterAddress(0x2F65);
    pub const WOR_CAPTURE1: RegisterAddress = RegisterAddress(0x2F66);
    pub const WOR_CAPTURE0: RegisterAddress = RegisterAddress(0x2F67);
    pub const BIST: RegisterAddress = RegisterAddress(0x2F68);
    pub const DCFILTOFFSET_I1: RegisterAddress = RegisterAddress(0x2F69);
    pub const DCFILTOFFSET_I0: RegisterAddress = RegisterAddress(0x2F6A);
    pub const DCFILTOFFSET_Q1: RegisterAddress = RegisterAddress(0x2F6B);
    pub const DCFILTOFFSET_Q0: RegisterAddress = RegisterAddress(0x2F6C);
    pub const IQIE_I1: RegisterAddress = RegisterAddress(0x2F6D);
    pub const IQIE_I0: RegisterAddress = RegisterAddress(0x2F6E);
    pub const IQIE_Q1: RegisterAddress = RegisterAddress(0x2F6F);
    pub const IQIE_Q0: RegisterAddress = RegisterAddress(0x2F70);
    pub const RSSI1: RegisterAddress = RegisterAddress(0x2F71);
    pub const RSSI0: RegisterAddress = RegisterAddress(0x2F72);
    pub const MARCSTATE: RegisterAddress = RegisterAddress(0x2F73);
    pub const LQI_VAL: RegisterAddress = RegisterAddress(0x2F74);
    pub const PQT_SYNC_ERR: RegisterAddress = RegisterAddress(0x2F75);
    pub const DEM_STATUS: RegisterAddress = RegisterAddress(0x2F76);
    pub const FREQOFF_EST1: RegisterAddress = RegisterAddress(0x2F77);
    pub const FREQOFF_EST0: RegisterAddress = RegisterAddress(0x2F78);
    pub const AGC_GAIN3: RegisterAddress = RegisterAddress(0x2F79);
    pub const AGC_GAIN2: RegisterAddress = RegisterAddress(0x2F7A);
    pub const AGC_GAIN1: RegisterAddress = RegisterAddress(0x2F7B);
    pub const AGC_GAIN0: RegisterAddress = RegisterAddress(0x2F7C);
    pub const CFM_RX_DATA_OUT: RegisterAddress = RegisterAddress(0x2F7D);
    pub const CFM_TX_DATA_IN: RegisterAddress = RegisterAddress(0x2F7E);
    pub const ASK_SOFT_RX_DATA: RegisterAddress = RegisterAddress(0x2F7F);
    pub const RNDGEN: RegisterAddress = RegisterAddress(0x2F80);
    pub const MAGN2: RegisterAddress = RegisterAddress(0x2F81);
    pub const MAGN1: RegisterAddress = RegisterAddress(0x2F82);
    pub const MAGN0: RegisterAddress = RegisterAddress(0x2F83);
    pub const ANG1: RegisterAddress = RegisterAddress(0x2F84);
    pub const ANG0: RegisterAddress = RegisterAddress(0x2F85);
    pub const CHFILT_I2: RegisterAddress = RegisterAddress(0x2F86);
    pub const CHFILT_I1: RegisterAddress = RegisterAddress(0x2F87);
    pub const CHFILT_I0: RegisterAddress = RegisterAddress(0x2F88);
    pub const CHFILT_Q2: RegisterAddress = RegisterAddress(0x2F89);
    pub const CHFILT_Q1: RegisterAddress = RegisterAddress(0x2F8A);
    pub const CHFILT_Q0: RegisterAddress = RegisterAddress(0x2F8B);
    pub const GPIO_STATUS: RegisterAddress = RegisterAddress(0x2F8C);
    pub const FSCAL_CTRL: RegisterAddress = RegisterAddress(0x2F8D);
    pub const PHASE_ADJUST: RegisterAddress = RegisterAddress(0x2F8E);
    pub const PARTNUMBER: RegisterAddress = RegisterAddress(0x2F8F);
    pub const PARTVERSION: RegisterAddress = RegisterAddress(0x2F90);
    pub const SERIAL_STATUS: RegisterAddress = RegisterAddress(0x2F91);
    pub const MODEM_STATUS1: RegisterAddress = RegisterAddress(0x2F92);
    pub const MODEM_STATUS0: RegisterAddress = RegisterAddress(0x2F93);
    pub const MARC_STATUS1: RegisterAddress = RegisterAddress(0x2F94);
    pub const MARC_STATUS0: RegisterAddress = RegisterAddress(0x2F95);
    pub const PA_IFAMP_TEST: RegisterAddress = RegisterAddress(0x2F96);
    pub const FSRF_TEST: RegisterAddress = RegisterAddress(0x2F97);
    pub const PRE_TEST: RegisterAddress = RegisterAddress(0x2F98);
    pub const PRE_OVR: RegisterAddress = RegisterAddress(0x2F99);
    pub const ADC_TEST: RegisterAddress = RegisterAddress(0x2F9A);
    pub const DVC_TEST: RegisterAddress = RegisterAddress(0x2F9B);
    pub const ATEST: RegisterAddress = RegisterAddress(0x2F9C);
    pub const ATEST_LVDS: RegisterAddress = RegisterAddress(0x2F9D);
    pub const ATEST_MODE: RegisterAddress = RegisterAddress(0x2F9E);
    pub const XOSC_TEST1: RegisterAddress = RegisterAddress(0x2F9F);
    pub const XOSC_TEST0: RegisterAddress = RegisterAddress(0x2FA0);

    pub const RXFIRST: RegisterAddress = RegisterAddress(0x2FD2);
    pub const TXFIRST: RegisterAddress = RegisterAddress(0x2FD3);
    pub const RXLAST: RegisterAddress = RegisterAddress(0x2FD4);
    pub const TXLAST: RegisterAddress = RegisterAddress(0x2FD5);
    pub const NUM_TXBYTES: RegisterAddress = RegisterAddress(0x2FD6);
    pub const NUM_RXBYTES: RegisterAddress = RegisterAddress(0x2FD7);
    pub const FIFO_NUM_TXBYTES: RegisterAddress = RegisterAddress(0x2FD8);
    pub const FIFO_NUM_RXBYTES: RegisterAddress = RegisterAddress(0x2FD9);
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct ModcfgDevE(u8);
    pub modem_mode, set_modem_mode: 7, 6;
    pub mod_format, set_mod_format: 5, 3;
    pub dev_e, set_dev_e: 2, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct ChanBw(u8);
    pub chfilt_bypass, set_chfilt_bypass: 7;
    pub adc_cic_decfact, set_adc_cic_decfact: 6;
    pub bb_cic_decfact, set_bb_cic_decfact: 5, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct SymbolRate2(u8);
    pub srate_e, set_srate_e: 7, 4;
    pub srate_m_19_16, set_srate_m_19_16: 3, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct SyncCfg1(u8);
    reserved, _: 7;
    pub sync_thr, set_sync_thr: 6, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct SyncCfg0(u8);
    reserved, _: 7, 5;
    pub sync_mode, set_sync_mode: 4, 2;
    pub sync_num_error, set_sync_num_error: 1, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct PreambleCfg1(u8);
    reserved, _: 7, 6;
    pub num_preamble, set_num_preamble: 5, 2;
    pub preamble_word, set_preamble_word: 1, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct FifoCfg(u8);
    pub crc_autoflush, set_crc_autoflush: 7;
    pub fifo_thr, set_fifo_thr: 6, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct FsCfg(u8);
    reserved, _: 7, 5;
    pub fs_lock_en, set_fs_lock_en: 4;
    fsd_bandselect_bits, set_fsd_bandselect_bits: 3, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct PktCfg1(u8);
    reserved, _: 7;
    pub white_data, set_white_data: 6;
    addr_check_cfg_bits, set_addr_check_cfg_bits: 5, 4;
    crc_cfg_bits, set_crc_cfg_bits: 3, 2;
    pub byte_swap_en, set_byte_swap_en: 1;
    pub append_status, set_append_status: 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct PktCfg0(u8);
    reserved, _: 7;
    length_config_bits, set_length_config_bits: 6, 5;
    pub pkt_bit_len, set_pkt_bit_len: 4, 2;
    pub uart_mode_en, set_uart_mode_en: 1;
    pub uart_swap_en, set_uart_swap_en: 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct RfendCfg1(u8);
    reserved, _: 7, 6;
    rxoff_mode_bits, set_rxoff_mode_bits: 5, 4;
    pub rx_time, set_rx_time: 3, 1;
    pub rx_time_qual, set_rx_time_qual: 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct RfendCfg0(u8);
    reserved, _: 7, 6;
    txoff_mode_bits, set_txoff_mode_bits: 5, 4;
    pub term_on_bad_packet_en, set_term_on_bad_packet_en: 3;
    pub ant_div_rx_term_cfg, set_ant_div_rx_term_cfg: 2, 0;
}

bitfield! {
    #[derive(Clone, Copy)]
    pub struct Marcstate(u8);
    reserved, _: 7;
    pub marc_2pin_state, _: 6, 5;
    marc_state_bits, _: 4, 0;
}

/// LENGTH_CONFIG field of PKT_CFG0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LengthConfigValue {
    /// Packet length configured through PKT_LEN.
    FixedPacketLengthMode = 0,
    /// Packet length is the first byte after the sync word.
    VariablePacketLengthMode = 1,
    InfinitePacketLengthMode = 2,
    /// Length is the 5 LSB of the first byte after the sync word.
    VariableLength5Lsb = 3,
}

/// MOD_FORMAT field of MODCFG_DEV_E.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModFormatValue {
    Fsk2 = 0b000,
    Gfsk2 = 0b001,
    AskOok = 0b011,
    Fsk4 = 0b100,
    Gfsk4 = 0b101,
}

/// CRC_CFG field of PKT_CFG1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CrcConfigValue {
    Disabled = 0,
    /// CRC16(X16+X15+X2+1), initialized to 0xFFFF.
    Crc16Init0xFFFF = 1,
    /// CRC16(X16+X12+X5+1), initialized to 0x0000.
    Crc16Init0x0000 = 2,
}

/// ADDR_CHECK_CFG field of PKT_CFG1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressCheckValue {
    NoCheck = 0,
    Check = 1,
    CheckBroadcast0x00 = 2,
    CheckBroadcast0x00And0xFF = 3,
}

/// RXOFF_MODE / TXOFF_MODE fields of RFEND_CFG1 / RFEND_CFG0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OffModeValue {
    Idle = 0,
    Fstxon = 1,
    Tx = 2,
    Rx = 3,
}

/// FSD_BANDSELECT field of FS_CFG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandSelectValue {
    /// 820.0 - 960.0 MHz band (LO divider 4)
    Band820To960 = 0b0010,
    /// 410.0 - 480.0 MHz band (LO divider 8)
    Band410To480 = 0b0100,
    /// 273.3 - 320.0 MHz band (LO divider 12)
    Band273To320 = 0b0110,
    /// 205.0 - 240.0 MHz band (LO divider 16)
    Band205To240 = 0b1000,
    /// 164.0 - 192.0 MHz band (LO divider 20)
    Band164To192 = 0b1010,
    /// 136.7 - 160.0 MHz band (LO divider 24)
    Band136To160 = 0b1011,
}

impl PktCfg0 {
    pub fn length_config(&self) -> LengthConfigValue {
        match self.length_config_bits() {
            0 => LengthConfigValue::FixedPacketLengthMode,
            1 => LengthConfigValue::VariablePacketLengthMode,
            2 => LengthConfigValue::InfinitePacketLengthMode,
            _ => LengthConfigValue::VariableLength5Lsb,
        }
    }

    pub fn set_length_config(&mut self, value: LengthConfigValue) {
        self.set_length_config_bits(value as u8);
    }
}

impl PktCfg1 {
    pub fn set_crc_cfg(&mut self, value: CrcConfigValue) {
        self.set_crc_cfg_bits(value as u8);
    }

    pub fn set_addr_check_cfg(&mut self, value: AddressCheckValue) {
        self.set_addr_check_cfg_bits(value as u8);
    }
}

impl RfendCfg1 {
    pub fn set_rxoff_mode(&mut self, value: OffModeValue) {
        self.set_rxoff_mode_bits(value as u8);
    }
}

impl RfendCfg0 {
    pub fn set_txoff_mode(&mut self, value: OffModeValue) {
        self.set_txoff_mode_bits(value as u8);
    }
}

impl FsCfg {
    pub fn fsd_bandselect(&self) -> u8 {
        self.fsd_bandselect_bits()
    }

    pub fn set_fsd_bandselect(&mut self, value: BandSelectValue) {
        self.set_fsd_bandselect_bits(value as u8);
    }
}

impl ModcfgDevE {
    pub fn set_mod_format_value(&mut self, value: ModFormatValue) {
        self.set_mod_format(value as u8);
    }
}
