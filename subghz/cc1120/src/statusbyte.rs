use bitfield::bitfield;
use core::mem::transmute;

bitfield! {
    /// The status byte clocked out on SO while a header byte, data byte, or
    /// command strobe is clocked in on SI.
    #[derive(Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct StatusByte(u8);
    /// Stays high until power and crystal have stabilized.
    /// Should always be low when using the SPI interface.
    pub chip_rdyn, _: 7;
    /// Indicates the current main state machine mode.
    state_bits, _: 6, 4;
    reserved, _: 3, 0;
}

impl core::fmt::Debug for StatusByte {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("StatusByte").field(&self.0).finish()
    }
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    IDLE = 0b000,
    RX = 0b001,
    TX = 0b010,
    FSTXON = 0b011,
    CALIBRATE = 0b100,
    SETTLING = 0b101,
    RX_FIFO_ERROR = 0b110,
    TX_FIFO_ERROR = 0b111,
}

impl StatusByte {
    pub fn state(self) -> State {
        // All eight 3-bit patterns are defined states.
        unsafe { transmute(self.state_bits()) }
    }

    /// true if the chip is ready, false otherwise
    pub fn chip_rdy(self) -> bool {
        !self.chip_rdyn()
    }
}
