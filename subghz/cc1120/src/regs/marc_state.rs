use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::Marcstate;

/// MARC_STATE field of the MARCSTATE extended register.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarcState {
    SLEEP = 0b00000,
    IDLE = 0b00001,
    XOFF = 0b00010,
    BIAS_SETTLE_MC = 0b00011,
    REG_SETTLE_MC = 0b00100,
    MANCAL = 0b00101,
    BIAS_SETTLE = 0b00110,
    REG_SETTLE = 0b00111,
    STARTCAL = 0b01000,
    BWBOOST = 0b01001,
    FS_LOCK = 0b01010,
    IFADCON = 0b01011,
    ENDCAL = 0b01100,
    RX = 0b01101,
    RX_END = 0b01110,
    TXRX_SWITCH = 0b10000,
    RX_FIFO_ERR = 0b10001,
    FSTXON = 0b10010,
    TX = 0b10011,
    TX_END = 0b10100,
    RXTX_SWITCH = 0b10101,
    TX_FIFO_ERR = 0b10110,
    IFADCON_TXRX = 0b10111,
}

impl Marcstate {
    /// Decode the 5-bit state field; reserved values yield `None`.
    pub fn marc_state(&self) -> Option<MarcState> {
        MarcState::from_u8(self.marc_state_bits())
    }
}
