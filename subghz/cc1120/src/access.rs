//! SPI access header construction.
//!
//! Every transaction starts with one header byte: a direction bit, a burst
//! bit, and a 6-bit address field. Four access classes share this framing
//! with different address rules, so the header logic lives in one place
//! instead of being repeated per operation.

use crate::{error::DriverError, regs::RegisterAddress};

pub(crate) const R_BIT: u8 = 1 << 7;
pub(crate) const BURST_BIT: u8 = 1 << 6;
/// Header address selecting the extended register space.
pub(crate) const EXT_ADDR: u8 = 0x2F;
/// Header address for direct (addressed) FIFO access.
pub(crate) const DIR_FIFO_ACCESS: u8 = 0x3E;
/// Header address for sequential FIFO access.
pub(crate) const FIFO_ACCESS: u8 = 0x3F;

/// First byte of the TX FIFO in the direct-access window.
pub const FIFO_TX_START: u8 = 0x00;
/// Last byte of the TX FIFO in the direct-access window.
pub const FIFO_TX_END: u8 = 0x7F;
/// First byte of the RX FIFO in the direct-access window.
pub const FIFO_RX_START: u8 = 0x80;
/// Last byte of the RX FIFO in the direct-access window.
pub const FIFO_RX_END: u8 = 0xFF;

/// Command strobes. A strobe is a one-byte command with no data phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strobe {
    /// Reset chip
    SRES = 0x30,
    /// Enable and calibrate frequency synthesizer
    SFSTXON = 0x31,
    /// Turn off crystal oscillator (enter XOFF state when CSn is de-asserted)
    SXOFF = 0x32,
    /// Calibrate frequency synthesizer and turn it off
    SCAL = 0x33,
    /// Enable RX
    SRX = 0x34,
    /// Enable TX
    STX = 0x35,
    /// Exit RX/TX and turn off frequency synthesizer
    SIDLE = 0x36,
    /// Automatic frequency compensation
    SAFC = 0x37,
    /// Start automatic RX polling sequence
    SWOR = 0x38,
    /// Enter SLEEP mode when CSn is de-asserted
    SPWD = 0x39,
    /// Flush the RX FIFO
    SFRX = 0x3A,
    /// Flush the TX FIFO
    SFTX = 0x3B,
    /// Reset the eWOR real time clock
    SWORRST = 0x3C,
    /// No operation - may be used to get access to the chip status byte
    SNOP = 0x3D,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Read,
    Write,
}

/// Target of a framed access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// Primary or extended register space.
    Register(RegisterAddress),
    /// Sequential FIFO access through the chip's internal pointer.
    Fifo,
    /// Addressed access into the 256-byte FIFO memory window.
    FifoDirect(u8),
}

/// A validated access: header byte plus optional address phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Access {
    target: Target,
    direction: Direction,
    burst: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AccessError {
    InvalidRegister,
    InvalidLength,
}

impl AccessError {
    pub(crate) fn into_driver_error<SpiE>(self) -> DriverError<SpiE> {
        match self {
            AccessError::InvalidRegister => DriverError::InvalidRegister,
            AccessError::InvalidLength => DriverError::InvalidLength,
        }
    }
}

impl Access {
    /// Validate and build an access for `len` payload bytes.
    pub(crate) fn new(target: Target, direction: Direction, len: usize) -> Result<Self, AccessError> {
        if len == 0 {
            return Err(AccessError::InvalidLength);
        }
        if let Target::Register(address) = target {
            if !address.is_valid() {
                return Err(AccessError::InvalidRegister);
            }
        }
        // The direct FIFO window covers the full byte range, TX 0x00..=0x7F
        // followed by RX 0x80..=0xFF, so a direct address cannot be out of
        // bounds.
        Ok(Self {
            target,
            direction,
            burst: len > 1,
        })
    }

    pub(crate) const fn header(&self) -> u8 {
        let dir = match self.direction {
            Direction::Read => R_BIT,
            Direction::Write => 0,
        };
        let burst = if self.burst { BURST_BIT } else { 0 };
        let field = match self.target {
            Target::Register(address) => {
                if address.is_primary() {
                    address.addr()
                } else {
                    EXT_ADDR
                }
            }
            Target::Fifo => FIFO_ACCESS,
            Target::FifoDirect(_) => DIR_FIFO_ACCESS,
        };
        dir | burst | field
    }

    /// The literal address byte sent after the header, if the access class
    /// has an address phase.
    pub(crate) const fn address_phase(&self) -> Option<u8> {
        match self.target {
            Target::Register(address) if !address.is_primary() => Some(address.addr()),
            Target::FifoDirect(addr) => Some(addr),
            _ => None,
        }
    }

    /// Extended-space accesses define the return channel to be all zeros
    /// during the address phase; a non-zero echo is a framing failure.
    pub(crate) const fn checks_echo(&self) -> bool {
        matches!(self.target, Target::Register(address) if !address.is_primary())
    }
}
