use crate::regs::RegisterAddress;

/// Error raised by every SPI access operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<SpiE> {
    /// The address is outside the legal range for the requested access class.
    InvalidRegister,
    /// The length parameter is zero.
    InvalidLength,
    /// Caller-level misuse, e.g. a zero-length packet passed to `send`.
    InvalidParam,
    /// The readiness retry budget was exhausted on a header or data byte.
    ChipNotReady,
    /// The extended-address echo byte was non-zero.
    ExtAddrEchoMismatch,
    /// Transport failure reported by the SPI interface.
    Spi(SpiE),
}

impl<SpiE> From<SpiE> for DriverError<SpiE> {
    fn from(value: SpiE) -> Self {
        Self::Spi(value)
    }
}

/// Error raised when applying an ordered register-setting table.
///
/// Application stops at the first failing entry; `index` and `address`
/// identify the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError<SpiE> {
    pub index: usize,
    pub address: RegisterAddress,
    pub source: DriverError<SpiE>,
}
