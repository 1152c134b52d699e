//! mockall mocks for the blocking embedded-hal traits.

pub mod digital;
pub mod spi;
