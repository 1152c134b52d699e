#![cfg_attr(not(test), no_std)]

mod access;
mod config;
pub mod configs;
mod driver;
mod error;
mod packet;
pub mod regs;
pub mod selftest;
mod setup;
mod statusbyte;
#[cfg(test)]
mod testutil;
pub mod traits;

/// Crystal oscillator frequency in Hz.
pub const FXOSC: u32 = 32_000_000;

pub const TX_FIFO_SIZE: usize = 128;
pub const RX_FIFO_SIZE: usize = 128;

/// Longest payload a single variable-length packet can carry.
pub const MAX_PACKET_LEN: usize = 255;

pub use self::{
    access::{Strobe, FIFO_RX_END, FIFO_RX_START, FIFO_TX_END, FIFO_TX_START},
    config::ConfigPatch,
    error::{ConfigError, DriverError},
    driver::Driver,
    setup::TransitionTarget,
    statusbyte::{State, StatusByte},
};
