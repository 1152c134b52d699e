//! Register-file chip simulation used by the driver tests.
//!
//! Decodes the wire protocol byte by byte the way the chip does: one header
//! byte selecting the access class, an optional literal address byte, then
//! payload bytes. Every transfer clocks a status byte back while data goes
//! in, so reads return memory content and writes return status.

use core::convert::Infallible;

use crate::traits::Spi;

const NOT_READY: u8 = 0x80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FifoWrite(Vec<u8>),
    Strobe(u8),
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Header,
    ExtAddr { read: bool },
    DirectAddr { read: bool },
    Data { read: bool, loc: Loc },
}

#[derive(Debug, Clone, Copy)]
enum Loc {
    Pri(u8),
    Ext(u8),
    FifoSeq,
    FifoDirect(u8),
}

pub struct FakeChip {
    pub regs: [u8; 0x2F],
    pub ext: [u8; 0x100],
    pub fifo: [u8; 0x100],
    seq_wpos: u8,
    seq_rpos: u8,
    phase: Phase,
    selected: bool,
    pub select_count: usize,
    pub deselect_count: usize,
    pub transfer_count: usize,
    /// Number of upcoming transfers answered "chip not ready".
    pub not_ready_responses: usize,
    /// Answer "chip not ready" on every transfer after this many.
    pub stall_after: Option<usize>,
    /// Echo byte returned during the extended address phase.
    pub ext_echo: u8,
    pub events: Vec<Event>,
    pending_fifo_write: Vec<u8>,
}

impl FakeChip {
    pub fn new() -> Self {
        Self {
            regs: [0; 0x2F],
            ext: [0; 0x100],
            fifo: [0; 0x100],
            seq_wpos: 0,
            seq_rpos: 0x80,
            phase: Phase::Header,
            selected: false,
            select_count: 0,
            deselect_count: 0,
            transfer_count: 0,
            not_ready_responses: 0,
            stall_after: None,
            ext_echo: 0x00,
            events: Vec::new(),
            pending_fifo_write: Vec::new(),
        }
    }

    pub fn strobes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Strobe(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn fifo_writes(&self) -> Vec<Vec<u8>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::FifoWrite(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    fn flush_fifo_write(&mut self) {
        if !self.pending_fifo_write.is_empty() {
            let bytes = core::mem::take(&mut self.pending_fifo_write);
            self.events.push(Event::FifoWrite(bytes));
        }
    }

    fn decode_header(&mut self, byte: u8) -> Phase {
        let read = byte & 0x80 != 0;
        let field = byte & 0x3F;
        match field {
            0x2F => Phase::ExtAddr { read },
            0x3E => Phase::DirectAddr { read },
            0x3F => Phase::Data {
                read,
                loc: Loc::FifoSeq,
            },
            0x30..=0x3D => {
                self.events.push(Event::Strobe(byte));
                Phase::Header
            }
            addr => Phase::Data {
                read,
                loc: Loc::Pri(addr),
            },
        }
    }

    fn data_exchange(&mut self, byte: u8, read: bool, loc: Loc) -> (u8, Loc) {
        match loc {
            Loc::Pri(addr) => {
                let response = if read {
                    self.regs[addr as usize]
                } else {
                    self.regs[addr as usize] = byte;
                    0x00
                };
                (response, Loc::Pri((addr + 1).min(0x2E)))
            }
            Loc::Ext(addr) => {
                let response = if read {
                    self.ext[addr as usize]
                } else {
                    self.ext[addr as usize] = byte;
                    0x00
                };
                (response, Loc::Ext(addr.wrapping_add(1)))
            }
            Loc::FifoSeq => {
                let response = if read {
                    let value = self.fifo[self.seq_rpos as usize];
                    self.seq_rpos = 0x80 | (self.seq_rpos.wrapping_add(1) & 0x7F);
                    value
                } else {
                    self.fifo[(self.seq_wpos & 0x7F) as usize] = byte;
                    self.seq_wpos = self.seq_wpos.wrapping_add(1) & 0x7F;
                    self.pending_fifo_write.push(byte);
                    0x00
                };
                (response, Loc::FifoSeq)
            }
            Loc::FifoDirect(addr) => {
                let response = if read {
                    self.fifo[addr as usize]
                } else {
                    self.fifo[addr as usize] = byte;
                    0x00
                };
                (response, Loc::FifoDirect(addr.wrapping_add(1)))
            }
        }
    }
}

impl Spi for FakeChip {
    type Error = Infallible;

    fn select(&mut self) -> Result<(), Infallible> {
        assert!(!self.selected, "chip-select is not reentrant");
        self.selected = true;
        self.select_count += 1;
        self.phase = Phase::Header;
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Infallible> {
        assert!(self.selected, "deselect without select");
        self.selected = false;
        self.deselect_count += 1;
        self.flush_fifo_write();
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, Infallible> {
        assert!(self.selected, "transfer outside a transaction");
        self.transfer_count += 1;

        if self.not_ready_responses > 0 {
            // A not-ready chip holds SO high and ignores SI traffic.
            self.not_ready_responses -= 1;
            return Ok(NOT_READY);
        }
        if self.stall_after.is_some_and(|limit| self.transfer_count > limit) {
            return Ok(NOT_READY);
        }

        let (response, next) = match self.phase {
            Phase::Header => (0x00, self.decode_header(byte)),
            Phase::ExtAddr { read } => (
                self.ext_echo,
                Phase::Data {
                    read,
                    loc: Loc::Ext(byte),
                },
            ),
            Phase::DirectAddr { read } => (
                0x00,
                Phase::Data {
                    read,
                    loc: Loc::FifoDirect(byte),
                },
            ),
            Phase::Data { read, loc } => {
                let (response, loc) = self.data_exchange(byte, read, loc);
                (response, Phase::Data { read, loc })
            }
        };
        self.phase = next;
        Ok(response)
    }
}
