mod gfsk_434mhz;

pub use gfsk_434mhz::GFSK_434MHZ;
