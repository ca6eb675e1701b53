//! # The 16-bit segment selector
//!
//! The visible part of every segment register:
//!
//! ```text
//!  15            3 2  1  0
//! +----------------+--+----+
//! |   Index[12:0]  |TI| RPL|
//! +----------------+--+----+  (TI=0 → GDT, TI=1 → LDT; RPL=0..3)
//! ```
//!
//! A selector is produced fresh on every register read and never mutated; it
//! is a decomposition of a `u16`, nothing more.

use crate::privilege::Rpl;
use bitfield_struct::bitfield;

/// Which descriptor table a selector addresses.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum Table {
    /// Global Descriptor Table.
    Gdt = 0,
    /// Local Descriptor Table (per task).
    Ldt = 1,
}

impl Table {
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        if bits == 0 { Self::Gdt } else { Self::Ldt }
    }

    #[inline]
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }
}

/// Raw 16-bit selector decomposition (index / TI / RPL).
#[bitfield(u16)]
#[derive(Eq, PartialEq)]
pub struct Selector {
    /// Requested privilege level (bits 1:0).
    #[bits(2)]
    pub rpl: Rpl,
    /// Table indicator (bit 2): 0 = GDT, 1 = LDT.
    #[bits(1)]
    pub table: Table,
    /// Descriptor index within the chosen table (bits 15:3).
    #[bits(13)]
    pub index: u16,
}

impl Selector {
    /// Builds a selector from its parts.
    #[inline]
    #[must_use]
    pub const fn compose(index: u16, table: Table, rpl: Rpl) -> Self {
        Self::new().with_index(index).with_table(table).with_rpl(rpl)
    }

    /// The selector as a plain `u16`.
    #[inline]
    #[must_use]
    pub const fn to_u16(self) -> u16 {
        self.into_bits()
    }
}
