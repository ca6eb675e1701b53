//! Two-bit privilege levels.
//!
//! The same four rings appear in two places with different meanings: **RPL**
//! is requested by the code supplying a selector (low two bits of the
//! selector), **DPL** is stored in the target descriptor and states the
//! minimum privilege required to use the segment. Keeping them as distinct
//! types stops one from being passed where the other is meant.

/// RPL mask in a 16-bit selector.
pub const RPL_MASK: u16 = 0b11;

/// Requested Privilege Level — low two bits of a segment selector.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Rpl {
    Ring0 = 0,
    Ring1 = 1,
    Ring2 = 2,
    Ring3 = 3,
}

impl Rpl {
    /// Decode from the low two bits; total over the masked range.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Ring0,
            1 => Self::Ring1,
            2 => Self::Ring2,
            _ => Self::Ring3,
        }
    }

    /// Encode as the low two bits of a selector.
    #[inline]
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    /// Extract the RPL from a raw 16-bit selector value.
    #[inline]
    #[must_use]
    pub const fn from_selector(selector: u16) -> Self {
        Self::from_bits((selector & RPL_MASK) as u8)
    }
}

/// Descriptor Privilege Level — bits 46:45 of a descriptor-table entry.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Dpl {
    Ring0 = 0,
    Ring1 = 1,
    Ring2 = 2,
    Ring3 = 3,
}

impl Dpl {
    /// Decode from two bits; total over the masked range.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Ring0,
            1 => Self::Ring1,
            2 => Self::Ring2,
            _ => Self::Ring3,
        }
    }

    /// Encode as two bits.
    #[inline]
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }
}
