//! # Descriptor-table entry decoding
//!
//! A legacy descriptor is 8 bytes with base and limit scattered across
//! non-contiguous fields:
//!
//! ```text
//!  63      56 55 54 53 52 51   48 47 46 45 44 43    40 39      32 31        16 15         0
//! +----------+--+--+--+--+-------+--+-----+--+--------+----------+------------+------------+
//! | Base hi  | G|DB| L|AV|Lim hi |P | DPL | S|  Type  | Base mid |  Base low  |  Limit low |
//! +----------+--+--+--+--+-------+--+-----+--+--------+----------+------------+------------+
//! ```
//!
//! System descriptors in long mode grow to 16 bytes; bytes 8..12 extend the
//! base to 64 bits and bytes 12..16 must be zero.
//!
//! Decoding is **total**. If `present` is clear the architecture leaves every
//! other field undefined; they are still decoded and reported as-is, and the
//! judgment is left to the caller.

use crate::privilege::Dpl;
use bitfield_struct::bitfield;

/// Bit layout of an 8-byte code/data descriptor, with the 4-bit type field
/// split into its per-class flags.
#[bitfield(u64)]
#[derive(Eq, PartialEq)]
pub struct DescriptorBits {
    /// Limit bits 15:0.
    pub limit_low: u16,
    /// Base bits 15:0.
    pub base_low: u16,
    /// Base bits 23:16.
    pub base_mid: u8,
    /// Set by the CPU when the segment is touched.
    pub accessed: bool,
    /// Code: readable. Data: writable.
    pub writable_readable: bool,
    /// Code: conforming. Data: expand-down.
    pub expand_down_conforming: bool,
    /// 1 = code segment, 0 = data segment.
    pub executable: bool,
    /// S bit: 1 = code/data, 0 = system descriptor.
    pub code_data: bool,
    /// Descriptor privilege level.
    #[bits(2)]
    pub dpl: u8,
    /// Present bit; all other fields are undefined when clear.
    pub present: bool,
    /// Limit bits 19:16.
    #[bits(4)]
    pub limit_high: u8,
    /// Available for OS use.
    pub available: bool,
    /// L bit: 64-bit code segment.
    pub long_mode: bool,
    /// Code: default operand size (0 = 16-bit, 1 = 32-bit). Must be 0 with L=1.
    pub default_big: bool,
    /// Granularity: 0 = byte-scaled limit, 1 = page-scaled.
    pub granularity: bool,
    /// Base bits 31:24.
    pub base_high: u8,
}

/// Decoded view of one descriptor-table entry.
///
/// Reassembled from the raw layout above; `base` carries the upper 32 bits
/// as well when decoded from the 16-byte system-descriptor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDescriptorView {
    /// Segment base address (bits 31:0 from the legacy fields, 63:32 from the
    /// wide form where present).
    pub base: u64,
    /// 20-bit segment limit, unscaled: `limit_low | limit_high << 16`.
    pub limit: u32,
    /// Accessed bit.
    pub accessed: bool,
    /// Code: readable. Data: writable.
    pub writable_readable: bool,
    /// Code: conforming. Data: expand-down.
    pub expand_down_conforming: bool,
    /// Code segment if set, data segment otherwise.
    pub executable: bool,
    /// S bit: code/data descriptor (set) vs system descriptor (clear).
    pub code_data: bool,
    /// Descriptor privilege level.
    pub dpl: Dpl,
    /// Present bit. When clear, every other field is architecturally
    /// undefined and merely reports what the raw bits contained.
    pub present: bool,
    /// Available-for-OS-use bit.
    pub available: bool,
    /// L bit: 64-bit code segment.
    pub long_mode: bool,
    /// D/B bit: default operand size / stack big.
    pub default_big: bool,
    /// Granularity: limit counts pages instead of bytes when set. The scaling
    /// itself is *not* applied here; see [`Self::scaled_limit`].
    pub granularity: bool,
}

impl SegmentDescriptorView {
    /// Decodes a legacy 8-byte entry. Total: every bit pattern is some view.
    #[must_use]
    pub const fn decode(raw: u64) -> Self {
        let bits = DescriptorBits::from_bits(raw);
        Self {
            base: (bits.base_low() as u64)
                | ((bits.base_mid() as u64) << 16)
                | ((bits.base_high() as u64) << 24),
            limit: (bits.limit_low() as u32) | ((bits.limit_high() as u32) << 16),
            accessed: bits.accessed(),
            writable_readable: bits.writable_readable(),
            expand_down_conforming: bits.expand_down_conforming(),
            executable: bits.executable(),
            code_data: bits.code_data(),
            dpl: Dpl::from_bits(bits.dpl()),
            present: bits.present(),
            available: bits.available(),
            long_mode: bits.long_mode(),
            default_big: bits.default_big(),
            granularity: bits.granularity(),
        }
    }

    /// Decodes the 16-byte long-mode system-descriptor form: the first eight
    /// bytes as [`Self::decode`], bytes 8..12 as base bits 63:32. Bytes
    /// 12..16 are must-be-zero in hardware and are ignored.
    #[must_use]
    pub const fn decode_wide(raw: [u8; 16]) -> Self {
        let low = u64::from_le_bytes([
            raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7],
        ]);
        let base_upper = u32::from_le_bytes([raw[8], raw[9], raw[10], raw[11]]);
        let mut view = Self::decode(low);
        view.base |= (base_upper as u64) << 32;
        view
    }

    /// Re-encodes the legacy 8-byte form. Base bits above 31 do not fit and
    /// are dropped; round-trips exactly with [`Self::decode`].
    #[must_use]
    pub const fn encode(&self) -> u64 {
        DescriptorBits::new()
            .with_limit_low((self.limit & 0xFFFF) as u16)
            .with_base_low((self.base & 0xFFFF) as u16)
            .with_base_mid(((self.base >> 16) & 0xFF) as u8)
            .with_accessed(self.accessed)
            .with_writable_readable(self.writable_readable)
            .with_expand_down_conforming(self.expand_down_conforming)
            .with_executable(self.executable)
            .with_code_data(self.code_data)
            .with_dpl(self.dpl.into_bits())
            .with_present(self.present)
            .with_limit_high(((self.limit >> 16) & 0xF) as u8)
            .with_available(self.available)
            .with_long_mode(self.long_mode)
            .with_default_big(self.default_big)
            .with_granularity(self.granularity)
            .with_base_high(((self.base >> 24) & 0xFF) as u8)
            .into_bits()
    }

    /// The descriptor access byte (raw bits 47:40), as reported on the wire.
    #[must_use]
    pub const fn access_byte(&self) -> u8 {
        (self.accessed as u8)
            | ((self.writable_readable as u8) << 1)
            | ((self.expand_down_conforming as u8) << 2)
            | ((self.executable as u8) << 3)
            | ((self.code_data as u8) << 4)
            | (self.dpl.into_bits() << 5)
            | ((self.present as u8) << 7)
    }

    /// The flags nibble (raw bits 55:52): AVL, L, D/B, G from low to high.
    #[must_use]
    pub const fn flags_nibble(&self) -> u8 {
        (self.available as u8)
            | ((self.long_mode as u8) << 1)
            | ((self.default_big as u8) << 2)
            | ((self.granularity as u8) << 3)
    }

    /// Consumer policy for the granularity bit: the limit as a byte count,
    /// page-scaled (`limit * 4096 + 4095`) when `granularity` is set.
    #[must_use]
    pub const fn scaled_limit(&self) -> u64 {
        if self.granularity {
            ((self.limit as u64) << 12) | 0xFFF
        } else {
            self.limit as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A flat 4 GiB ring-0 code segment, the classic 0x00CF9A000000FFFF.
    const FLAT_CODE: u64 = 0x00CF_9A00_0000_FFFF;

    #[test]
    fn flat_code_segment_decodes() {
        let view = SegmentDescriptorView::decode(FLAT_CODE);
        assert_eq!(view.base, 0);
        assert_eq!(view.limit, 0xF_FFFF);
        assert!(view.present);
        assert!(view.executable);
        assert!(view.code_data);
        assert!(view.writable_readable); // readable code
        assert!(!view.expand_down_conforming);
        assert!(!view.accessed);
        assert_eq!(view.dpl, Dpl::Ring0);
        assert!(view.granularity);
        assert!(view.default_big);
        assert!(!view.long_mode);
        assert_eq!(view.scaled_limit(), 0xFFFF_FFFF);
    }

    #[test]
    fn base_reassembles_from_three_fields() {
        // base = 0xAB_CD_EF_12 scattered: low 0xEF12, mid 0xCD, high 0xAB
        let raw = DescriptorBits::new()
            .with_base_low(0xEF12)
            .with_base_mid(0xCD)
            .with_base_high(0xAB)
            .into_bits();
        assert_eq!(SegmentDescriptorView::decode(raw).base, 0xABCD_EF12);
    }

    #[test]
    fn limit_reassembles_from_two_fields() {
        let raw = DescriptorBits::new()
            .with_limit_low(0x5678)
            .with_limit_high(0xD)
            .into_bits();
        let view = SegmentDescriptorView::decode(raw);
        assert_eq!(view.limit, 0xD_5678);
        // Scaling is left to the consumer.
        assert_eq!(view.scaled_limit(), 0xD_5678);
    }

    #[test]
    fn decode_is_total_and_roundtrips_with_encode() {
        for raw in [
            0u64,
            u64::MAX,
            FLAT_CODE,
            0x00CF_9200_0000_FFFF, // flat data
            0x00AF_FB00_0000_FFFF, // 64-bit user code
            0x1234_5678_9ABC_DEF0,
        ] {
            let view = SegmentDescriptorView::decode(raw);
            assert_eq!(view.encode(), raw);
            assert_eq!(SegmentDescriptorView::decode(view.encode()), view);
        }
    }

    #[test]
    fn non_present_entries_still_decode() {
        let view = SegmentDescriptorView::decode(0x0000_1200_0000_0001);
        assert!(!view.present);
        assert_eq!(view.limit, 1); // caller-visible, semantically undefined
    }

    #[test]
    fn wide_form_carries_the_upper_base() {
        let mut raw = [0u8; 16];
        raw[..8].copy_from_slice(&0x0000_8900_3000_0067u64.to_le_bytes());
        raw[8..12].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
        let view = SegmentDescriptorView::decode_wide(raw);
        assert_eq!(view.base, 0xFFFF_FFFF_0000_3000);
        assert_eq!(view.limit, 0x67);
        assert!(view.present);
        assert!(!view.code_data); // system descriptor (TSS type 0x9)
    }

    #[test]
    fn access_byte_and_flags_nibble_match_raw_bits() {
        let view = SegmentDescriptorView::decode(FLAT_CODE);
        assert_eq!(view.access_byte(), 0x9A);
        assert_eq!(view.flags_nibble(), 0xC);
    }
}
