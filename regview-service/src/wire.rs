//! The wire contract: operation codes, fixed sizes, fixed layouts.
//!
//! All integers are little-endian. Sizes are declared per operation and
//! enforced by the dispatcher *before* execution; the encode helpers here may
//! therefore index at fixed offsets without re-checking.
//!
//! | Operation    | Code    | Input                         | Output    |
//! |--------------|---------|-------------------------------|-----------|
//! | ReadMsr      | `0x800` | 4 (MSR index)                 | 8         |
//! | WriteMsr     | `0x801` | 12 (MSR index, low, high)     | 0         |
//! | QuerySegment | `0x802` | 2 (segment register index 0–5)| 20        |

use regview_descriptor::{Selector, SegmentDescriptorView};
use regview_registers::MsrValue;

/// ReadMsr output: `low` at offset 0, `high` at offset 4.
pub const READ_MSR_IN_LEN: usize = 4;
pub const READ_MSR_OUT_LEN: usize = 8;

/// WriteMsr input: MSR index at offset 0, `low` at 4, `high` at 8.
pub const WRITE_MSR_IN_LEN: usize = 12;

/// QuerySegment output layout:
///
/// | Offset | Size | Field                                   |
/// |--------|------|-----------------------------------------|
/// | 0      | 2    | raw selector value                      |
/// | 2      | 2    | reserved, zero                          |
/// | 4      | 4    | 20-bit descriptor limit, unscaled       |
/// | 8      | 8    | descriptor base (upper half if wide)    |
/// | 16     | 1    | access byte (raw descriptor bits 47:40) |
/// | 17     | 1    | flags nibble (raw bits 55:52)           |
/// | 18     | 2    | reserved, zero                          |
pub const QUERY_SEGMENT_IN_LEN: usize = 2;
pub const QUERY_SEGMENT_OUT_LEN: usize = 20;

/// The closed set of operations the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Operation {
    /// Read an MSR named by the input.
    ReadMsr = 0x800,
    /// Write an MSR named by the input.
    WriteMsr = 0x801,
    /// Read a segment register and resolve its backing GDT descriptor.
    QuerySegment = 0x802,
}

impl Operation {
    /// Decodes a wire operation code; anything outside the set is rejected.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0x800 => Some(Self::ReadMsr),
            0x801 => Some(Self::WriteMsr),
            0x802 => Some(Self::QuerySegment),
            _ => None,
        }
    }

    /// The wire code of this operation.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Minimum input length the operation requires.
    #[inline]
    #[must_use]
    pub const fn input_len(self) -> usize {
        match self {
            Self::ReadMsr => READ_MSR_IN_LEN,
            Self::WriteMsr => WRITE_MSR_IN_LEN,
            Self::QuerySegment => QUERY_SEGMENT_IN_LEN,
        }
    }

    /// Size of the result the operation produces.
    #[inline]
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::ReadMsr => READ_MSR_OUT_LEN,
            Self::WriteMsr => 0,
            Self::QuerySegment => QUERY_SEGMENT_OUT_LEN,
        }
    }

    /// Mnemonic, for diagnostics.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReadMsr => "read-msr",
            Self::WriteMsr => "write-msr",
            Self::QuerySegment => "query-segment",
        }
    }
}

/// Reads a little-endian `u32` at a fixed offset. Length was validated by the
/// dispatch gate.
#[inline]
#[must_use]
pub(crate) fn get_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Reads a little-endian `u16` at a fixed offset.
#[inline]
#[must_use]
pub(crate) fn get_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Encodes a ReadMsr result: the two 32-bit halves, low first.
pub(crate) fn put_msr_value(value: MsrValue, out: &mut [u8]) {
    out[0..4].copy_from_slice(&value.low.to_le_bytes());
    out[4..8].copy_from_slice(&value.high.to_le_bytes());
}

/// Encodes a QuerySegment result at the layout documented above.
pub(crate) fn put_segment_query(selector: Selector, view: &SegmentDescriptorView, out: &mut [u8]) {
    out[0..2].copy_from_slice(&selector.to_u16().to_le_bytes());
    out[2..4].fill(0);
    out[4..8].copy_from_slice(&view.limit.to_le_bytes());
    out[8..16].copy_from_slice(&view.base.to_le_bytes());
    out[16] = view.access_byte();
    out[17] = view.flags_nibble();
    out[18..20].fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip_and_unknowns_are_rejected() {
        for op in [
            Operation::ReadMsr,
            Operation::WriteMsr,
            Operation::QuerySegment,
        ] {
            assert_eq!(Operation::from_code(op.code()), Some(op));
        }
        assert_eq!(Operation::from_code(0x7FF), None);
        assert_eq!(Operation::from_code(0x803), None);
        assert_eq!(Operation::from_code(0), None);
    }

    #[test]
    fn declared_sizes_match_the_contract() {
        assert_eq!(Operation::ReadMsr.input_len(), 4);
        assert_eq!(Operation::ReadMsr.output_len(), 8);
        assert_eq!(Operation::WriteMsr.input_len(), 12);
        assert_eq!(Operation::WriteMsr.output_len(), 0);
        assert_eq!(Operation::QuerySegment.input_len(), 2);
        assert_eq!(Operation::QuerySegment.output_len(), 20);
    }

    #[test]
    fn msr_value_layout_is_low_then_high() {
        let mut out = [0u8; 8];
        put_msr_value(
            MsrValue {
                low: 0x1122_3344,
                high: 0xAABB_CCDD,
            },
            &mut out,
        );
        assert_eq!(get_u32(&out, 0), 0x1122_3344);
        assert_eq!(get_u32(&out, 4), 0xAABB_CCDD);
    }

    #[test]
    fn segment_query_layout_offsets() {
        let selector = Selector::from_bits(0x0033);
        let view = SegmentDescriptorView::decode(0x00AF_FB00_0000_FFFF);
        let mut out = [0xFFu8; QUERY_SEGMENT_OUT_LEN];
        put_segment_query(selector, &view, &mut out);

        assert_eq!(get_u16(&out, 0), 0x0033);
        assert_eq!(get_u16(&out, 2), 0); // reserved got cleared
        assert_eq!(get_u32(&out, 4), view.limit);
        assert_eq!(u64::from_le_bytes(out[8..16].try_into().unwrap()), view.base);
        assert_eq!(out[16], view.access_byte());
        assert_eq!(out[17], view.flags_nibble());
        assert_eq!(get_u16(&out, 18), 0);
    }
}
