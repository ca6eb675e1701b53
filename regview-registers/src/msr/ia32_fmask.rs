use crate::msr::Msr;
use bitfield_struct::bitfield;

/// `IA32_FMASK` — SYSCALL Flag Mask (MSR `0xC000_0084`).
///
/// On `syscall`, RFLAGS bits set in this mask are cleared before entering the
/// kernel. Bits 32..64 are reserved.
#[bitfield(u64)]
#[derive(PartialEq, Eq)]
pub struct Ia32Fmask {
    /// RFLAGS bits to clear on syscall entry.
    pub rflags_mask: u32,
    /// Reserved, reads as zero.
    pub reserved: u32,
}

impl Ia32Fmask {
    /// The MSR this view belongs to.
    pub const MSR: Msr = Msr::IA32_FMASK;

    /// Reads the current flag mask from the MSR.
    ///
    /// # Safety
    /// Requires CPL0.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    pub unsafe fn read() -> Self {
        Self::from_bits(unsafe { Self::MSR.read() }.to_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_occupies_low_half() {
        let fmask = Ia32Fmask::new().with_rflags_mask(0x0004_7700);
        assert_eq!(fmask.into_bits(), 0x0004_7700);
        assert_eq!(fmask.rflags_mask(), 0x0004_7700);
    }
}
