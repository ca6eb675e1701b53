use crate::msr::Msr;

/// `IA32_LSTAR` — 64-bit SYSCALL Target RIP (MSR `0xC000_0082`).
///
/// In 64-bit mode, `syscall` loads RIP from this register. The value must be
/// a canonical virtual address.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ia32LStar(u64);

impl Ia32LStar {
    /// The MSR this view belongs to.
    pub const MSR: Msr = Msr::IA32_LSTAR;

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The syscall entry point RIP.
    #[inline]
    #[must_use]
    pub const fn target_rip(self) -> u64 {
        self.0
    }

    /// Canonical iff bits 63..48 are copies of bit 47.
    #[inline]
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        let sign = (self.0 >> 47) & 1;
        (self.0 >> 48) == if sign == 0 { 0 } else { 0xFFFF }
    }

    /// Reads the current syscall target from the MSR.
    ///
    /// # Safety
    /// Requires CPL0.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    pub unsafe fn read() -> Self {
        Self(unsafe { Self::MSR.read() }.to_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_addresses() {
        assert!(Ia32LStar::from_bits(0).is_canonical());
        assert!(Ia32LStar::from_bits(0x0000_7FFF_FFFF_FFFF).is_canonical());
        assert!(Ia32LStar::from_bits(0xFFFF_8000_0000_0000).is_canonical());
        assert!(!Ia32LStar::from_bits(0x0000_8000_0000_0000).is_canonical());
        assert!(!Ia32LStar::from_bits(0x1234_0000_0000_0000).is_canonical());
    }
}
