//! # Model-Specific Register (MSR) access
//!
//! MSRs are selected by a 32-bit index placed in `ecx`; `rdmsr` returns the
//! 64-bit value split across `edx:eax`, and `wrmsr` consumes the same pair.
//! [`MsrValue`] keeps that split explicit because the wire contract of the
//! introspection service reports the two halves separately.
//!
//! ## References
//! - Intel SDM Vol. 4, "Model-Specific Registers"
//! - AMD64 Architecture Programmer's Manual Vol. 2, §3.1.6

mod ia32_fmask;
mod ia32_lstar;
mod ia32_star;

pub use ia32_fmask::Ia32Fmask;
pub use ia32_lstar::Ia32LStar;
pub use ia32_star::Ia32Star;

/// Identifies a **Model-Specific Register** by its architectural index.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Msr(pub u32);

impl Msr {
    /// `IA32_STAR` — legacy-mode SYSCALL target and selector bases.
    pub const IA32_STAR: Self = Self::new(0xC000_0081);
    /// `IA32_LSTAR` — 64-bit SYSCALL target RIP.
    pub const IA32_LSTAR: Self = Self::new(0xC000_0082);
    /// `IA32_CSTAR` — compatibility-mode SYSCALL target RIP (unused on Intel).
    pub const IA32_CSTAR: Self = Self::new(0xC000_0083);
    /// `IA32_FMASK` — SYSCALL RFLAGS mask.
    pub const IA32_FMASK: Self = Self::new(0xC000_0084);
    /// `IA32_FS_BASE` — FS segment base shadow.
    pub const IA32_FS_BASE: Self = Self::new(0xC000_0100);
    /// `IA32_GS_BASE` — GS segment base shadow.
    pub const IA32_GS_BASE: Self = Self::new(0xC000_0101);
    /// `IA32_KERNEL_GS_BASE` — `swapgs` exchange value.
    pub const IA32_KERNEL_GS_BASE: Self = Self::new(0xC000_0102);
    /// `IA32_TSC_AUX` — auxiliary TSC value returned by `rdtscp`.
    pub const IA32_TSC_AUX: Self = Self::new(0xC000_0103);

    /// Creates an `Msr` from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying raw MSR index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Reads this MSR on the current logical processor.
    ///
    /// # Safety
    /// Requires CPL0. The index must name a register that exists on the
    /// running processor; an invalid index raises #GP(0), which is not caught
    /// here.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    #[doc(alias = "rdmsr")]
    pub unsafe fn read(self) -> MsrValue {
        let low: u32;
        let high: u32;
        unsafe {
            core::arch::asm!(
                "rdmsr",
                in("ecx") self.0,
                out("eax") low,
                out("edx") high,
                options(nomem, nostack, preserves_flags)
            );
        }
        MsrValue { low, high }
    }

    /// Writes this MSR on the current logical processor.
    ///
    /// # Safety
    /// Requires CPL0 and a valid, writable index (otherwise #GP(0)). The
    /// write mutates processor state irreversibly unless the caller recorded
    /// the prior value.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    #[doc(alias = "wrmsr")]
    pub unsafe fn write(self, value: MsrValue) {
        unsafe {
            core::arch::asm!(
                "wrmsr",
                in("ecx") self.0,
                in("eax") value.low,
                in("edx") value.high,
                options(nostack, preserves_flags)
            );
        }
    }
}

/// A 64-bit MSR value kept as the `edx:eax` register pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MsrValue {
    /// Low 32 bits (`eax`).
    pub low: u32,
    /// High 32 bits (`edx`).
    pub high: u32,
}

impl MsrValue {
    /// Builds the pair from a 64-bit value.
    #[inline]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self {
            low: (value & 0xFFFF_FFFF) as u32,
            high: (value >> 32) as u32,
        }
    }

    /// Reassembles the 64-bit value as `(high << 32) | low`.
    #[inline]
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }
}

impl From<u64> for MsrValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<MsrValue> for u64 {
    #[inline]
    fn from(value: MsrValue) -> Self {
        value.to_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_reassemble() {
        let v = MsrValue::from_u64(0xDEAD_BEEF_0BAD_F00D);
        assert_eq!(v.low, 0x0BAD_F00D);
        assert_eq!(v.high, 0xDEAD_BEEF);
        assert_eq!(v.to_u64(), 0xDEAD_BEEF_0BAD_F00D);
    }

    #[test]
    fn zero_and_max() {
        assert_eq!(MsrValue::from_u64(0).to_u64(), 0);
        assert_eq!(MsrValue::from_u64(u64::MAX).to_u64(), u64::MAX);
    }

    #[test]
    fn well_known_indices() {
        // Values from the IA-32 architectural MSR list.
        assert_eq!(Msr::IA32_STAR.index(), 0xC000_0081);
        assert_eq!(Msr::IA32_LSTAR.index(), 0xC000_0082);
        assert_eq!(Msr::IA32_KERNEL_GS_BASE.index(), 0xC000_0102);
        assert_eq!(Msr::IA32_TSC_AUX.index(), 0xC000_0103);
    }
}
