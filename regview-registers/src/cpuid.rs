//! # CPUID capability discovery
//!
//! `cpuid` is the one introspection instruction that is unprivileged, and the
//! natural companion to the MSR and segment reads: before poking an MSR, a
//! caller checks here that the processor actually has it (leaf 01H, EDX bit 5).
//!
//! Reference: Intel SDM Vol. 2A, "CPUID — CPU Identification".

mod leaf01;
mod leaf07;

pub use leaf01::{Leaf01Ecx, Leaf01Edx};
pub use leaf07::Leaf07Ebx;

/// Leaf 00H — highest basic leaf + vendor identification string.
pub const LEAF_VENDOR: u32 = 0x00;
/// Leaf 01H — version and feature information.
pub const LEAF_FEATURES: u32 = 0x01;
/// Leaf 07H — structured extended feature flags.
pub const LEAF_EXTENDED_FEATURES: u32 = 0x07;

/// The four registers returned by one `cpuid` invocation.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
pub struct CpuidResult {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

/// Executes `cpuid` with the given leaf and subleaf.
///
/// # Safety
/// The `cpuid` instruction must be available and the requested leaf must
/// exist (check against the leaf 0 maximum first).
#[cfg(all(target_arch = "x86_64", feature = "asm"))]
#[inline]
#[allow(unused_assignments)]
pub unsafe fn cpuid(leaf: u32, subleaf: u32) -> CpuidResult {
    let (mut eax, mut ebx, mut ecx, mut edx) = (leaf, 0u32, subleaf, 0u32);
    unsafe {
        core::arch::asm!(
            // rbx is reserved by LLVM; bounce it through a scratch register.
            "push rbx",
            "cpuid",
            "mov {ebx_out:e}, ebx",
            "pop rbx",
            ebx_out = lateout(reg) ebx,
            inlateout("eax") eax,
            inlateout("ecx") ecx,
            lateout("edx") edx,
            options(nomem, preserves_flags),
        );
    }
    CpuidResult { eax, ebx, ecx, edx }
}

/// The 12-byte processor vendor identification string from leaf 00H.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VendorId([u8; 12]);

impl VendorId {
    /// Assembles the vendor string from a leaf 00H result.
    ///
    /// The architecture scatters the string across EBX, EDX, ECX — in that
    /// order — four little-endian bytes each.
    #[must_use]
    pub const fn from_leaf0(r: CpuidResult) -> Self {
        let b = r.ebx.to_le_bytes();
        let d = r.edx.to_le_bytes();
        let c = r.ecx.to_le_bytes();
        Self([
            b[0], b[1], b[2], b[3], d[0], d[1], d[2], d[3], c[0], c[1], c[2], c[3],
        ])
    }

    /// The raw vendor bytes.
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// The vendor string, if it is valid ASCII/UTF-8 (it is on real silicon).
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    /// Reads the vendor string from the processor.
    ///
    /// # Safety
    /// The `cpuid` instruction must be available.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    #[must_use]
    pub unsafe fn read() -> Self {
        Self::from_leaf0(unsafe { cpuid(LEAF_VENDOR, 0) })
    }
}
