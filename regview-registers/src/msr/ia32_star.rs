use crate::msr::Msr;
use bitfield_struct::bitfield;

/// `IA32_STAR` — SYSCALL Target Address (MSR `0xC000_0081`).
///
/// In 64-bit mode only the selector bases matter: `syscall` loads CS from
/// `syscall_cs_base` (and SS from that +8); `sysret` builds the user CS/SS
/// from `sysret_cs_base`. Bits 0..32 are the legacy-mode target EIP.
#[bitfield(u64)]
#[derive(PartialEq, Eq)]
pub struct Ia32Star {
    /// Legacy (non-64-bit) SYSCALL target EIP. Ignored in long mode.
    pub legacy_eip: u32,
    /// Kernel CS selector base loaded by `syscall` (SS = this + 8).
    pub syscall_cs_base: u16,
    /// User CS selector base used by `sysret` (CS = this + 16, SS = this + 8).
    pub sysret_cs_base: u16,
}

impl Ia32Star {
    /// The MSR this view belongs to.
    pub const MSR: Msr = Msr::IA32_STAR;

    /// Reads the current SYSCALL selector bases from the MSR.
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
    fn selector_bases_land_in_the_right_halves() {
        let star = Ia32Star::new()
            .with_syscall_cs_base(0x0008)
            .with_sysret_cs_base(0x0013);
        assert_eq!(star.into_bits(), 0x0013_0008_0000_0000);
        assert_eq!(Ia32Star::from_bits(star.into_bits()), star);
    }
}
