//! # Segment register reads
//!
//! The visible part of a segment register is a 16-bit selector; reading it is
//! a single unprivileged `mov`, but the backing descriptor state it names is
//! only reachable from CPL0. The registers form a closed six-variant enum, so
//! an out-of-range register number is rejected at the boundary instead of
//! indexing into a table.

/// One of the six x86 segment registers.
///
/// The discriminants are the wire indices accepted by the introspection
/// service (`0` = CS … `5` = GS).
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRegister {
    /// Code segment.
    Cs = 0,
    /// Stack segment.
    Ss = 1,
    /// Data segment.
    Ds = 2,
    /// Extra segment.
    Es = 3,
    /// Additional data segment (TLS base on most ABIs).
    Fs = 4,
    /// Additional data segment (per-CPU base in kernels).
    Gs = 5,
}

impl SegmentRegister {
    /// All six registers in wire-index order.
    pub const ALL: [Self; 6] = [Self::Cs, Self::Ss, Self::Ds, Self::Es, Self::Fs, Self::Gs];

    /// Maps a wire index (`0..=5`) onto a register. Anything else is rejected.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Self::Cs),
            1 => Some(Self::Ss),
            2 => Some(Self::Ds),
            3 => Some(Self::Es),
            4 => Some(Self::Fs),
            5 => Some(Self::Gs),
            _ => None,
        }
    }

    /// The wire index of this register.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self as u16
    }

    /// Mnemonic, for diagnostics.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::Ss => "ss",
            Self::Ds => "ds",
            Self::Es => "es",
            Self::Fs => "fs",
            Self::Gs => "gs",
        }
    }

    /// Reads the visible 16-bit selector from this register.
    ///
    /// The value belongs to whichever logical processor the calling thread is
    /// executing on at that instant.
    ///
    /// # Safety
    /// The read itself cannot fault, but interpreting the selector against a
    /// descriptor table only makes sense from the privileged context that owns
    /// that table.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    #[must_use]
    pub unsafe fn read_selector(self) -> u16 {
        let selector: u16;
        unsafe {
            match self {
                Self::Cs => core::arch::asm!("mov {0:x}, cs", out(reg) selector, options(nomem, nostack, preserves_flags)),
                Self::Ss => core::arch::asm!("mov {0:x}, ss", out(reg) selector, options(nomem, nostack, preserves_flags)),
                Self::Ds => core::arch::asm!("mov {0:x}, ds", out(reg) selector, options(nomem, nostack, preserves_flags)),
                Self::Es => core::arch::asm!("mov {0:x}, es", out(reg) selector, options(nomem, nostack, preserves_flags)),
                Self::Fs => core::arch::asm!("mov {0:x}, fs", out(reg) selector, options(nomem, nostack, preserves_flags)),
                Self::Gs => core::arch::asm!("mov {0:x}, gs", out(reg) selector, options(nomem, nostack, preserves_flags)),
            }
        }
        selector
    }
}

/// Reads the LDT register selector (`sldt`).
///
/// A zero selector means no LDT is installed for the current task.
///
/// # Safety
/// Requires a context where `sldt` is permitted (CPL0, or CR4.UMIP clear).
#[cfg(all(target_arch = "x86_64", feature = "asm"))]
#[inline]
#[must_use]
pub unsafe fn read_ldtr() -> u16 {
    let selector: u16;
    unsafe {
        core::arch::asm!("sldt {0:x}", out(reg) selector, options(nomem, nostack, preserves_flags));
    }
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_covers_exactly_six() {
        for index in 0u16..=5 {
            let reg = SegmentRegister::from_index(index).unwrap();
            assert_eq!(reg.index(), index);
        }
        assert_eq!(SegmentRegister::from_index(6), None);
        assert_eq!(SegmentRegister::from_index(u16::MAX), None);
    }

    #[test]
    fn wire_order_matches_all() {
        for (i, reg) in SegmentRegister::ALL.iter().enumerate() {
            assert_eq!(reg.index() as usize, i);
        }
    }
}
