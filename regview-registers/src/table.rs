//! # Descriptor-table register (GDTR)
//!
//! `sgdt` stores a packed 10-byte image: a 16-bit limit (size of the table in
//! bytes, minus one) followed by the 64-bit linear base address. The pointer
//! is only meaningful on the logical processor that executed the store.

/// The GDTR image: table limit and linear base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorTablePointer {
    /// Size of the table in bytes, minus one.
    pub limit: u16,
    /// Linear base address of the table.
    pub base: u64,
}

impl DescriptorTablePointer {
    /// Size of one legacy descriptor entry.
    pub const ENTRY_SIZE: u16 = 8;

    /// Number of 8-byte entries the table holds.
    #[inline]
    #[must_use]
    pub const fn entry_count(self) -> u16 {
        (self.limit / Self::ENTRY_SIZE) + 1
    }

    /// Whether an 8-byte entry at `index` lies entirely within the table.
    #[inline]
    #[must_use]
    pub const fn holds_index(self, index: u16) -> bool {
        let last_byte = (index as u32) * Self::ENTRY_SIZE as u32 + (Self::ENTRY_SIZE as u32 - 1);
        last_byte <= self.limit as u32
    }

    /// Linear address of the entry at `index`. Not bounds-checked.
    #[inline]
    #[must_use]
    pub const fn entry_address(self, index: u16) -> u64 {
        self.base + (index as u64) * Self::ENTRY_SIZE as u64
    }

    /// Parses the packed 10-byte `sgdt` store image.
    #[inline]
    #[must_use]
    pub const fn from_store_image(image: [u8; 10]) -> Self {
        Self {
            limit: u16::from_le_bytes([image[0], image[1]]),
            base: u64::from_le_bytes([
                image[2], image[3], image[4], image[5], image[6], image[7], image[8], image[9],
            ]),
        }
    }

    /// Reads the GDTR of the current logical processor (`sgdt`).
    ///
    /// # Safety
    /// Requires a context where `sgdt` is permitted (CPL0, or CR4.UMIP
    /// clear). The returned base is a linear address that is only safe to
    /// dereference from the privileged address space that installed it.
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[inline]
    #[must_use]
    pub unsafe fn read_gdtr() -> Self {
        let mut image = [0u8; 10];
        unsafe {
            core::arch::asm!(
                "sgdt [{}]",
                in(reg) image.as_mut_ptr(),
                options(nostack, preserves_flags)
            );
        }
        Self::from_store_image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_image_is_little_endian_limit_then_base() {
        let image = [0x7F, 0x00, 0x00, 0x90, 0x00, 0x00, 0x80, 0xFF, 0xFF, 0xFF];
        let gdtr = DescriptorTablePointer::from_store_image(image);
        assert_eq!(gdtr.limit, 0x7F);
        assert_eq!(gdtr.base, 0xFFFF_FF80_0000_9000);
    }

    #[test]
    fn index_bounds_track_the_limit() {
        // limit 0x7F = 128 bytes = 16 entries (0..=15)
        let gdtr = DescriptorTablePointer { limit: 0x7F, base: 0 };
        assert_eq!(gdtr.entry_count(), 16);
        assert!(gdtr.holds_index(0));
        assert!(gdtr.holds_index(15));
        assert!(!gdtr.holds_index(16));

        // A truncated table: limit 0x0A covers one full entry only.
        let small = DescriptorTablePointer { limit: 0x0A, base: 0 };
        assert!(small.holds_index(0));
        assert!(!small.holds_index(1));
    }

    #[test]
    fn entry_addresses_step_by_eight() {
        let gdtr = DescriptorTablePointer {
            limit: 0x7F,
            base: 0x1000,
        };
        assert_eq!(gdtr.entry_address(0), 0x1000);
        assert_eq!(gdtr.entry_address(3), 0x1018);
    }
}
