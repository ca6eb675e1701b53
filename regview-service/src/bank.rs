//! The dispatcher's seam to the hardware.
//!
//! [`RegisterBank`] is everything the dispatcher is allowed to ask of the
//! machine. The production implementation executes the privileged
//! instructions; tests substitute a mock so the dispatch logic runs on any
//! host without touching CPU state.

use regview_registers::{DescriptorTablePointer, Msr, MsrValue, SegmentRegister};

/// Access to the per-core registers a request may name.
///
/// Implementations report the state of whichever logical processor the
/// calling thread currently runs on; no affinity is implied.
pub trait RegisterBank {
    /// Reads an MSR. May fault fatally on an architecturally invalid index;
    /// no software validation is attempted.
    fn read_msr(&self, msr: Msr) -> MsrValue;

    /// Writes an MSR. Same fault behavior as [`Self::read_msr`]; the write
    /// is irreversible unless the caller recorded the prior value.
    fn write_msr(&self, msr: Msr, value: MsrValue);

    /// Reads the visible 16-bit selector of a segment register.
    fn segment_selector(&self, register: SegmentRegister) -> u16;

    /// Reads the GDTR of the current logical processor.
    fn descriptor_table(&self) -> DescriptorTablePointer;

    /// Reads the raw 8-byte GDT entry at `index`, or `None` when the entry
    /// lies outside the table limit.
    fn descriptor_entry(&self, index: u16) -> Option<[u8; 8]>;
}

/// The real machine, via the privileged primitives.
#[cfg(all(target_arch = "x86_64", feature = "asm"))]
#[derive(Debug, Clone, Copy)]
pub struct HardwareRegisters(());

#[cfg(all(target_arch = "x86_64", feature = "asm"))]
impl HardwareRegisters {
    /// # Safety
    /// The caller must be at CPL0 for the MSR and descriptor-table reads to
    /// be permitted, and accepts that an invalid MSR index faults the
    /// processor rather than returning an error.
    #[inline]
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self(())
    }
}

#[cfg(all(target_arch = "x86_64", feature = "asm"))]
impl RegisterBank for HardwareRegisters {
    fn read_msr(&self, msr: Msr) -> MsrValue {
        // SAFETY: CPL0 was asserted when this bank was constructed; index
        // validity is a documented caller obligation.
        unsafe { msr.read() }
    }

    fn write_msr(&self, msr: Msr, value: MsrValue) {
        // SAFETY: as for read_msr.
        unsafe { msr.write(value) }
    }

    fn segment_selector(&self, register: SegmentRegister) -> u16 {
        // SAFETY: reading the visible selector cannot fault.
        unsafe { register.read_selector() }
    }

    fn descriptor_table(&self) -> DescriptorTablePointer {
        // SAFETY: CPL0 was asserted at construction.
        unsafe { DescriptorTablePointer::read_gdtr() }
    }

    fn descriptor_entry(&self, index: u16) -> Option<[u8; 8]> {
        let table = self.descriptor_table();
        if !table.holds_index(index) {
            return None;
        }
        // SAFETY: the GDTR base is a live linear address in the privileged
        // address space and the bounds check above keeps the read inside the
        // table the processor itself is using.
        Some(unsafe { core::ptr::read_volatile(table.entry_address(index) as *const [u8; 8]) })
    }
}
