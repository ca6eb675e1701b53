use bitfield_struct::bitfield;

/// CPUID.01H:ECX — instruction-set feature flags.
///
/// Bit positions per Intel SDM Vol. 2A, leaf 01H. Reserved bits are padded
/// out so the named flags sit at their architectural positions.
#[bitfield(u32)]
pub struct Leaf01Ecx {
    /// SSE3 instructions.
    pub sse3: bool,
    /// PCLMULQDQ instruction.
    pub pclmulqdq: bool,
    pub dtes64: bool,
    /// MONITOR/MWAIT instructions.
    pub monitor: bool,
    #[bits(5)]
    __: u8,
    /// Supplemental SSE3.
    pub ssse3: bool,
    #[bits(2)]
    __: u8,
    /// Fused multiply-add.
    pub fma: bool,
    /// CMPXCHG16B instruction.
    pub cmpxchg16b: bool,
    #[bits(5)]
    __: u8,
    /// SSE4.1 instructions.
    pub sse41: bool,
    /// SSE4.2 instructions.
    pub sse42: bool,
    /// x2APIC support.
    pub x2apic: bool,
    pub movbe: bool,
    /// POPCNT instruction.
    pub popcnt: bool,
    pub tsc_deadline: bool,
    /// AES-NI instructions.
    pub aes: bool,
    /// XSAVE family supported by hardware.
    pub xsave: bool,
    /// XSAVE family enabled by the OS (CR4.OSXSAVE).
    pub osxsave: bool,
    /// AVX instructions.
    pub avx: bool,
    /// Half-precision convert instructions.
    pub f16c: bool,
    pub rdrand: bool,
    /// Always zero on hardware; set by hypervisors.
    pub hypervisor: bool,
}

/// CPUID.01H:EDX — classic feature flags.
#[bitfield(u32)]
pub struct Leaf01Edx {
    /// x87 FPU on chip.
    pub fpu: bool,
    /// Virtual-8086 mode enhancements.
    pub vme: bool,
    /// Debugging extensions.
    pub de: bool,
    /// Page-size extensions.
    pub pse: bool,
    /// Time stamp counter.
    pub tsc: bool,
    /// RDMSR/WRMSR and model-specific registers.
    pub msr: bool,
    /// Physical-address extensions.
    pub pae: bool,
    /// Machine-check exception.
    pub mce: bool,
    /// CMPXCHG8B instruction.
    pub cmpxchg8b: bool,
    /// On-chip APIC.
    pub apic: bool,
    __: bool,
    /// SYSENTER/SYSEXIT instructions.
    pub sep: bool,
    /// Memory-type range registers.
    pub mtrr: bool,
    /// Page global extension.
    pub pge: bool,
    /// Machine-check architecture.
    pub mca: bool,
    /// Conditional move instructions.
    pub cmov: bool,
    /// Page attribute table.
    pub pat: bool,
    /// 36-bit page-size extensions.
    pub pse36: bool,
    pub psn: bool,
    /// CLFLUSH instruction.
    pub clfsh: bool,
    #[bits(3)]
    __: u8,
    /// MMX instructions.
    pub mmx: bool,
    /// FXSAVE/FXRSTOR instructions.
    pub fxsr: bool,
    /// SSE instructions.
    pub sse: bool,
    /// SSE2 instructions.
    pub sse2: bool,
    pub ss: bool,
    /// Hyper-threading technology.
    pub htt: bool,
    #[bits(3)]
    __: u8,
}
