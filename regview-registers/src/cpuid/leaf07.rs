use bitfield_struct::bitfield;

/// CPUID.07H.0:EBX — structured extended feature flags.
///
/// Bit positions per Intel SDM Vol. 2A, leaf 07H subleaf 0.
#[bitfield(u32)]
pub struct Leaf07Ebx {
    /// RDFSBASE/RDGSBASE/WRFSBASE/WRGSBASE instructions.
    pub fsgsbase: bool,
    /// IA32_TSC_ADJUST MSR present.
    pub tsc_adjust: bool,
    /// Software Guard Extensions.
    pub sgx: bool,
    pub bmi1: bool,
    pub hle: bool,
    pub avx2: bool,
    /// x87 FPU data pointer updated only on exceptions.
    pub fdp_excptn_only: bool,
    /// Supervisor-mode execution prevention.
    pub smep: bool,
    pub bmi2: bool,
    /// Enhanced REP MOVSB/STOSB.
    pub erms: bool,
    pub invpcid: bool,
    pub rtm: bool,
    /// Resource Director Technology monitoring.
    pub rdt_m: bool,
    /// FPU CS/DS values deprecated.
    pub deprecates_fpu_cs: bool,
    /// Memory protection extensions.
    pub mpx: bool,
    /// Resource Director Technology allocation.
    pub rdt_a: bool,
    pub avx512f: bool,
    pub avx512dq: bool,
    pub rdseed: bool,
    pub adx: bool,
    /// Supervisor-mode access prevention (CLAC/STAC).
    pub smap: bool,
    pub avx512_ifma: bool,
    __: bool,
    pub clflushopt: bool,
    pub clwb: bool,
    /// Processor trace.
    pub processor_trace: bool,
    pub avx512pf: bool,
    pub avx512er: bool,
    pub avx512cd: bool,
    /// Secure Hash Algorithm extensions.
    pub sha: bool,
    pub avx512bw: bool,
    pub avx512vl: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_flags_sit_at_architectural_positions() {
        assert_eq!(Leaf07Ebx::new().with_fsgsbase(true).into_bits(), 1);
        assert_eq!(Leaf07Ebx::new().with_smep(true).into_bits(), 1 << 7);
        assert_eq!(Leaf07Ebx::new().with_smap(true).into_bits(), 1 << 20);
        assert_eq!(Leaf07Ebx::new().with_sha(true).into_bits(), 1 << 29);
        assert_eq!(Leaf07Ebx::new().with_avx512vl(true).into_bits(), 1 << 31);

        let ebx = Leaf07Ebx::from_bits(1 << 9 | 1 << 18);
        assert!(ebx.erms());
        assert!(ebx.rdseed());
        assert!(!ebx.sgx());
    }
}
