//! # Privileged x86-64 register primitives
//!
//! Thin wrappers around the privileged introspection instructions: `rdmsr`
//! and `wrmsr` for model-specific registers, a `mov` from each of the six
//! segment registers, `sgdt`/`sldt` for the descriptor-table registers, and
//! `cpuid` for capability discovery. Each primitive executes exactly one
//! instruction and performs no validation of its own; callers gate access.
//!
//! ## Per-core state
//!
//! MSRs and descriptor-table registers are **core-local**: a read reflects
//! whichever logical processor the calling thread happens to execute on at
//! that instant. This crate does not pin threads to a processor, so two
//! consecutive reads of the same register may observe two different physical
//! cores. Callers that need per-processor consistency must arrange affinity
//! themselves.
//!
//! ## Faulting behavior
//!
//! `rdmsr`/`wrmsr` with an architecturally invalid MSR index raise **#GP(0)**.
//! No software validity check is attempted here; the authoritative validity
//! rules are model-specific, so pre-validating indices is a caller obligation.
//!
//! The actual instructions are only compiled for `x86_64` targets with the
//! `asm` feature enabled; the types and constants are available everywhere so
//! that consumers (and their tests) build on any host.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod cpuid;
pub mod msr;
pub mod segment;
pub mod table;

pub use msr::{Msr, MsrValue};
pub use segment::SegmentRegister;
pub use table::DescriptorTablePointer;
