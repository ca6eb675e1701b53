//! # x86 segment selectors and descriptors, decoded
//!
//! Pure bit-layout work: the 16-bit selector decomposition (RPL, table
//! indicator, index) and the 8/16-byte descriptor-table entry format with its
//! non-contiguous base and limit fields. Everything here is total — the CPU
//! defines no invalid encodings at this level, so every bit pattern decodes
//! to *some* view and validity judgments (`present`, privilege levels) are
//! exposed as fields rather than enforced as preconditions.
//!
//! No instruction is executed in this crate; it pairs with
//! `regview-registers`, which supplies the raw values.

#![cfg_attr(not(any(test, doctest)), no_std)]

pub mod descriptor;
pub mod privilege;
pub mod selector;

pub use descriptor::{DescriptorBits, SegmentDescriptorView};
pub use privilege::{Dpl, Rpl};
pub use selector::{Selector, Table};
