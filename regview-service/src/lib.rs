//! # IOCTL-style register introspection service
//!
//! The dispatch layer between an untrusted fixed-shape request and the
//! privileged register primitives. A request arrives as an operation code
//! plus bounded input/output buffers ([`IoRequest`]); the dispatcher
//! validates the buffer sizes, decodes the operation, invokes the primitives
//! through the [`RegisterBank`] seam, writes the result at its fixed wire
//! layout and reports a [`Status`].
//!
//! Every request walks Received → Validated → Executed → Completed exactly
//! once. The size gate comes first: nothing touches hardware until both
//! buffers are known to be large enough, and a caller that fails the gate
//! gets [`Status::BufferTooSmall`] back synchronously — never a retry.
//!
//! ## Concurrency
//!
//! Requests are handled synchronously on the calling thread; there is no
//! queue, no worker pool and no shared mutable state inside the dispatcher,
//! so concurrent callers need no coordination from this crate. The registers
//! themselves are per-core, however: two "simultaneous" reads may observe two
//! different physical processors, and no affinity pinning is provided (that
//! is the host environment's job). See the `regview-registers` crate docs.
//!
//! ## Failure semantics
//!
//! Size and operand errors are caller bugs, reported as status codes and
//! recovered locally. A hardware fault from an architecturally invalid MSR
//! index is **not** caught: it propagates as a processor exception, so
//! callers must pre-validate indices they expect to be safe.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod bank;
pub mod dispatch;
pub mod request;
pub mod status;
pub mod wire;

pub use bank::RegisterBank;
pub use dispatch::dispatch;
pub use request::{Completion, IoRequest};
pub use status::{ServiceError, Status};
pub use wire::Operation;
