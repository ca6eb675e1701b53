//! The transport abstraction: one inbound request, consumed exactly once.
//!
//! However a request arrives (device node, VM exit, test harness), the
//! dispatcher only ever sees this shape: an operation code, an opaque input
//! buffer of declared length and an output buffer of declared capacity. No
//! request state survives past the [`Completion`].

use crate::status::Status;

/// One inbound request.
///
/// The dispatcher never reads past `input.len()` nor writes past
/// `output.len()`, whatever the handler produces.
#[derive(Debug)]
pub struct IoRequest<'a> {
    code: u32,
    input: &'a [u8],
    output: &'a mut [u8],
}

impl<'a> IoRequest<'a> {
    /// Wraps the caller's buffers and operation code.
    #[inline]
    #[must_use]
    pub fn new(code: u32, input: &'a [u8], output: &'a mut [u8]) -> Self {
        Self {
            code,
            input,
            output,
        }
    }

    /// The operation code supplied by the caller.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The declared input buffer.
    #[inline]
    #[must_use]
    pub const fn input(&self) -> &[u8] {
        self.input
    }

    /// Declared output capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn output_capacity(&self) -> usize {
        self.output.len()
    }

    /// Splits the request into its parts for execution.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (u32, &'a [u8], &'a mut [u8]) {
        (self.code, self.input, self.output)
    }
}

/// The terminal state of a request: a status plus the number of output bytes
/// actually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Outcome reported to the caller.
    pub status: Status,
    /// Bytes written into the output buffer; zero on any failure.
    pub bytes_written: usize,
}

impl Completion {
    /// A successful completion with `bytes_written` output bytes.
    #[inline]
    #[must_use]
    pub const fn success(bytes_written: usize) -> Self {
        Self {
            status: Status::Success,
            bytes_written,
        }
    }

    /// A failed completion; nothing was written.
    #[inline]
    #[must_use]
    pub const fn failed(status: Status) -> Self {
        Self {
            status,
            bytes_written: 0,
        }
    }
}
