//! Status codes and the internal error taxonomy.
//!
//! Two recoverable error classes exist: **precondition** errors (a buffer too
//! small, caught before anything runs) and **operand** errors (a value that
//! decoded fine but names nothing, caught before hardware is touched). Both
//! become a status code for the caller. Hardware faults have no
//! representation here on purpose; they are never caught.

/// The per-request outcome reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Status {
    /// The operation ran and the output buffer holds the result.
    Success = 0,
    /// Input too short or output capacity below the produced-result size.
    BufferTooSmall = 1,
    /// A recognized operation was given an operand outside its domain.
    InvalidOperand = 2,
    /// The operation code names no known operation.
    UnsupportedOperation = 3,
}

impl Status {
    /// The numeric wire form of the status.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Internal error for the recoverable failure paths of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// A buffer fails the size precondition for the requested operation.
    #[error("buffer too small: operation needs {required} bytes, caller declared {provided}")]
    BufferTooSmall { required: usize, provided: usize },
    /// An operand decoded from the input names nothing (e.g. segment
    /// register index above 5).
    #[error("invalid operand value {value:#x}")]
    InvalidOperand { value: u32 },
    /// The operation code is not part of the wire contract.
    #[error("unsupported operation code {code:#x}")]
    UnsupportedOperation { code: u32 },
}

impl From<ServiceError> for Status {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::BufferTooSmall { .. } => Self::BufferTooSmall,
            ServiceError::InvalidOperand { .. } => Self::InvalidOperand,
            ServiceError::UnsupportedOperation { .. } => Self::UnsupportedOperation,
        }
    }
}
