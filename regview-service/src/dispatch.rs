//! The request dispatcher.
//!
//! One synchronous pass per request: decode the operation code, enforce the
//! size preconditions, run the operation against the [`RegisterBank`], write
//! the result at its fixed layout. Either failure gate completes the request
//! without invoking a single primitive — the buffers are caller-supplied and
//! treated as adversarial until both checks pass.

use crate::bank::RegisterBank;
use crate::request::{Completion, IoRequest};
use crate::status::ServiceError;
use crate::wire::{self, Operation};
use log::{debug, trace};
use regview_descriptor::{Selector, SegmentDescriptorView, Table};
use regview_registers::{Msr, MsrValue, SegmentRegister};

/// Handles one request to completion and reports the outcome.
///
/// Every path produces exactly one [`Completion`]; failures are synchronous
/// status codes, never retried internally.
pub fn dispatch<B: RegisterBank>(bank: &B, request: IoRequest<'_>) -> Completion {
    let (code, input, output) = request.into_parts();

    let Some(operation) = Operation::from_code(code) else {
        debug!("dispatch: unsupported operation code {code:#x}");
        return Completion::failed(ServiceError::UnsupportedOperation { code }.into());
    };
    trace!(
        "dispatch: {} input={} output={}",
        operation.name(),
        input.len(),
        output.len()
    );

    // The safety gate: nothing below runs until the caller's declared sizes
    // cover both the operation's input and its produced result.
    if let Err(error) = validate(operation, input.len(), output.len()) {
        debug!("dispatch: {} rejected: {error}", operation.name());
        return Completion::failed(error.into());
    }

    match execute(bank, operation, input, output) {
        Ok(bytes_written) => Completion::success(bytes_written),
        Err(error) => {
            debug!("dispatch: {} failed: {error}", operation.name());
            Completion::failed(error.into())
        }
    }
}

/// Received → Validated: both buffers must cover the operation's fixed sizes.
const fn validate(
    operation: Operation,
    input_len: usize,
    output_capacity: usize,
) -> Result<(), ServiceError> {
    if input_len < operation.input_len() {
        return Err(ServiceError::BufferTooSmall {
            required: operation.input_len(),
            provided: input_len,
        });
    }
    if output_capacity < operation.output_len() {
        return Err(ServiceError::BufferTooSmall {
            required: operation.output_len(),
            provided: output_capacity,
        });
    }
    Ok(())
}

/// Validated → Executed: run the operation and write its result.
///
/// Returns the number of output bytes written.
fn execute<B: RegisterBank>(
    bank: &B,
    operation: Operation,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, ServiceError> {
    match operation {
        Operation::ReadMsr => {
            let msr = Msr::new(wire::get_u32(input, 0));
            let value = bank.read_msr(msr);
            wire::put_msr_value(value, output);
            Ok(wire::READ_MSR_OUT_LEN)
        }
        Operation::WriteMsr => {
            let msr = Msr::new(wire::get_u32(input, 0));
            let value = MsrValue {
                low: wire::get_u32(input, 4),
                high: wire::get_u32(input, 8),
            };
            bank.write_msr(msr, value);
            Ok(0)
        }
        Operation::QuerySegment => {
            let index = wire::get_u16(input, 0);
            let register = SegmentRegister::from_index(index).ok_or(
                ServiceError::InvalidOperand {
                    value: u32::from(index),
                },
            )?;
            let selector = Selector::from_bits(bank.segment_selector(register));
            let view = resolve_descriptor(bank, selector);
            wire::put_segment_query(selector, &view, output);
            Ok(wire::QUERY_SEGMENT_OUT_LEN)
        }
    }
}

/// Resolves the descriptor backing a selector through the GDT.
///
/// LDT-backed selectors and indices past the GDTR limit resolve to the
/// all-zero (non-present) view; the selector itself is still reported.
fn resolve_descriptor<B: RegisterBank>(bank: &B, selector: Selector) -> SegmentDescriptorView {
    match selector.table() {
        Table::Gdt => bank
            .descriptor_entry(selector.index())
            .map_or_else(
                || SegmentDescriptorView::decode(0),
                |raw| SegmentDescriptorView::decode(u64::from_le_bytes(raw)),
            ),
        Table::Ldt => SegmentDescriptorView::decode(0),
    }
}
