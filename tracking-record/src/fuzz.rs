//! Fuzzing entry points
//!
//! [`fuzz_one_input`] is what a libFuzzer target calls with attacker-controlled
//! bytes. [`run_driver`] replays a single input from a reader, for running
//! AFL-style crash files outside a fuzzing engine.

use std::io::{self, Read};

use crate::codec::decode;
use crate::consumer::{Discard, RecordConsumer};
use crate::fp_traps::FpTrapConfig;

/// Largest input [`run_driver`] will read (1 MiB)
pub const MAX_DRIVER_INPUT: usize = 1024 * 1024;

/// Decode `data` and hand the record to the process hook
///
/// Returns 0 when the input decodes and -1 (libFuzzer's "reject", keeping the
/// input out of the corpus) when it does not. Never panics for any input.
pub fn fuzz_one_input(traps: &FpTrapConfig, data: &[u8]) -> i32 {
    traps.install();

    let outcome = decode(data).and_then(|record| Discard.consume(&record));
    match outcome {
        Ok(()) => 0,
        Err(e) => {
            tracing::trace!(len = data.len(), error = %e, "rejected fuzz input");
            -1
        }
    }
}

/// Read at most [`MAX_DRIVER_INPUT`] bytes from `reader` and run them through
/// [`fuzz_one_input`]
pub fn run_driver<R: Read>(reader: R, traps: &FpTrapConfig) -> io::Result<i32> {
    let mut input = Vec::new();
    reader
        .take(MAX_DRIVER_INPUT as u64)
        .read_to_end(&mut input)?;

    tracing::debug!(bytes = input.len(), "driver input loaded");
    Ok(fuzz_one_input(traps, &input))
}
