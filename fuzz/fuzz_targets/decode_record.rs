//! Fuzzing target for record decoding
//!
//! Feeds arbitrary byte sequences, of any length, through the same entry point
//! the CLI decode path uses. Must never panic or read out of bounds.

#![no_main]

use libfuzzer_sys::{Corpus, fuzz_target};
use tracking_record::{FpTrapConfig, fuzz_one_input};

fuzz_target!(|data: &[u8]| -> Corpus {
    match fuzz_one_input(&FpTrapConfig::enabled(), data) {
        0 => Corpus::Keep,
        _ => Corpus::Reject,
    }
});
