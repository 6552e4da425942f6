//! Fuzzing target for decode/encode agreement
//!
//! Any buffer that decodes must re-encode to exactly its first 24 bytes, and
//! any buffer that fails must be shorter than a record.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tracking_record::{RECORD_SIZE, decode, encode};

fuzz_target!(|data: &[u8]| {
    match decode(data) {
        Ok(record) => assert_eq!(encode(&record)[..], data[..RECORD_SIZE]),
        Err(e) => {
            assert!(e.is_insufficient_data());
            assert!(data.len() < RECORD_SIZE);
        }
    }
});
