//! Tracking-Record: fixed-layout binary record codec
//!
//! A tracking record is four fixed-width fields packed back to back with no
//! header, no magic, no version tag and no padding. Decoding accepts
//! untrusted buffers of any length and never reads past the end of the
//! supplied slice.
//!
//! # Record Layout
//!
//! ```text
//! Record (24 bytes, native byte order):
//!   0x00: value1    (i32)
//!   0x04: value2    (i32)
//!   0x08: value3    (f64, IEEE-754)
//!   0x10: timestamp (i64, ticks since the Unix epoch; 1 tick = 1 second)
//! ```
//!
//! The encoding uses the host's native byte order, so files are not portable
//! between hosts of different endianness.
//!
//! # Usage
//!
//! ```
//! use tracking_record::{decode, encode, Timestamp, TrackingRecord};
//!
//! let record = TrackingRecord::new(5, -3, 2.5, Timestamp::from_ticks(1_700_000_000));
//! let bytes = encode(&record);
//! assert_eq!(bytes.len(), tracking_record::RECORD_SIZE);
//!
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, record);
//!
//! // Truncated input is rejected, not over-read
//! assert!(decode(&bytes[..10]).is_err());
//! ```

mod codec;
mod consumer;
mod error;
mod files;
mod fp_traps;
mod fuzz;
mod record;
mod text;

pub use codec::{Field, FieldCursor, RecordWriter, decode, encode};
pub use consumer::{Discard, Printer, RecordConsumer};
pub use error::RecordError;
pub use files::{convert_text_file, read_record_file};
pub use fp_traps::{FpTrapConfig, FpTrapStatus};
pub use fuzz::{MAX_DRIVER_INPUT, fuzz_one_input, run_driver};
pub use record::{Timestamp, TrackingRecord};
pub use text::{parse_text_bytes, parse_text_record};

// =============================================================================
// Constants
// =============================================================================

/// Encoded size of one record in bytes
pub const RECORD_SIZE: usize = 24;

/// Unit label printed after a raw tick count
pub const TICK_UNIT_LABEL: &str = "custom duration units";
