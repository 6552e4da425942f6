//! Whitespace-delimited text form of a record
//!
//! The text form is four tokens in record order: `value1 value2 value3 timestamp`.
//! Anything after the fourth token is ignored, including bytes that are not
//! valid UTF-8. Tokens are separated by C-locale whitespace (space, tab,
//! newline, vertical tab, form feed, carriage return).

use std::fmt::Display;
use std::str::FromStr;

use crate::codec::Field;
use crate::error::RecordError;
use crate::record::{Timestamp, TrackingRecord};

/// Parse the first four whitespace-separated tokens of `text` into a record
///
/// # Example
/// ```
/// use tracking_record::parse_text_record;
///
/// let record = parse_text_record("5 -3 2.5 1700000000").unwrap();
/// assert_eq!(record.value2(), -3);
/// ```
pub fn parse_text_record(text: &str) -> Result<TrackingRecord, RecordError> {
    parse_text_bytes(text.as_bytes())
}

/// Byte-level variant of [`parse_text_record`] for raw file contents
///
/// Only the first four tokens must be UTF-8; a token that is not fails with
/// [`RecordError::InvalidToken`].
pub fn parse_text_bytes(text: &[u8]) -> Result<TrackingRecord, RecordError> {
    let mut tokens = text.split(is_separator).filter(|token| !token.is_empty());

    let value1: i32 = next_token(&mut tokens, Field::Value1)?;
    let value2: i32 = next_token(&mut tokens, Field::Value2)?;
    let value3: f64 = next_token(&mut tokens, Field::Value3)?;
    let ticks: i64 = next_token(&mut tokens, Field::Timestamp)?;

    Ok(TrackingRecord::new(
        value1,
        value2,
        value3,
        Timestamp::from_ticks(ticks),
    ))
}

// `u8::is_ascii_whitespace` leaves out vertical tab
fn is_separator(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == 0x0b
}

fn next_token<'a, T>(
    tokens: &mut impl Iterator<Item = &'a [u8]>,
    field: Field,
) -> Result<T, RecordError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = tokens.next().ok_or(RecordError::MissingToken { field })?;
    let invalid = |reason: String| RecordError::InvalidToken {
        field,
        token: String::from_utf8_lossy(raw).into_owned(),
        reason,
    };

    let token = std::str::from_utf8(raw).map_err(|e| invalid(e.to_string()))?;
    token.parse().map_err(|e: T::Err| invalid(e.to_string()))
}
