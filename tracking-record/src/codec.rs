//! Record codec: fixed-layout encode and bounds-checked decode

use std::io::{self, Write};

use byteorder::{ByteOrder, NativeEndian, WriteBytesExt};

use crate::RECORD_SIZE;
use crate::error::RecordError;
use crate::record::{Timestamp, TrackingRecord};

/// Record fields in on-disk order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Value1,
    Value2,
    Value3,
    Timestamp,
}

impl Field {
    /// All fields, in encoding order
    pub const ALL: [Field; 4] = [Field::Value1, Field::Value2, Field::Value3, Field::Timestamp];

    /// Byte offset of the field within a record
    pub const fn offset(self) -> usize {
        match self {
            Field::Value1 => 0,
            Field::Value2 => 4,
            Field::Value3 => 8,
            Field::Timestamp => 16,
        }
    }

    /// Encoded width in bytes
    pub const fn width(self) -> usize {
        match self {
            Field::Value1 | Field::Value2 => 4,
            Field::Value3 | Field::Timestamp => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Value1 => "value1",
            Field::Value2 => "value2",
            Field::Value3 => "value3",
            Field::Timestamp => "timestamp",
        }
    }

    const fn range(self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.width()
    }
}

/// Encode a record into its 24-byte native-endian form
pub fn encode(record: &TrackingRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    NativeEndian::write_i32(&mut buf[Field::Value1.range()], record.value1());
    NativeEndian::write_i32(&mut buf[Field::Value2.range()], record.value2());
    NativeEndian::write_f64(&mut buf[Field::Value3.range()], record.value3());
    NativeEndian::write_i64(&mut buf[Field::Timestamp.range()], record.timestamp().ticks());
    buf
}

/// Decode a record from the start of an untrusted buffer
///
/// Fields are read sequentially; every read is checked against the buffer
/// length first. Buffers shorter than [`RECORD_SIZE`] fail with
/// [`RecordError::InsufficientData`] naming the first field that did not fit.
/// Bytes past [`RECORD_SIZE`] are ignored. Any bit pattern is accepted for
/// every field, including non-finite doubles.
pub fn decode(data: &[u8]) -> Result<TrackingRecord, RecordError> {
    let mut cursor = FieldCursor::new(data);

    let value1 = cursor.read_i32(Field::Value1)?;
    let value2 = cursor.read_i32(Field::Value2)?;
    let value3 = cursor.read_f64(Field::Value3)?;
    let ticks = cursor.read_i64(Field::Timestamp)?;

    if cursor.remaining() > 0 {
        tracing::trace!(trailing = cursor.remaining(), "ignoring bytes past record end");
    }

    Ok(TrackingRecord::new(
        value1,
        value2,
        value3,
        Timestamp::from_ticks(ticks),
    ))
}

/// Sequential reader over a borrowed byte slice
///
/// Never indexes past the end of the slice: each read verifies
/// `position + width <= len` and fails without advancing otherwise.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn read_i32(&mut self, field: Field) -> Result<i32, RecordError> {
        self.take(field).map(NativeEndian::read_i32)
    }

    pub fn read_f64(&mut self, field: Field) -> Result<f64, RecordError> {
        self.take(field).map(NativeEndian::read_f64)
    }

    pub fn read_i64(&mut self, field: Field) -> Result<i64, RecordError> {
        self.take(field).map(NativeEndian::read_i64)
    }

    fn take(&mut self, field: Field) -> Result<&'a [u8], RecordError> {
        let needed = field.width();
        let end = self
            .position
            .checked_add(needed)
            .filter(|&end| end <= self.data.len())
            .ok_or(RecordError::InsufficientData {
                field,
                offset: self.position,
                needed,
                available: self.data.len(),
            })?;

        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

/// Streaming writer for encoded records
pub struct RecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one record (exactly [`RECORD_SIZE`] bytes)
    pub fn write_record(&mut self, record: &TrackingRecord) -> io::Result<()> {
        self.writer.write_i32::<NativeEndian>(record.value1())?;
        self.writer.write_i32::<NativeEndian>(record.value2())?;
        self.writer.write_f64::<NativeEndian>(record.value3())?;
        self.writer
            .write_i64::<NativeEndian>(record.timestamp().ticks())?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrackingRecord {
        TrackingRecord::new(5, -3, 2.5, Timestamp::from_ticks(1_700_000_000))
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&sample());

        assert_eq!(bytes.len(), 24);
        assert_eq!(bytes[0..4], 5i32.to_ne_bytes());
        assert_eq!(bytes[4..8], (-3i32).to_ne_bytes());
        assert_eq!(bytes[8..16], 2.5f64.to_ne_bytes());
        assert_eq!(bytes[16..24], 1_700_000_000i64.to_ne_bytes());
    }

    #[test]
    fn test_writer_matches_encode() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_record(&sample()).unwrap();
        let buffer = writer.into_inner();

        assert_eq!(buffer, encode(&sample()));
    }

    #[test]
    fn test_decode_all_zero() {
        let record = decode(&[0u8; 24]).unwrap();

        assert_eq!(record.value1(), 0);
        assert_eq!(record.value2(), 0);
        assert_eq!(record.value3(), 0.0);
        assert_eq!(record.timestamp().ticks(), 0);
    }

    #[test]
    fn test_decode_ten_bytes() {
        let err = decode(&[0xAB; 10]).unwrap_err();

        // value1 and value2 fit, value3 needs bytes 8..16
        match err {
            RecordError::InsufficientData {
                field,
                offset,
                needed,
                available,
            } => {
                assert_eq!(field, Field::Value3);
                assert_eq!(offset, 8);
                assert_eq!(needed, 8);
                assert_eq!(available, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_empty() {
        let err = decode(&[]).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InsufficientData {
                field: Field::Value1,
                offset: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_one_short() {
        let bytes = encode(&sample());
        let err = decode(&bytes[..23]).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InsufficientData {
                field: Field::Timestamp,
                offset: 16,
                available: 23,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut bytes = encode(&sample()).to_vec();
        bytes.extend_from_slice(b"trailing garbage");

        assert_eq!(decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_decode_accepts_nan() {
        let record = TrackingRecord::new(-1, i32::MAX, f64::NAN, Timestamp::from_ticks(i64::MIN));
        let decoded = decode(&encode(&record)).unwrap();

        assert!(decoded.value3().is_nan());
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_cursor_does_not_advance_on_failure() {
        let data = [1u8, 0, 0, 0, 2, 0];
        let mut cursor = FieldCursor::new(&data);

        cursor.read_i32(Field::Value1).unwrap();
        assert_eq!(cursor.position(), 4);

        assert!(cursor.read_i32(Field::Value2).is_err());
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), 2);
    }
}
