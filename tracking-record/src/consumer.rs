//! Consumers for decoded records
//!
//! A decoded record is handed to exactly one consumer. [`Printer`] renders the
//! human-readable line; [`Discard`] is the default process hook. Any
//! `FnMut(&TrackingRecord)` closure is also a consumer.

use std::io::Write;

use crate::error::RecordError;
use crate::record::TrackingRecord;

/// Receives a decoded record
pub trait RecordConsumer {
    fn consume(&mut self, record: &TrackingRecord) -> Result<(), RecordError>;
}

impl<F> RecordConsumer for F
where
    F: FnMut(&TrackingRecord),
{
    fn consume(&mut self, record: &TrackingRecord) -> Result<(), RecordError> {
        self(record);
        Ok(())
    }
}

/// Process hook that accepts a record and does nothing with it
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl RecordConsumer for Discard {
    fn consume(&mut self, record: &TrackingRecord) -> Result<(), RecordError> {
        tracing::debug!(
            value1 = record.value1(),
            value2 = record.value2(),
            ticks = record.timestamp().ticks(),
            "record processed"
        );
        Ok(())
    }
}

/// Writes one line per record to the wrapped writer
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordConsumer for Printer<W> {
    fn consume(&mut self, record: &TrackingRecord) -> Result<(), RecordError> {
        writeln!(self.out, "{record}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Timestamp;

    fn sample() -> TrackingRecord {
        TrackingRecord::new(5, -3, 2.5, Timestamp::from_ticks(1_700_000_000))
    }

    #[test]
    fn test_printer_line() {
        let mut printer = Printer::new(Vec::new());
        printer.consume(&sample()).unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            out,
            "value1: 5 value2: -3 value3: 2.5 timestamp: 1700000000 custom duration units\n"
        );
    }

    #[test]
    fn test_printer_is_idempotent() {
        let record = sample();
        let mut first = Printer::new(Vec::new());
        let mut second = Printer::new(Vec::new());
        first.consume(&record).unwrap();
        second.consume(&record).unwrap();

        assert_eq!(first.into_inner(), second.into_inner());
    }

    #[test]
    fn test_closure_consumer() {
        let mut seen = Vec::new();
        let mut hook = |record: &TrackingRecord| seen.push(record.value1());
        hook.consume(&sample()).unwrap();
        hook.consume(&sample()).unwrap();

        assert_eq!(seen, vec![5, 5]);
    }

    #[test]
    fn test_discard_accepts_anything() {
        let record = TrackingRecord::new(0, 0, f64::NAN, Timestamp::from_ticks(i64::MAX));
        assert!(Discard.consume(&record).is_ok());
    }
}
