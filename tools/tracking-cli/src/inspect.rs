//! Decode a binary record and hand it to a consumer

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use tracking_record::{Printer, RecordConsumer, read_record_file};

/// Decode `binary` and print it to `out`
pub fn print(binary: &Path, out: impl Write) -> Result<()> {
    process(binary, &mut Printer::new(out))
}

/// Decode `binary` and pass it to `consumer`
pub fn process(binary: &Path, consumer: &mut impl RecordConsumer) -> Result<()> {
    let record = read_record_file(binary)
        .with_context(|| format!("Failed to read record: {}", binary.display()))?;

    consumer
        .consume(&record)
        .with_context(|| format!("Failed to process record: {}", binary.display()))
}
