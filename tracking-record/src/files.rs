//! File-level helpers for the text and binary forms

use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::Path;

use crate::codec::{RecordWriter, decode};
use crate::error::RecordError;
use crate::record::TrackingRecord;
use crate::text::parse_text_bytes;

/// Read a whole binary file and decode the record at its start
pub fn read_record_file(path: &Path) -> Result<TrackingRecord, RecordError> {
    let mut file = File::open(path).map_err(|e| RecordError::file_open(path, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "read record file");
    decode(&data)
}

/// Convert a text record file into a binary record file
///
/// The text is parsed before the destination is touched, so a parse failure
/// leaves any existing destination intact. The destination is created or
/// truncated and receives exactly one encoded record.
pub fn convert_text_file(text_path: &Path, binary_path: &Path) -> Result<TrackingRecord, RecordError> {
    let text = fs::read(text_path).map_err(|e| RecordError::file_open(text_path, e))?;
    let record = parse_text_bytes(&text)?;

    let file = File::create(binary_path).map_err(|e| RecordError::file_open(binary_path, e))?;
    let mut writer = RecordWriter::new(BufWriter::new(file));
    writer.write_record(&record)?;
    writer.flush()?;

    tracing::info!(
        from = %text_path.display(),
        to = %binary_path.display(),
        "converted text record"
    );
    Ok(record)
}
