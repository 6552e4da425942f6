//! Convert a text record to its binary form

use anyhow::{Context, Result};
use std::path::Path;

/// Encode the record in `text` into `binary`
pub fn execute(text: &Path, binary: &Path) -> Result<()> {
    let record = tracking_record::convert_text_file(text, binary).with_context(|| {
        format!(
            "Failed to convert {} -> {}",
            text.display(),
            binary.display()
        )
    })?;

    tracing::debug!(%record, "wrote binary record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_writes_record() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("in.txt");
        let binary = dir.path().join("out.bin");
        std::fs::write(&text, "5 -3 2.5 1700000000").unwrap();

        execute(&text, &binary).unwrap();

        let bytes = std::fs::read(&binary).unwrap();
        assert_eq!(bytes.len(), tracking_record::RECORD_SIZE);
        assert_eq!(bytes[0..4], 5i32.to_ne_bytes());
    }

    #[test]
    fn test_convert_error_names_paths() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("missing.txt");
        let binary = dir.path().join("out.bin");

        let err = execute(&text, &binary).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("missing.txt"));
        assert!(message.contains("could not open"));
        assert_eq!(message.matches("os error").count(), 1, "{message}");
    }
}
