use std::path::Path;

use mockforge_core::MockRecord;

use crate::errors::GenerationError;

/// Write records as a pretty-printed JSON array, keys in declaration
/// order. Returns the number of bytes written.
pub fn write_records(path: &Path, records: &[MockRecord]) -> Result<u64, GenerationError> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    std::fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockforge_core::MockValue;

    #[test]
    fn written_document_parses_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("records.json");

        let mut record = MockRecord::new();
        record.insert("id", MockValue::Int(1));
        record.insert("title", MockValue::Text("hello".to_string()));

        let bytes = write_records(&path, &[record.clone(), record]).expect("write");
        assert!(bytes > 0);

        let text = std::fs::read_to_string(&path).expect("read back");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[0]["id"], 1);
    }
}
