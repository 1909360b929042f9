use std::path::Path;

use mockforge_core::MockRecord;

use crate::errors::GenerationError;

/// Write records as CSV. The header comes from the first record's keys
/// in declaration order; nested lists and records are embedded as JSON
/// strings. Returns the number of bytes written.
pub fn write_records(path: &Path, records: &[MockRecord]) -> Result<u64, GenerationError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if let Some(first) = records.first() {
        let header: Vec<&str> = first.keys().collect();
        writer.write_record(&header)?;

        for record in records {
            let row: Vec<String> = header
                .iter()
                .map(|key| record.get(key).map(|value| value.to_csv()).unwrap_or_default())
                .collect();
            writer.write_record(&row)?;
        }
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}
