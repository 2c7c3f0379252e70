use crate::error::CollectError;
use crate::writers::{Sheet, SheetWriter};
use std::path::Path;

/// Writes comma-separated values with the header as the first record.
pub struct CsvWriter;

impl SheetWriter for CsvWriter {
    fn extension(&self) -> &str {
        "csv"
    }

    fn write(&self, sheet: &Sheet, path: &Path) -> Result<(), CollectError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_then_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample_descr.csv");
        let sheet = Sheet {
            headers: vec!["Description".to_string()],
            rows: vec![
                vec!["Quiet motor".to_string()],
                vec!["Fits, anywhere".to_string()],
            ],
        };

        CsvWriter.write(&sheet, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Description\nQuiet motor\n\"Fits, anywhere\"\n");
    }
}
