mod csv_writer;
mod xlsx_writer;

pub use self::csv_writer::CsvWriter;
pub use self::xlsx_writer::XlsxWriter;

use crate::error::CollectError;
use crate::model::SpecRecord;
use serde::Deserialize;
use std::path::Path;

/// A header row followed by data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Two columns, `Parameter` and `Value`, one row per pair.
    pub fn from_spec(spec: &SpecRecord) -> Self {
        Sheet {
            headers: vec!["Parameter".to_string(), "Value".to_string()],
            rows: spec
                .rows()
                .map(|(parameter, value)| vec![parameter.to_string(), value.to_string()])
                .collect(),
        }
    }

    /// A single `Description` column.
    pub fn from_descriptions(descriptions: &[String]) -> Self {
        Sheet {
            headers: vec!["Description".to_string()],
            rows: descriptions.iter().map(|d| vec![d.clone()]).collect(),
        }
    }
}

/// Tabular file serialization.
pub trait SheetWriter {
    /// File extension without the dot.
    fn extension(&self) -> &str;
    fn write(&self, sheet: &Sheet, path: &Path) -> Result<(), CollectError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn writer(&self) -> Box<dyn SheetWriter> {
        match self {
            OutputFormat::Xlsx => Box::new(XlsxWriter),
            OutputFormat::Csv => Box::new(CsvWriter),
        }
    }
}
