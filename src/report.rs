use serde::Serialize;
use std::path::PathBuf;

/// What happened during one collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub url: String,
    pub product_id: String,
    pub page: PageOutcome,
    pub spec: StepOutcome,
    pub descr: StepOutcome,
    pub images: ImagesOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    Fetched { http_status: u16 },
    Failed { http_status: Option<u16>, error: String },
}

/// Outcome of the specification or description step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Not attempted because the page could not be fetched
    Skipped,
    NothingFound,
    /// Parameters and values could not be paired
    Mismatched { parameters: usize, values: usize },
    Saved { path: PathBuf, rows: usize },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImagesOutcome {
    Skipped,
    NothingFound,
    Downloaded {
        found: usize,
        saved: Vec<PathBuf>,
        failed: Vec<String>,
    },
    Failed { error: String },
}

impl RunReport {
    pub(crate) fn new(url: &str, product_id: &str) -> Self {
        RunReport {
            url: url.to_string(),
            product_id: product_id.to_string(),
            page: PageOutcome::Failed {
                http_status: None,
                error: "not fetched".to_string(),
            },
            spec: StepOutcome::Skipped,
            descr: StepOutcome::Skipped,
            images: ImagesOutcome::Skipped,
        }
    }

    /// Every file written during the run, spreadsheets first.
    pub fn files_written(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for step in [&self.spec, &self.descr] {
            if let StepOutcome::Saved { path, .. } = step {
                files.push(path.clone());
            }
        }
        if let ImagesOutcome::Downloaded { saved, .. } = &self.images {
            files.extend(saved.iter().cloned());
        }
        files
    }
}
