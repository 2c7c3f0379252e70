pub mod builder;
pub mod collector;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod report;
pub mod sleeper;
pub mod writers;

pub use builder::CollectorBuilder;
pub use collector::{Collector, DEFAULT_IMAGE_PAUSE, IMAGES_DIR};
pub use config::{JobConfig, Settings};
pub use error::CollectError;
pub use extractors::{Extractor, Manufacturer};
pub use model::{Extraction, Found, Mode, SpecRecord};
pub use report::{ImagesOutcome, PageOutcome, RunReport, StepOutcome};

use log::{error, info};

/// Run every configured job in order.
///
/// A job that cannot be set up (bad header, unwritable directory) is logged
/// and left out of the returned reports; the remaining jobs still run.
pub fn collect_all(settings: &Settings) -> Vec<RunReport> {
    let mut reports = Vec::new();
    for (index, job) in settings.jobs.iter().enumerate() {
        info!(
            "Job {} of {}: {} ({})",
            index + 1,
            settings.jobs.len(),
            job.product_id,
            job.manufacturer
        );
        match Collector::from_job(job, settings) {
            Ok(collector) => reports.push(collector.collect()),
            Err(e) => error!("Skipping job {}: {}", job.product_id, e),
        }
    }
    reports
}
