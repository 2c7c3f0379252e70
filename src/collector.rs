use crate::builder::CollectorBuilder;
use crate::config::{JobConfig, Settings};
use crate::error::CollectError;
use crate::extractors::Extractor;
use crate::fetchers::Fetcher;
use crate::model::{found, Extraction, Found, Mode, SpecRecord};
use crate::report::{ImagesOutcome, PageOutcome, RunReport, StepOutcome};
use crate::sleeper::Sleeper;
use crate::writers::{Sheet, SheetWriter};
use log::{debug, error, info, warn};
use reqwest::header::HeaderMap;
use reqwest::Url;
use scraper::Html;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pause between successful image downloads unless configured otherwise
pub const DEFAULT_IMAGE_PAUSE: Duration = Duration::from_secs(10);

/// Name of the folder created inside the output directory for images
pub const IMAGES_DIR: &str = "images";

/// Collects one product page: specification, description and images.
///
/// The collector is immutable once built. Each call to [`Collector::run`]
/// fetches the page once and walks the steps in order; failures are logged
/// and never returned to the caller.
pub struct Collector {
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) output_dir: PathBuf,
    pub(crate) product_id: String,
    pub(crate) extractor: Box<dyn Extractor>,
    pub(crate) fetcher: Box<dyn Fetcher>,
    pub(crate) writer: Box<dyn SheetWriter>,
    pub(crate) sleeper: Box<dyn Sleeper>,
    pub(crate) image_pause: Duration,
}

impl Collector {
    pub fn builder() -> CollectorBuilder {
        CollectorBuilder::default()
    }

    /// Build a collector for a configured job using the shared settings.
    pub fn from_job(job: &JobConfig, settings: &Settings) -> Result<Self, CollectError> {
        Collector::builder()
            .url(job.url.as_str())
            .headers(settings.headers_for(job))
            .output_dir(&job.output_dir)
            .product_id(job.product_id.as_str())
            .manufacturer(job.manufacturer)
            .timeout(settings.timeout())
            .output_format(settings.output_format)
            .image_pause(settings.image_pause())
            .build()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Collect and save everything the page offers.
    pub fn run(&self) {
        self.collect();
    }

    /// Same as [`Collector::run`], returning what each step did.
    pub fn collect(&self) -> RunReport {
        let mut report = RunReport::new(self.url.as_str(), &self.product_id);

        let document = match self.fetch_page() {
            Ok((status, document)) => {
                report.page = PageOutcome::Fetched {
                    http_status: status,
                };
                document
            }
            Err(e) => {
                error!("Page content not received: {}", e);
                let http_status = match &e {
                    CollectError::StatusError { status, .. } => Some(*status),
                    _ => None,
                };
                report.page = PageOutcome::Failed {
                    http_status,
                    error: e.to_string(),
                };
                return report;
            }
        };

        for mode in [Mode::Spec, Mode::Descr, Mode::Images] {
            let extraction = self.extractor.extract(&document, mode);
            debug!("{} extraction: {:?}", extraction.mode(), extraction.status());
            match extraction {
                Extraction::Spec(spec) => report.spec = self.save_spec(&spec),
                Extraction::Descr(descriptions) => {
                    report.descr = self.save_descriptions(&descriptions)
                }
                Extraction::Images(images) => report.images = self.save_images(&images),
            }
        }

        info!(
            "Finished {}: {} file(s) written",
            self.product_id,
            report.files_written().len()
        );
        report
    }

    fn fetch_page(&self) -> Result<(u16, Html), CollectError> {
        info!("Current page: {}", self.url);
        let response = self.fetcher.get_page(self.url.as_str(), &self.headers)?;

        if !response.is_success() {
            return Err(CollectError::StatusError {
                url: self.url.to_string(),
                status: response.status,
            });
        }

        info!("Request status: {} - success", response.status);
        Ok((response.status, Html::parse_document(&response.text)))
    }

    fn sheet_path(&self, suffix: &str) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.{}",
            self.product_id,
            suffix,
            self.writer.extension()
        ))
    }

    fn write_sheet(&self, sheet: &Sheet, suffix: &str, what: &str) -> StepOutcome {
        let path = self.sheet_path(suffix);
        match self.writer.write(sheet, &path) {
            Ok(()) => {
                info!("{} saved to {}", what, path.display());
                StepOutcome::Saved {
                    path,
                    rows: sheet.rows.len(),
                }
            }
            Err(e) => {
                error!("Failed to write {}: {}", path.display(), e);
                StepOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn save_spec(&self, spec: &SpecRecord) -> StepOutcome {
        match spec.status() {
            Found::Empty => {
                info!("Nothing to save: no specification values found");
                StepOutcome::NothingFound
            }
            Found::Mismatched { parameters, values } => {
                warn!(
                    "Specification not saved: {} parameters but {} values",
                    parameters, values
                );
                StepOutcome::Mismatched { parameters, values }
            }
            Found::Some(count) => {
                info!("Received {} specification values", count);
                self.write_sheet(&Sheet::from_spec(spec), "spec", "Specification")
            }
        }
    }

    fn save_descriptions(&self, descriptions: &[String]) -> StepOutcome {
        match found(descriptions) {
            Found::Some(count) => {
                info!("Received {} description fragments", count);
                self.write_sheet(
                    &Sheet::from_descriptions(descriptions),
                    "descr",
                    "Description",
                )
            }
            _ => {
                info!("Nothing to save: no description found");
                StepOutcome::NothingFound
            }
        }
    }

    fn save_images(&self, images: &[String]) -> ImagesOutcome {
        if images.is_empty() {
            info!("No images found");
            return ImagesOutcome::NothingFound;
        }

        info!("Found {} images", images.len());
        let images_dir = self.output_dir.join(IMAGES_DIR);
        if let Err(e) = fs::create_dir_all(&images_dir) {
            error!("Cannot create {}: {}", images_dir.display(), e);
            return ImagesOutcome::Failed {
                error: e.to_string(),
            };
        }

        let mut saved = Vec::new();
        let mut failed = Vec::new();
        let no_headers = HeaderMap::new();

        for (index, src) in images.iter().enumerate() {
            let number = index + 1;
            info!("Image {} of {}: {}", number, images.len(), src);

            let path = images_dir.join(format!("{}_{}.jpg", self.product_id, number));
            match self.download_image(src, &no_headers, &path) {
                Ok(()) => {
                    info!("Image saved to {}", path.display());
                    saved.push(path);
                    if number < images.len() {
                        self.sleeper.sleep(self.image_pause);
                    }
                }
                Err(e) => {
                    warn!("Unable to download image {}: {}", number, e);
                    failed.push(src.clone());
                }
            }
        }

        ImagesOutcome::Downloaded {
            found: images.len(),
            saved,
            failed,
        }
    }

    fn download_image(
        &self,
        src: &str,
        headers: &HeaderMap,
        path: &Path,
    ) -> Result<(), CollectError> {
        if src.trim().is_empty() {
            return Err(CollectError::InvalidUrl("empty image source".to_string()));
        }
        let url = self
            .url
            .join(src)
            .map_err(|e| CollectError::InvalidUrl(format!("{src}: {e}")))?;
        debug!("Resolved image {} to {}", src, url);

        let response = self.fetcher.get(url.as_str(), headers)?;
        if !response.is_success() {
            return Err(CollectError::StatusError {
                url: url.to_string(),
                status: response.status,
            });
        }

        fs::write(path, &response.body)?;
        Ok(())
    }
}
