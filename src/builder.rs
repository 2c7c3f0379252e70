use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

use crate::collector::{Collector, DEFAULT_IMAGE_PAUSE};
use crate::extractors::{Extractor, Manufacturer};
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::sleeper::{Sleeper, ThreadSleeper};
use crate::writers::{OutputFormat, SheetWriter};
use crate::CollectError;

/// Builder for configuring a [`Collector`]
#[derive(Default)]
pub struct CollectorBuilder {
    url: Option<String>,
    headers: Vec<(String, String)>,
    output_dir: Option<PathBuf>,
    product_id: Option<String>,
    extractor: Option<Box<dyn Extractor>>,
    fetcher: Option<Box<dyn Fetcher>>,
    writer: Option<Box<dyn SheetWriter>>,
    sleeper: Option<Box<dyn Sleeper>>,
    timeout: Option<Duration>,
    image_pause: Option<Duration>,
}

impl CollectorBuilder {
    /// Set the product page URL
    ///
    /// # Example
    /// ```
    /// use appliance_import::Collector;
    ///
    /// let builder = Collector::builder()
    ///     .url("https://www.haier-europe.com/en_GB/product/HB26FSSAAA");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add one header sent with the page request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several headers sent with the page request
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Directory for the spreadsheets; created by [`CollectorBuilder::build`]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Part number or model used to name output files
    pub fn product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = Some(id.into());
        self
    }

    /// Use the extractor for a known manufacturer
    ///
    /// # Example
    /// ```
    /// use appliance_import::{Collector, Manufacturer};
    ///
    /// let builder = Collector::builder()
    ///     .url("https://hisense.com/tv/65U8")
    ///     .manufacturer(Manufacturer::Hisense);
    /// ```
    pub fn manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.extractor = Some(Box::new(manufacturer));
        self
    }

    /// Use a custom extractor
    pub fn extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Replace the HTTP transport
    pub fn fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Replace the spreadsheet writer
    pub fn writer(mut self, writer: Box<dyn SheetWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Select one of the built-in spreadsheet formats
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.writer = Some(format.writer());
        self
    }

    /// Replace how the collector waits between image downloads
    pub fn sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Timeout for the default fetcher; `None` waits indefinitely
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pause after each successful image download (default 10 seconds)
    pub fn image_pause(mut self, pause: Duration) -> Self {
        self.image_pause = Some(pause);
        self
    }

    /// Validate the configuration and create the output directory
    ///
    /// # Errors
    /// Returns `CollectError` if:
    /// - URL, output directory, product id or extractor is missing
    /// - The URL or a header cannot be parsed
    /// - The output directory cannot be created
    pub fn build(self) -> Result<Collector, CollectError> {
        let url = self
            .url
            .ok_or_else(|| CollectError::BuilderError("No URL specified. Use .url()".to_string()))?;
        let url = Url::parse(&url).map_err(|e| CollectError::InvalidUrl(format!("{url}: {e}")))?;

        let output_dir = self.output_dir.ok_or_else(|| {
            CollectError::BuilderError("No output directory specified. Use .output_dir()".to_string())
        })?;
        let product_id = self.product_id.ok_or_else(|| {
            CollectError::BuilderError("No product id specified. Use .product_id()".to_string())
        })?;
        if product_id.trim().is_empty() {
            return Err(CollectError::BuilderError(
                "Product id cannot be empty".to_string(),
            ));
        }
        let extractor = self.extractor.ok_or_else(|| {
            CollectError::BuilderError(
                "No extractor specified. Use .manufacturer() or .extractor()".to_string(),
            )
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(self.timeout)?),
        };

        if !output_dir.exists() {
            debug!("Creating output directory {}", output_dir.display());
        }
        fs::create_dir_all(&output_dir)?;

        Ok(Collector {
            url,
            headers,
            output_dir,
            product_id,
            extractor,
            fetcher,
            writer: self.writer.unwrap_or_else(|| OutputFormat::default().writer()),
            sleeper: self.sleeper.unwrap_or_else(|| Box::new(ThreadSleeper)),
            image_pause: self.image_pause.unwrap_or(DEFAULT_IMAGE_PAUSE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(dir: &std::path::Path) -> CollectorBuilder {
        Collector::builder()
            .url("https://www.candy-home.com/en_GB/product/CS1")
            .output_dir(dir.join("nested/output"))
            .product_id("CS1")
            .manufacturer(Manufacturer::Candy)
    }

    #[test]
    fn test_build_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let collector = base(dir.path()).build().unwrap();
        assert!(collector.output_dir().is_dir());
        assert_eq!(collector.product_id(), "CS1");
        assert_eq!(collector.image_pause, DEFAULT_IMAGE_PAUSE);
    }

    #[test]
    fn test_build_is_idempotent_for_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        base(dir.path()).build().unwrap();
        assert!(base(dir.path()).build().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let result = Collector::builder()
            .output_dir(dir.path())
            .product_id("X")
            .manufacturer(Manufacturer::Haier)
            .build();
        assert!(matches!(result, Err(CollectError::BuilderError(_))));

        let result = Collector::builder()
            .url("https://example.com")
            .output_dir(dir.path())
            .product_id("X")
            .build();
        assert!(matches!(result, Err(CollectError::BuilderError(_))));
    }

    #[test]
    fn test_invalid_url_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let result = base(dir.path()).url("not a url").build();
        assert!(matches!(result, Err(CollectError::InvalidUrl(_))));

        let result = base(dir.path()).header("bad header", "x").build();
        assert!(matches!(result, Err(CollectError::HeaderNameError(_))));

        let result = base(dir.path()).header("x-note", "line\nbreak").build();
        assert!(matches!(result, Err(CollectError::HeaderError(_))));
    }

    #[test]
    fn test_unwritable_output_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, b"not a directory").unwrap();

        let result = base(dir.path()).output_dir(file.join("sub")).build();
        assert!(matches!(result, Err(CollectError::IoError(_))));
    }
}
