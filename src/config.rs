use crate::extractors::Manufacturer;
use crate::writers::OutputFormat;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration file name, looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "appliance";

/// Top-level settings shared by every job
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Pause between image downloads in seconds
    #[serde(default = "default_image_pause_secs")]
    pub image_pause_secs: u64,
    /// Request timeout in seconds; no timeout when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Spreadsheet format for spec and description files
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Headers sent with every page request
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Products to collect, in order
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

/// One product page to collect
#[derive(Debug, Deserialize, Clone)]
pub struct JobConfig {
    /// Product page URL
    pub url: String,
    /// Which manufacturer's markup the page uses
    pub manufacturer: Manufacturer,
    /// Part number or model, used to name output files
    pub product_id: String,
    /// Directory receiving the spreadsheets and the `images` folder
    pub output_dir: PathBuf,
    /// Headers for this job only; override shared headers with the same name
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_pause_secs: default_image_pause_secs(),
            timeout_secs: None,
            output_format: OutputFormat::default(),
            headers: HashMap::new(),
            jobs: Vec::new(),
        }
    }
}

fn default_image_pause_secs() -> u64 {
    10
}

impl Settings {
    /// Load settings from `appliance.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with APPLIANCE__ prefix
    /// 2. appliance.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: APPLIANCE__IMAGE_PAUSE_SECS
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE, false)
    }

    /// Load settings from an explicit file, still honouring environment overrides
    pub fn load_from(path: &str, required: bool) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix("APPLIANCE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from TOML text without consulting the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn image_pause(&self) -> Duration {
        Duration::from_secs(self.image_pause_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Shared headers with the job's own headers layered on top
    pub fn headers_for(&self, job: &JobConfig) -> HashMap<String, String> {
        let mut headers = self.headers.clone();
        headers.extend(job.headers.clone());
        headers
    }
}
