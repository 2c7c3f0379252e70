use thiserror::Error;

/// Errors that can occur while collecting product data
#[derive(Error, Debug)]
pub enum CollectError {
    /// Network failure from the HTTP client
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    StatusError { url: String, status: u16 },

    /// URL could not be parsed or resolved against the page
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error parsing HTTP header values
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Error parsing HTTP header names
    #[error("Header name error: {0}")]
    HeaderNameError(#[from] reqwest::header::InvalidHeaderName),

    /// Filesystem error while creating directories or writing files
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to write an .xlsx workbook
    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    /// Failed to write a .csv file
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Unknown manufacturer name in configuration
    #[error("Unknown manufacturer: {0}")]
    UnknownManufacturer(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
