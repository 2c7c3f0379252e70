mod request;

pub use self::request::RequestFetcher;

use crate::error::CollectError;
use reqwest::header::HeaderMap;

/// Raw result of one HTTP GET.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

}

/// Result of fetching a page whose body is read as text.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub text: String,
}

impl PageResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport used by the collector.
///
/// Implementations return `Ok` for every response the server sends,
/// whatever its status; `Err` is reserved for transport failures.
pub trait Fetcher {
    /// Raw body bytes, used for images.
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<FetchResponse, CollectError>;

    /// Body decoded to text. Falls back to lossy UTF-8 over [`Fetcher::get`];
    /// implementations that know the response charset should override it.
    fn get_page(&self, url: &str, headers: &HeaderMap) -> Result<PageResponse, CollectError> {
        let response = self.get(url, headers)?;
        Ok(PageResponse {
            status: response.status,
            text: String::from_utf8_lossy(&response.body).into_owned(),
        })
    }
}
