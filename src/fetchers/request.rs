use crate::error::CollectError;
use crate::fetchers::{FetchResponse, Fetcher, PageResponse};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Blocking HTTP fetcher backed by reqwest.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    /// `None` disables the request timeout entirely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, CollectError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for RequestFetcher {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<FetchResponse, CollectError> {
        debug!("GET {}", url);
        let response = self.client.get(url).headers(headers.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(FetchResponse { status, body })
    }

    fn get_page(&self, url: &str, headers: &HeaderMap) -> Result<PageResponse, CollectError> {
        debug!("GET {}", url);
        let response = self.client.get(url).headers(headers.clone()).send()?;
        let status = response.status().as_u16();
        // Decodes with the Content-Type charset, UTF-8 when none is declared
        let text = response.text()?;
        debug!("GET {} -> {} ({} chars)", url, status, text.chars().count());
        Ok(PageResponse { status, text })
    }
}
