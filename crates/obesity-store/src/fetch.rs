//! Remote retrieval of model artifacts.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// User agent string for download requests.
const USER_AGENT_VALUE: &str = concat!("obesity-risk/", env!("CARGO_PKG_VERSION"));

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves the raw bytes behind a URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Unauthenticated HTTP GET with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("downloading model from {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        debug!(bytes = bytes.len(), "download complete");
        Ok(bytes.to_vec())
    }
}
