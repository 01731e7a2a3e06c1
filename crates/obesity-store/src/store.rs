use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use obesity_pipeline::Pipeline;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::error::{Result, StoreError};
use crate::fetch::{DEFAULT_TIMEOUT, Fetcher, HttpFetcher};
use crate::verify::verify_sha256;

/// Default local artifact path, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/risco_obesidade_logistic.json";

/// Where and how to find the model artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Local artifact path, tried first.
    pub path: PathBuf,
    /// Remote artifact URL, fetched when the local file is absent.
    pub url: Option<String>,
    /// Expected SHA256 of the artifact bytes (hex, optionally `sha256:` prefixed).
    pub sha256: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Write a downloaded artifact to `path` for later runs.
    pub cache_download: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            url: None,
            sha256: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            cache_download: false,
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where a loaded model came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    Local(PathBuf),
    Remote(String),
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// A ready pipeline and its origin.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub pipeline: Pipeline,
    pub source: ModelSource,
}

/// Loads the fitted pipeline from local storage, falling back to a remote fetch.
pub struct ModelStore<F = HttpFetcher> {
    config: StoreConfig,
    fetcher: F,
}

impl ModelStore<HttpFetcher> {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout())?;
        Ok(Self { config, fetcher })
    }
}

impl<F: Fetcher> ModelStore<F> {
    pub fn with_fetcher(config: StoreConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Load the model.
    ///
    /// Only a missing local file triggers the remote fetch; any other local
    /// read failure is returned as is.
    pub fn load(&self) -> Result<LoadedModel> {
        let span = info_span!("load_model", path = %self.config.path.display());
        let _guard = span.enter();

        match fs::read(&self.config.path) {
            Ok(bytes) => {
                debug!(bytes = bytes.len(), "read local model");
                let pipeline = self.build(&bytes)?;
                Ok(LoadedModel {
                    pipeline,
                    source: ModelSource::Local(self.config.path.clone()),
                })
            }
            Err(error) if error.kind() == ErrorKind::NotFound => self.load_remote(),
            Err(source) => Err(StoreError::Io {
                path: self.config.path.clone(),
                source,
            }),
        }
    }

    fn load_remote(&self) -> Result<LoadedModel> {
        let Some(url) = self.config.url.as_deref() else {
            return Err(StoreError::NotFound {
                path: self.config.path.clone(),
            });
        };
        info!("local model not found, fetching {}", url);
        let bytes = self.fetcher.fetch(url)?;
        let pipeline = self.build(&bytes)?;
        if self.config.cache_download {
            self.cache(&bytes);
        }
        Ok(LoadedModel {
            pipeline,
            source: ModelSource::Remote(url.to_string()),
        })
    }

    fn build(&self, bytes: &[u8]) -> Result<Pipeline> {
        if let Some(expected) = &self.config.sha256 {
            verify_sha256(bytes, expected)?;
        }
        Ok(Pipeline::from_json_slice(bytes)?)
    }

    /// Best effort: a failed cache write never fails the load.
    fn cache(&self, bytes: &[u8]) {
        let path = &self.config.path;
        let written = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(path, bytes));
        match written {
            Ok(()) => info!("cached model at {}", path.display()),
            Err(error) => warn!("failed to cache model at {}: {}", path.display(), error),
        }
    }
}
