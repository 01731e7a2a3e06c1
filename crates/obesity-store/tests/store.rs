//! Integration tests for local-first model loading with remote fallback.

use std::cell::{Cell, RefCell};
use std::fs;

use obesity_store::{
    Fetcher, ModelSource, ModelStore, Result, StoreConfig, StoreError, sha256_hex,
};
use tempfile::TempDir;

const MODEL_JSON: &[u8] = include_bytes!("../../../models/risco_obesidade_logistic.json");
const MODEL_URL: &str = "https://models.example.org/risco_obesidade_logistic.json";

/// Serves a fixed response and counts requests.
struct StubFetcher {
    response: RefCell<Option<Result<Vec<u8>>>>,
    calls: Cell<usize>,
}

impl StubFetcher {
    fn serving(bytes: &[u8]) -> Self {
        Self {
            response: RefCell::new(Some(Ok(bytes.to_vec()))),
            calls: Cell::new(0),
        }
    }

    fn failing(error: StoreError) -> Self {
        Self {
            response: RefCell::new(Some(Err(error))),
            calls: Cell::new(0),
        }
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        assert_eq!(url, MODEL_URL);
        self.calls.set(self.calls.get() + 1);
        self.response
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(StoreError::Network("no more responses".to_string())))
    }
}

fn config_in(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        path: dir.path().join("models").join("model.json"),
        url: Some(MODEL_URL.to_string()),
        ..StoreConfig::default()
    }
}

#[test]
fn local_file_is_used_without_fetching() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::create_dir_all(config.path.parent().unwrap()).unwrap();
    fs::write(&config.path, MODEL_JSON).unwrap();

    let store = ModelStore::with_fetcher(config.clone(), StubFetcher::serving(b"unused"));
    let loaded = store.load().unwrap();

    assert_eq!(loaded.source, ModelSource::Local(config.path));
    assert_eq!(loaded.pipeline.version(), Some("demo-1"));
    assert_eq!(store_calls(&store), 0);
}

#[test]
fn missing_local_file_falls_back_to_remote() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let store = ModelStore::with_fetcher(config.clone(), StubFetcher::serving(MODEL_JSON));
    let loaded = store.load().unwrap();

    assert_eq!(loaded.source, ModelSource::Remote(MODEL_URL.to_string()));
    assert_eq!(loaded.pipeline.feature_names().len(), 37);
    assert_eq!(store_calls(&store), 1);
    assert!(!config.path.exists(), "cache disabled by default");
}

#[test]
fn download_is_cached_when_enabled() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        cache_download: true,
        ..config_in(&dir)
    };

    let store = ModelStore::with_fetcher(config.clone(), StubFetcher::serving(MODEL_JSON));
    store.load().unwrap();
    assert_eq!(fs::read(&config.path).unwrap(), MODEL_JSON);

    // Second load reads the cached copy.
    let loaded = store.load().unwrap();
    assert_eq!(loaded.source, ModelSource::Local(config.path));
    assert_eq!(store_calls(&store), 1);
}

#[test]
fn missing_local_file_without_url_is_not_found() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        url: None,
        ..config_in(&dir)
    };

    let store = ModelStore::with_fetcher(config, StubFetcher::serving(MODEL_JSON));
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(store_calls(&store), 0);
}

#[test]
fn unreadable_local_path_does_not_fetch() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    // A directory at the model path fails with something other than NotFound.
    fs::create_dir_all(&config.path).unwrap();

    let store = ModelStore::with_fetcher(config, StubFetcher::serving(MODEL_JSON));
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }), "got {err:?}");
    assert_eq!(store_calls(&store), 0);
}

#[test]
fn http_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let fetcher = StubFetcher::failing(StoreError::HttpStatus {
        url: MODEL_URL.to_string(),
        status: 404,
    });

    let store = ModelStore::with_fetcher(config_in(&dir), fetcher);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::HttpStatus { status: 404, .. }));
    assert!(!err.is_retryable());
}

#[test]
fn malformed_download_is_rejected_and_not_cached() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        cache_download: true,
        ..config_in(&dir)
    };

    let store = ModelStore::with_fetcher(config.clone(), StubFetcher::serving(b"<html>oops</html>"));
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Artifact(_)));
    assert!(!config.path.exists());
}

#[test]
fn checksum_is_verified_when_configured() {
    let dir = TempDir::new().unwrap();

    let good = StoreConfig {
        sha256: Some(format!("sha256:{}", sha256_hex(MODEL_JSON))),
        ..config_in(&dir)
    };
    let store = ModelStore::with_fetcher(good, StubFetcher::serving(MODEL_JSON));
    assert!(store.load().is_ok());

    let bad = StoreConfig {
        sha256: Some("0".repeat(64)),
        ..config_in(&dir)
    };
    let store = ModelStore::with_fetcher(bad, StubFetcher::serving(MODEL_JSON));
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::ChecksumMismatch { .. }));
}

fn store_calls(store: &ModelStore<StubFetcher>) -> usize {
    store.fetcher().calls.get()
}
