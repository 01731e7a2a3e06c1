//! Model store for the obesity risk explainer.
//!
//! The fitted pipeline is read from a local JSON artifact. When that file is
//! absent the store fetches the artifact with an unauthenticated HTTP GET from
//! a configured URL, optionally verifies its SHA256 digest, and optionally
//! caches it locally. Any failure leaves the caller without a model; callers
//! treat that as "no prediction possible".

pub mod error;
pub mod fetch;
pub mod store;
pub mod verify;

pub use error::{Result, StoreError};
pub use fetch::{DEFAULT_TIMEOUT, Fetcher, HttpFetcher};
pub use store::{DEFAULT_MODEL_PATH, LoadedModel, ModelSource, ModelStore, StoreConfig};
pub use verify::{sha256_hex, verify_sha256};
