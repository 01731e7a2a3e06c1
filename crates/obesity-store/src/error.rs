//! Error types for model loading.

use std::path::PathBuf;

use obesity_pipeline::PipelineError;
use thiserror::Error;

/// Errors that leave the caller without a usable model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Reading the local artifact failed for a reason other than absence.
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The local artifact is absent and no remote URL is configured.
    #[error("model file {path} not found and no remote URL configured")]
    NotFound { path: PathBuf },

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("download of {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// SHA256 checksum verification failed.
    #[error("checksum verification failed: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// The configured checksum is not a SHA256 hex digest.
    #[error("invalid sha256 digest {0:?}")]
    InvalidDigest(String),

    /// The artifact could not be turned into a pipeline.
    #[error("invalid model artifact: {0}")]
    Artifact(#[from] PipelineError),
}

impl StoreError {
    /// Short Portuguese message suitable for end users.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Arquivo do modelo não encontrado.",
            Self::Network(_) | Self::HttpStatus { .. } => {
                "Não foi possível baixar o modelo. Verifique sua conexão."
            }
            Self::ChecksumMismatch { .. } | Self::InvalidDigest(_) => {
                "O arquivo do modelo não passou na verificação de integridade."
            }
            Self::Io { .. } | Self::Artifact(_) => "O arquivo do modelo é inválido ou ilegível.",
        }
    }

    /// Whether retrying the same load could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
