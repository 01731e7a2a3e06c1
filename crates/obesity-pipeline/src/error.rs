use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("missing input field {field}")]
    MissingField { field: String },

    #[error("input field {field} must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("binary field {field} must be 0 or 1, got {value}")]
    InvalidBinary { field: String, value: f64 },

    #[error("unknown category {value:?} for field {field}")]
    UnknownCategory { field: String, value: String },

    #[error("expected {expected} encoded features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("missing {table} entry for feature {feature}")]
    MissingParameter {
        table: &'static str,
        feature: String,
    },

    #[error("{table} entry {feature} does not match any encoded feature")]
    UnexpectedParameter {
        table: &'static str,
        feature: String,
    },

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("failed to parse model artifact: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
