use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown answer {value:?} for {question}")]
    UnknownAnswer {
        question: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
