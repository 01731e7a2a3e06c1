use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("empty display label for field {field:?}")]
    EmptyLabel { field: String },
}

pub type Result<T> = std::result::Result<T, LabelError>;
