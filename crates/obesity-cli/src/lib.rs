//! CLI library components for the obesity risk explainer.

pub mod config;
pub mod logging;
pub mod questionnaire;
pub mod summary;
