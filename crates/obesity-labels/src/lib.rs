//! Display labels for encoded model features.
//!
//! The encoder upstream of the classifier names its output columns with
//! machine identifiers such as `cat__qtd_agua_Alto_consumo`. This crate turns
//! a batch of those identifiers into Portuguese labels that are unique within
//! the batch, so attribution charts keyed by label never overwrite a bar.
//!
//! ```
//! use obesity_labels::{TranslationTable, translate};
//!
//! let table = TranslationTable::portuguese();
//! let labels = translate(&table, ["num__idade", "cat__qtd_agua_Alto_consumo"]);
//! assert_eq!(labels, ["Idade", "Consumo de Água: Alto Consumo"]);
//! ```

pub mod error;
pub mod format;
pub mod identifier;
pub mod ordering;
pub mod table;
pub mod translate;

pub use error::{LabelError, Result};
pub use format::title_case;
pub use identifier::{FeatureKind, strip_kind_prefix};
pub use ordering::{sort_key, sort_options};
pub use table::TranslationTable;
pub use translate::{EMPTY_LABEL, LabelTranslator, translate};
