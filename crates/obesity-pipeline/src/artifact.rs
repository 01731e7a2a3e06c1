//! Serialized form of a fitted pipeline.
//!
//! A model artifact is a JSON document holding the fitted preprocessing step
//! and the classifier parameters:
//!
//! ```json
//! {
//!   "name": "risco_obesidade_logistic",
//!   "version": "1",
//!   "preprocess": {
//!     "numeric": [{ "field": "idade", "mean": 24.3, "scale": 6.3 }],
//!     "binary": ["genero"],
//!     "categorical": [{ "field": "qtd_agua", "categories": ["Alto_consumo", "Baixo_consumo"] }]
//!   },
//!   "classifier": {
//!     "intercept": -0.4,
//!     "threshold": 0.5,
//!     "coefficients": { "num__idade": 0.3, "bin__genero": 0.1, "...": 0.0 },
//!     "background": { "num__idade": 0.0, "bin__genero": 0.5, "...": 0.0 }
//!   }
//! }
//! ```
//!
//! Coefficient and background maps are keyed by encoded feature identifier and
//! must cover exactly the encoder's output columns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub preprocess: PreprocessSpec,
    pub classifier: LogisticSpec,
}

impl ModelArtifact {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fitted column transformer: scaled numerics, passthrough binaries, one-hot categoricals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessSpec {
    #[serde(default)]
    pub numeric: Vec<NumericColumn>,
    #[serde(default)]
    pub binary: Vec<String>,
    #[serde(default)]
    pub categorical: Vec<CategoricalColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub field: String,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
}

fn unit_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub field: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticSpec {
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    pub coefficients: BTreeMap<String, f64>,
    /// Mean of each encoded column over the training data.
    pub background: BTreeMap<String, f64>,
}

fn default_threshold() -> f64 {
    0.5
}
