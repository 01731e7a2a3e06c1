//! Prediction pipeline: encoder, risk classifier and explanation.
//!
//! A [`Pipeline`] is built from a [`ModelArtifact`]. It encodes a raw
//! [`InputRow`], predicts the risk class and explains the prediction with
//! per-feature contributions labelled by the translator from
//! `obesity-labels`.

pub mod artifact;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod explain;

pub use artifact::{CategoricalColumn, LogisticSpec, ModelArtifact, NumericColumn, PreprocessSpec};
pub use classifier::{Attribution, LogisticModel, RiskModel};
pub use encoder::Encoder;
pub use error::{PipelineError, Result};
pub use explain::{ChartRow, Explanation, FeatureContribution};

use obesity_labels::{TranslationTable, translate};
use obesity_model::{InputRow, Prediction};
use serde::Serialize;
use tracing::{debug, info_span};

/// One row of the identifier-to-label debug mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingRow {
    pub feature: String,
    pub label: String,
    pub value: f64,
}

/// A fitted preprocessing step and classifier.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    version: Option<String>,
    encoder: Encoder,
    model: LogisticModel,
}

impl Pipeline {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let encoder = Encoder::new(artifact.preprocess)?;
        let model = LogisticModel::from_spec(&artifact.classifier, encoder.feature_names_out())?;
        debug!(
            name = %artifact.name,
            features = encoder.feature_names_out().len(),
            "pipeline ready"
        );
        Ok(Self {
            name: artifact.name,
            version: artifact.version,
            encoder,
            model,
        })
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_artifact(ModelArtifact::from_json_slice(bytes)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn feature_names(&self) -> &[String] {
        self.encoder.feature_names_out()
    }

    pub fn predict(&self, row: &InputRow) -> Result<Prediction> {
        let span = info_span!("predict", model = %self.name);
        let _guard = span.enter();
        let features = self.encoder.transform(row)?;
        self.model.predict(&features)
    }

    /// Predict and attribute, with identifiers replaced by display labels.
    pub fn explain(&self, row: &InputRow, table: &TranslationTable) -> Result<Explanation> {
        let span = info_span!("explain", model = %self.name);
        let _guard = span.enter();
        let features = self.encoder.transform(row)?;
        let prediction = self.model.predict(&features)?;
        let attribution = self.model.attribute(&features)?;
        let labels = translate(table, self.feature_names());
        let contributions = self
            .feature_names()
            .iter()
            .zip(labels)
            .zip(features.iter().zip(&attribution.values))
            .map(|((feature, label), (value, contribution))| FeatureContribution {
                feature: feature.clone(),
                label,
                value: *value,
                contribution: *contribution,
            })
            .collect();
        debug!(
            probability = prediction.probability,
            base_value = attribution.base_value,
            "prediction explained"
        );
        Ok(Explanation {
            prediction,
            base_value: attribution.base_value,
            contributions,
        })
    }

    /// Raw identifier, translated label and encoded value for every feature.
    pub fn mapping(&self, row: &InputRow, table: &TranslationTable) -> Result<Vec<MappingRow>> {
        let features = self.encoder.transform(row)?;
        let labels = translate(table, self.feature_names());
        Ok(self
            .feature_names()
            .iter()
            .zip(labels)
            .zip(features)
            .map(|((feature, label), value)| MappingRow {
                feature: feature.clone(),
                label,
                value,
            })
            .collect())
    }
}
