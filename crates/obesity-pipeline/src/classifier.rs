//! Risk classifier and its attribution method.

use obesity_model::{Prediction, RiskClass};

use crate::artifact::LogisticSpec;
use crate::error::{PipelineError, Result};

/// Per-feature contributions in the model's output space.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribution {
    /// Model output for the background (average) input.
    pub base_value: f64,
    /// One value per encoded feature, aligned with the encoder's output.
    pub values: Vec<f64>,
}

impl Attribution {
    /// `base_value` plus every contribution: the model output being explained.
    #[must_use]
    pub fn output(&self) -> f64 {
        self.base_value + self.values.iter().sum::<f64>()
    }
}

/// A fitted classifier that can explain its own predictions.
pub trait RiskModel {
    fn predict(&self, features: &[f64]) -> Result<Prediction>;

    fn attribute(&self, features: &[f64]) -> Result<Attribution>;
}

/// Logistic regression over the encoded features.
///
/// Attributions are exact for a linear model with independent features:
/// `phi_i = w_i * (x_i - b_i)` where `b_i` is the background mean of column
/// `i`, so the base value plus all contributions equals the log-odds.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    intercept: f64,
    threshold: f64,
    weights: Vec<f64>,
    background: Vec<f64>,
}

impl LogisticModel {
    pub fn new(
        intercept: f64,
        threshold: f64,
        weights: Vec<f64>,
        background: Vec<f64>,
    ) -> Result<Self> {
        if weights.len() != background.len() {
            return Err(PipelineError::FeatureCountMismatch {
                expected: weights.len(),
                actual: background.len(),
            });
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PipelineError::InvalidArtifact(format!(
                "threshold must be within 0..=1, got {threshold}"
            )));
        }
        Ok(Self {
            intercept,
            threshold,
            weights,
            background,
        })
    }

    /// Align the artifact's keyed parameters with `feature_names`.
    pub fn from_spec(spec: &LogisticSpec, feature_names: &[String]) -> Result<Self> {
        let weights = aligned("coefficients", &spec.coefficients, feature_names)?;
        let background = aligned("background", &spec.background, feature_names)?;
        Self::new(spec.intercept, spec.threshold, weights, background)
    }

    fn log_odds(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(features)
                .map(|(weight, value)| weight * value)
                .sum::<f64>()
    }

    fn check_len(&self, features: &[f64]) -> Result<()> {
        if features.len() != self.weights.len() {
            return Err(PipelineError::FeatureCountMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        Ok(())
    }
}

impl RiskModel for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<Prediction> {
        self.check_len(features)?;
        let log_odds = self.log_odds(features);
        let probability = sigmoid(log_odds);
        let class = if probability >= self.threshold {
            RiskClass::High
        } else {
            RiskClass::Low
        };
        Ok(Prediction {
            class,
            probability,
            log_odds,
        })
    }

    fn attribute(&self, features: &[f64]) -> Result<Attribution> {
        self.check_len(features)?;
        Ok(Attribution {
            base_value: self.log_odds(&self.background),
            values: self
                .weights
                .iter()
                .zip(features.iter().zip(&self.background))
                .map(|(weight, (value, mean))| weight * (value - mean))
                .collect(),
        })
    }
}

fn aligned(
    table: &'static str,
    values: &std::collections::BTreeMap<String, f64>,
    feature_names: &[String],
) -> Result<Vec<f64>> {
    if let Some(extra) = values
        .keys()
        .find(|key| !feature_names.iter().any(|name| name == *key))
    {
        return Err(PipelineError::UnexpectedParameter {
            table,
            feature: extra.clone(),
        });
    }
    feature_names
        .iter()
        .map(|name| {
            values
                .get(name)
                .copied()
                .ok_or_else(|| PipelineError::MissingParameter {
                    table,
                    feature: name.clone(),
                })
        })
        .collect()
}

fn sigmoid(value: f64) -> f64 {
    1.0 / (1.0 + (-value).exp())
}
