use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete risk class returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClass {
    Low,
    High,
}

impl RiskClass {
    /// Headline shown to the user.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::High => "ALTO RISCO DE OBESIDADE",
            Self::Low => "BAIXO RISCO IMEDIATO",
        }
    }

    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

/// Classifier output for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: RiskClass,
    /// Probability of the positive (high risk) class, 0.0 to 1.0.
    pub probability: f64,
    /// Raw model score in log-odds.
    pub log_odds: f64,
}

impl Prediction {
    /// Probability of the positive class as a percentage with one decimal.
    #[must_use]
    pub fn probability_display(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }

    /// Headline plus probability, e.g. `ALTO RISCO DE OBESIDADE (87.3%)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} ({})", self.class.headline(), self.probability_display())
    }
}
