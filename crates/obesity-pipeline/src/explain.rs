use std::cmp::Ordering;

use obesity_model::Prediction;
use serde::Serialize;

/// One encoded feature's share of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    /// Encoded identifier, e.g. `cat__qtd_agua_Alto_consumo`.
    pub feature: String,
    /// Display label from the translator.
    pub label: String,
    /// Encoded input value fed to the classifier.
    pub value: f64,
    /// Contribution to the log-odds.
    pub contribution: f64,
}

/// A prediction together with per-feature contributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub prediction: Prediction,
    pub base_value: f64,
    pub contributions: Vec<FeatureContribution>,
}

/// A row of a waterfall-style chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    /// `None` for the row aggregating the remaining features.
    pub value: Option<f64>,
    pub contribution: f64,
}

impl Explanation {
    /// Contributions ordered by magnitude, largest first. Ties keep encoder order.
    pub fn ranked(&self) -> Vec<&FeatureContribution> {
        let mut ranked: Vec<&FeatureContribution> = self.contributions.iter().collect();
        ranked.sort_by(|a, b| {
            b.contribution
                .abs()
                .partial_cmp(&a.contribution.abs())
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    /// At most `max_display` rows: the largest contributions, with everything
    /// past `max_display - 1` folded into a single `"<n> outras variáveis"` row.
    pub fn top(&self, max_display: usize) -> Vec<ChartRow> {
        let max_display = max_display.max(1);
        let ranked = self.ranked();
        let shown = if ranked.len() > max_display {
            max_display - 1
        } else {
            ranked.len()
        };
        let mut rows: Vec<ChartRow> = ranked[..shown]
            .iter()
            .map(|item| ChartRow {
                label: item.label.clone(),
                value: Some(item.value),
                contribution: item.contribution,
            })
            .collect();
        let rest = &ranked[shown..];
        if !rest.is_empty() {
            rows.push(ChartRow {
                label: format!("{} outras variáveis", rest.len()),
                value: None,
                contribution: rest.iter().map(|item| item.contribution).sum(),
            });
        }
        rows
    }

    /// Base value plus every contribution.
    #[must_use]
    pub fn output(&self) -> f64 {
        self.base_value
            + self
                .contributions
                .iter()
                .map(|item| item.contribution)
                .sum::<f64>()
    }
}
