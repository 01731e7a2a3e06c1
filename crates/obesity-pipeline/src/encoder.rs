use std::collections::BTreeSet;

use obesity_labels::FeatureKind;
use obesity_model::{FieldValue, InputRow};
use tracing::trace;

use crate::artifact::PreprocessSpec;
use crate::error::{PipelineError, Result};

/// Turns a raw input row into the numeric row the classifier consumes.
///
/// Output columns are ordered numeric, binary, categorical, each group in
/// artifact order, and named `num__<field>`, `bin__<field>` and
/// `cat__<field>_<category>`.
#[derive(Debug, Clone)]
pub struct Encoder {
    spec: PreprocessSpec,
    feature_names: Vec<String>,
}

impl Encoder {
    pub fn new(spec: PreprocessSpec) -> Result<Self> {
        let mut fields = BTreeSet::new();
        let declared = spec
            .numeric
            .iter()
            .map(|column| column.field.as_str())
            .chain(spec.binary.iter().map(String::as_str))
            .chain(spec.categorical.iter().map(|column| column.field.as_str()));
        for field in declared {
            if !fields.insert(field) {
                return Err(PipelineError::InvalidArtifact(format!(
                    "field {field} is declared more than once"
                )));
            }
        }
        for column in &spec.categorical {
            if column.categories.is_empty() {
                return Err(PipelineError::InvalidArtifact(format!(
                    "categorical field {} has no categories",
                    column.field
                )));
            }
        }

        let mut feature_names = Vec::new();
        for column in &spec.numeric {
            feature_names.push(FeatureKind::Numeric.identifier(&column.field));
        }
        for field in &spec.binary {
            feature_names.push(FeatureKind::Binary.identifier(field));
        }
        for column in &spec.categorical {
            for category in &column.categories {
                feature_names
                    .push(FeatureKind::Categorical.category_identifier(&column.field, category));
            }
        }
        Ok(Self {
            spec,
            feature_names,
        })
    }

    /// Encoded feature identifiers, aligned with [`Encoder::transform`] output.
    pub fn feature_names_out(&self) -> &[String] {
        &self.feature_names
    }

    pub fn transform(&self, row: &InputRow) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(self.feature_names.len());
        for column in &self.spec.numeric {
            let raw = number(row, &column.field)?;
            let scale = if column.scale == 0.0 { 1.0 } else { column.scale };
            values.push((raw - column.mean) / scale);
        }
        for field in &self.spec.binary {
            let raw = number(row, field)?;
            if raw != 0.0 && raw != 1.0 {
                return Err(PipelineError::InvalidBinary {
                    field: field.clone(),
                    value: raw,
                });
            }
            values.push(raw);
        }
        for column in &self.spec.categorical {
            let raw = text(row, &column.field)?;
            if !column.categories.iter().any(|category| category == raw) {
                return Err(PipelineError::UnknownCategory {
                    field: column.field.clone(),
                    value: raw.to_string(),
                });
            }
            values.extend(
                column
                    .categories
                    .iter()
                    .map(|category| if category == raw { 1.0 } else { 0.0 }),
            );
        }
        trace!(columns = values.len(), "encoded input row");
        Ok(values)
    }
}

fn field<'a>(row: &'a InputRow, name: &str) -> Result<&'a FieldValue> {
    row.get(name).ok_or_else(|| PipelineError::MissingField {
        field: name.to_string(),
    })
}

fn number(row: &InputRow, name: &str) -> Result<f64> {
    field(row, name)?
        .as_number()
        .ok_or_else(|| PipelineError::WrongType {
            field: name.to_string(),
            expected: "a number",
        })
}

fn text<'a>(row: &'a InputRow, name: &str) -> Result<&'a str> {
    field(row, name)?
        .as_text()
        .ok_or_else(|| PipelineError::WrongType {
            field: name.to_string(),
            expected: "text",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{CategoricalColumn, NumericColumn};

    fn spec() -> PreprocessSpec {
        PreprocessSpec {
            numeric: vec![NumericColumn {
                field: "idade".to_string(),
                mean: 20.0,
                scale: 5.0,
            }],
            binary: vec!["b_fuma".to_string()],
            categorical: vec![CategoricalColumn {
                field: "qtd_agua".to_string(),
                categories: vec!["Baixo_consumo".to_string(), "Alto_consumo".to_string()],
            }],
        }
    }

    fn row(age: f64, smokes: f64, water: &str) -> InputRow {
        InputRow::from([
            ("idade".to_string(), FieldValue::Number(age)),
            ("b_fuma".to_string(), FieldValue::Number(smokes)),
            ("qtd_agua".to_string(), FieldValue::from(water)),
        ])
    }

    #[test]
    fn feature_names_follow_encoder_convention() {
        let encoder = Encoder::new(spec()).unwrap();
        assert_eq!(
            encoder.feature_names_out(),
            [
                "num__idade",
                "bin__b_fuma",
                "cat__qtd_agua_Baixo_consumo",
                "cat__qtd_agua_Alto_consumo"
            ]
        );
    }

    #[test]
    fn transform_scales_and_one_hot_encodes() {
        let encoder = Encoder::new(spec()).unwrap();
        let values = encoder.transform(&row(30.0, 1.0, "Alto_consumo")).unwrap();
        assert_eq!(values, [2.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let encoder = Encoder::new(spec()).unwrap();
        let err = encoder.transform(&row(30.0, 0.0, "Muito")).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownCategory { field, .. } if field == "qtd_agua"));
    }

    #[test]
    fn missing_and_mistyped_fields_are_rejected() {
        let encoder = Encoder::new(spec()).unwrap();
        let mut input = row(30.0, 0.0, "Alto_consumo");
        input.remove("idade");
        assert!(matches!(
            encoder.transform(&input),
            Err(PipelineError::MissingField { .. })
        ));

        let mut input = row(30.0, 0.0, "Alto_consumo");
        input.insert("b_fuma".to_string(), FieldValue::from("sim"));
        assert!(matches!(
            encoder.transform(&input),
            Err(PipelineError::WrongType { expected: "a number", .. })
        ));

        let input = row(30.0, 2.0, "Alto_consumo");
        assert!(matches!(
            encoder.transform(&input),
            Err(PipelineError::InvalidBinary { .. })
        ));
    }

    #[test]
    fn duplicate_fields_are_invalid() {
        let mut spec = spec();
        spec.binary.push("idade".to_string());
        assert!(matches!(
            Encoder::new(spec),
            Err(PipelineError::InvalidArtifact(_))
        ));
    }
}
