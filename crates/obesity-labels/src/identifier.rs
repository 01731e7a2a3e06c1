//! Encoded feature identifiers.
//!
//! The encoder names its output columns `<kind>__<field>` for numeric and
//! binary inputs and `<kind>__<field>_<category>` for one-hot expansions,
//! where `<kind>` is one of `num`, `cat` or `bin`.

/// Statistical kind of the original field, as encoded in the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
    Numeric,
    Categorical,
    Binary,
}

impl FeatureKind {
    pub const ALL: [Self; 3] = [Self::Numeric, Self::Categorical, Self::Binary];

    /// Prefix token including the trailing separator, e.g. `num__`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Numeric => "num__",
            Self::Categorical => "cat__",
            Self::Binary => "bin__",
        }
    }

    /// Build the identifier for a numeric or binary field.
    #[must_use]
    pub fn identifier(self, field: &str) -> String {
        format!("{}{field}", self.prefix())
    }

    /// Build the identifier for one category of a categorical field.
    #[must_use]
    pub fn category_identifier(self, field: &str, category: &str) -> String {
        format!("{}{field}_{category}", self.prefix())
    }
}

/// Strip at most one recognized kind prefix from the start of `identifier`.
#[must_use]
pub fn strip_kind_prefix(identifier: &str) -> &str {
    FeatureKind::ALL
        .iter()
        .find_map(|kind| identifier.strip_prefix(kind.prefix()))
        .unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_prefixes() {
        assert_eq!(strip_kind_prefix("num__idade"), "idade");
        assert_eq!(
            strip_kind_prefix("cat__qtd_agua_Alto_consumo"),
            "qtd_agua_Alto_consumo"
        );
        assert_eq!(strip_kind_prefix("bin__b_fuma"), "b_fuma");
    }

    #[test]
    fn strips_only_one_prefix_from_the_start() {
        assert_eq!(strip_kind_prefix("num__cat__idade"), "cat__idade");
        assert_eq!(strip_kind_prefix("x_num__idade"), "x_num__idade");
    }

    #[test]
    fn unknown_prefix_is_kept() {
        assert_eq!(strip_kind_prefix("ord__nivel"), "ord__nivel");
        assert_eq!(strip_kind_prefix("num__"), "");
    }

    #[test]
    fn builds_identifiers() {
        assert_eq!(FeatureKind::Numeric.identifier("imc"), "num__imc");
        assert_eq!(
            FeatureKind::Categorical.category_identifier("qtd_agua", "Baixo_consumo"),
            "cat__qtd_agua_Baixo_consumo"
        );
    }
}
