//! Encoded identifier to display label translation.
//!
//! Several encoded columns can reduce to the same surface text once prefixes
//! are stripped and names are formatted. Attribution charts index bars by
//! label, so every batch is disambiguated: the first occurrence of a label is
//! kept as is and the Nth occurrence gets a `" (N)"` suffix.

use std::collections::{HashMap, HashSet};

use crate::format::title_case;
use crate::identifier::strip_kind_prefix;
use crate::table::{FieldSplit, TranslationTable};

/// Label used when an identifier formats to nothing (e.g. `""` or `"num__"`).
pub const EMPTY_LABEL: &str = "Variável";

/// Separator between the base label and the category label.
pub const CATEGORY_SEPARATOR: &str = ": ";

/// Translates identifiers using a borrowed, read-only table.
#[derive(Debug, Clone, Copy)]
pub struct LabelTranslator<'a> {
    table: &'a TranslationTable,
}

impl<'a> LabelTranslator<'a> {
    #[must_use]
    pub fn new(table: &'a TranslationTable) -> Self {
        Self { table }
    }

    /// Label for a single identifier, before batch disambiguation.
    #[must_use]
    pub fn candidate(&self, identifier: &str) -> String {
        let label = match self.table.split(strip_kind_prefix(identifier)) {
            FieldSplit::Field(field) => self.field_label(field),
            FieldSplit::Category { base, category } => format!(
                "{}{CATEGORY_SEPARATOR}{}",
                self.field_label(base),
                title_case(category)
            ),
        };
        if label.trim().is_empty() {
            EMPTY_LABEL.to_string()
        } else {
            label
        }
    }

    /// Translate a batch of identifiers into unique labels, position by position.
    pub fn translate<I, S>(&self, identifiers: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut disambiguator = Disambiguator::default();
        identifiers
            .into_iter()
            .map(|identifier| disambiguator.resolve(self.candidate(identifier.as_ref())))
            .collect()
    }

    fn field_label(&self, field: &str) -> String {
        match self.table.get(field) {
            Some(label) => label.to_string(),
            None => title_case(field),
        }
    }
}

/// Translate a batch of identifiers with `table`.
///
/// Shorthand for `LabelTranslator::new(table).translate(identifiers)`.
///
/// A name that is itself a table key is one field, even when it contains
/// underscores (`bin__b_fuma` is "Hábito de Fumar", not "B: Fuma"). Other
/// names split after the longest table key followed by `_`, and only names
/// with no such key split at their first underscore.
pub fn translate<I, S>(table: &TranslationTable, identifiers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LabelTranslator::new(table).translate(identifiers)
}

/// Occurrence counting scoped to one batch.
#[derive(Debug, Default)]
struct Disambiguator {
    occurrences: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl Disambiguator {
    fn resolve(&mut self, candidate: String) -> String {
        let count = self.occurrences.entry(candidate.clone()).or_insert(0);
        *count += 1;
        let mut label = if *count == 1 {
            candidate.clone()
        } else {
            suffixed(&candidate, *count)
        };
        // A literal input such as "Sempre (2)" may already hold the suffixed form.
        while self.emitted.contains(&label) {
            *count += 1;
            label = suffixed(&candidate, *count);
        }
        self.emitted.insert(label.clone());
        label
    }
}

fn suffixed(candidate: &str, occurrence: usize) -> String {
    format!("{candidate} ({occurrence})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(identifiers: &[&str]) -> Vec<String> {
        translate(&TranslationTable::portuguese(), identifiers)
    }

    #[test]
    fn numeric_identifier_uses_table() {
        assert_eq!(labels(&["num__idade"]), ["Idade"]);
    }

    #[test]
    fn categorical_identifier_combines_base_and_category() {
        assert_eq!(
            labels(&["cat__qtd_agua_Alto_consumo"]),
            ["Consumo de Água: Alto Consumo"]
        );
    }

    #[test]
    fn binary_field_with_underscores_is_looked_up_whole() {
        assert_eq!(
            labels(&["bin__b_historico_familiar", "bin__b_fuma", "bin__genero"]),
            ["Histórico Familiar", "Hábito de Fumar", "Gênero"]
        );
    }

    #[test]
    fn unknown_fields_fall_back_to_title_case() {
        assert_eq!(
            labels(&["num__pressao", "cat__nivel_stress_Alto"]),
            ["Pressao", "Nivel: Stress Alto"]
        );
    }

    #[test]
    fn unknown_single_field_is_title_cased() {
        assert_eq!(
            labels(&["num__4+refeicoes", "bin__circunferencia"]),
            ["4+Refeicoes", "Circunferencia"]
        );
    }

    #[test]
    fn repeated_labels_get_occurrence_suffix() {
        assert_eq!(
            labels(&["Sempre", "cat__Sempre", "bin__sempre"]),
            ["Sempre", "Sempre (2)", "Sempre (3)"]
        );
    }

    #[test]
    fn suffix_skips_labels_already_emitted() {
        assert_eq!(
            labels(&["Sempre", "Sempre (2)", "Sempre"]),
            ["Sempre", "Sempre (2)", "Sempre (3)"]
        );
        assert_eq!(
            labels(&["Sempre", "Sempre", "Sempre (2)"]),
            ["Sempre", "Sempre (2)", "Sempre (2) (2)"]
        );
    }

    #[test]
    fn empty_identifiers_get_placeholder() {
        assert_eq!(labels(&["", "num__"]), ["Variável", "Variável (2)"]);
    }

    #[test]
    fn empty_batch() {
        assert!(labels(&[]).is_empty());
    }

    #[test]
    fn counters_do_not_leak_between_calls() {
        let table = TranslationTable::portuguese();
        let translator = LabelTranslator::new(&table);
        assert_eq!(translator.translate(["num__idade"]), ["Idade"]);
        assert_eq!(translator.translate(["num__idade"]), ["Idade"]);
    }
}
