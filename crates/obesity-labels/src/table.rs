//! Base field name to display noun mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LabelError, Result};

/// Portuguese display nouns for every field of the questionnaire.
const PORTUGUESE: &[(&str, &str)] = &[
    ("idade", "Idade"),
    ("genero", "Gênero"),
    ("imc", "Índice de Massa Corporal (IMC)"),
    ("b_historico_familiar", "Histórico Familiar"),
    ("b_fuma", "Hábito de Fumar"),
    ("b_come_alimentos_caloricos", "Consumo de Calóricos"),
    ("b_monitora_calorias", "Monitoramento de Calorias"),
    ("freq_come_fora_refeicao", "Comer entre Refeições"),
    ("freq_alcool", "Consumo de Álcool"),
    ("qtd_atv_fisicas", "Atividade Física"),
    ("qtd_agua", "Consumo de Água"),
    ("qtd_refeicao", "Refeições Principais"),
    ("qtd_vegetais", "Consumo de Vegetais"),
    ("qtd_tmp_na_internet", "Tempo em Telas"),
    ("meio_de_transporte", "Meio de Transporte"),
];

/// Immutable mapping from base field name to display noun.
///
/// Build it once (from [`TranslationTable::portuguese`] or configuration) and
/// pass it by reference to the translator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

/// Result of splitting a prefix-stripped identifier into base and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldSplit<'a> {
    /// The whole text names one field.
    Field(&'a str),
    /// A base field followed by a category value.
    Category { base: &'a str, category: &'a str },
}

impl TranslationTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// The default table of Portuguese display nouns.
    #[must_use]
    pub fn portuguese() -> Self {
        Self::new(PORTUGUESE.iter().copied())
    }

    /// Replace or add entries, rejecting any blank label.
    pub fn try_with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            let field = key.into();
            let label = value.into();
            if label.trim().is_empty() {
                return Err(LabelError::EmptyLabel { field });
            }
            debug!(field = %field, label = %label, "label override");
            self.entries.insert(field, label);
        }
        Ok(self)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split a prefix-stripped identifier into base field and category.
    ///
    /// Text equal to a known field, or without underscores, is a single field.
    /// Otherwise the longest known field followed by `_` is the base; with no
    /// known field the text splits at its first underscore.
    pub(crate) fn split<'a>(&self, name: &'a str) -> FieldSplit<'a> {
        if self.contains(name) || !name.contains('_') {
            return FieldSplit::Field(name);
        }
        let known = self
            .entries
            .keys()
            .filter(|key| {
                name.len() > key.len()
                    && name.starts_with(key.as_str())
                    && name.as_bytes()[key.len()] == b'_'
            })
            .max_by_key(|key| key.len());
        if let Some(key) = known {
            return FieldSplit::Category {
                base: &name[..key.len()],
                category: &name[key.len() + 1..],
            };
        }
        match name.split_once('_') {
            Some((base, category)) => FieldSplit::Category { base, category },
            None => FieldSplit::Field(name),
        }
    }
}
