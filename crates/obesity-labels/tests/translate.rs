//! Batch translation properties.

use std::collections::HashSet;

use obesity_labels::{LabelTranslator, TranslationTable, translate};
use proptest::prelude::*;

/// Identifiers produced by the encoder for the questionnaire.
const SAMPLE_FEATURES: &[&str] = &[
    "num__idade",
    "num__imc",
    "bin__genero",
    "bin__b_fuma",
    "cat__qtd_agua_Baixo_consumo",
    "cat__qtd_agua_Alto_consumo",
    "cat__qtd_vegetais_As_vezes",
    "cat__freq_alcool_Sometimes",
    "cat__meio_de_transporte_Public_Transportation",
    "cat__qtd_refeicao_Quatro_ou_mais_refeicoes_principais_por_dia",
    "cat__nivel_stress_Alto",
    "Sempre",
    "cat__Sempre",
];

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "(num__|cat__|bin__)?(Sempre|sempre|idade|qtd_agua_Alto_consumo|b_fuma)?( \\(2\\))?",
        "[a-z_]{0,12}",
    ]
}

proptest! {
    #[test]
    fn output_is_aligned_unique_and_non_empty(ids in prop::collection::vec(identifier(), 0..24)) {
        let table = TranslationTable::portuguese();
        let translator = LabelTranslator::new(&table);
        let labels = translator.translate(&ids);

        prop_assert_eq!(labels.len(), ids.len());

        let distinct: HashSet<&String> = labels.iter().collect();
        prop_assert_eq!(distinct.len(), labels.len());

        for (id, label) in ids.iter().zip(&labels) {
            prop_assert!(!label.is_empty());
            let candidate = translator.candidate(id);
            prop_assert!(
                *label == candidate || label.starts_with(&format!("{candidate} (")),
                "label {:?} does not derive from {:?}", label, id
            );
        }
    }

    #[test]
    fn first_identifier_keeps_its_candidate(ids in prop::collection::vec(identifier(), 1..12)) {
        let table = TranslationTable::portuguese();
        let translator = LabelTranslator::new(&table);
        let labels = translator.translate(&ids);
        prop_assert_eq!(&labels[0], &translator.candidate(&ids[0]));
    }

    #[test]
    fn translation_is_deterministic(ids in prop::collection::vec(identifier(), 0..12)) {
        let table = TranslationTable::portuguese();
        let before = table.clone();
        let first = translate(&table, &ids);
        let second = translate(&table, &ids);
        prop_assert_eq!(first, second);
        prop_assert_eq!(table, before);
    }
}

#[test]
fn collision_suffix_follows_input_order() {
    let table = TranslationTable::portuguese();
    let labels = translate(&table, ["bin__sempre", "num__idade", "cat__Sempre", "Sempre"]);
    assert_eq!(labels, ["Sempre", "Idade", "Sempre (2)", "Sempre (3)"]);
}

#[test]
fn configured_labels_flow_into_categories() {
    let table = TranslationTable::portuguese()
        .try_with_overrides([("qtd_agua", "Ingestão de Água")])
        .unwrap();
    let labels = translate(&table, ["cat__qtd_agua_Alto_consumo"]);
    assert_eq!(labels, ["Ingestão de Água: Alto Consumo"]);
}

#[test]
fn sample_feature_labels_snapshot() {
    let table = TranslationTable::portuguese();
    let labels = translate(&table, SAMPLE_FEATURES);
    let rendered = SAMPLE_FEATURES
        .iter()
        .zip(&labels)
        .map(|(raw, label)| format!("{raw} => {label}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!("sample_feature_labels", rendered);
}
