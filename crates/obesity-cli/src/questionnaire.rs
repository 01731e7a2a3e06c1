//! The form's questions and answer choices, as offered on the command line.

use obesity_labels::sort_options;
use obesity_model::{
    Answer, Frequency, Gender, MainMeals, PhysicalActivity, ScreenTime, Transport, Vegetables,
    WaterIntake,
};
use serde::Serialize;

/// One question and its choices in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub question: &'static str,
    /// `predict` flag that answers the question.
    pub flag: &'static str,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: &'static str,
    /// Value accepted by the flag.
    pub key: &'static str,
}

/// Every categorical question. Gender and transport are listed
/// alphabetically ignoring accents; the others keep their natural order.
#[must_use]
pub fn option_groups() -> Vec<OptionGroup> {
    vec![
        sorted_group::<Gender>("Gênero", "--gender"),
        group::<MainMeals>("Refeições principais por dia", "--main-meals"),
        group::<Vegetables>("Consome vegetais", "--vegetables"),
        group::<WaterIntake>("Consumo diário de água", "--water"),
        group::<Frequency>("Come entre as refeições", "--snacking"),
        group::<Frequency>("Consumo de álcool", "--alcohol"),
        group::<PhysicalActivity>("Atividade física", "--physical-activity"),
        group::<ScreenTime>("Tempo diário em telas", "--screen-time"),
        sorted_group::<Transport>("Meio de transporte", "--transport"),
    ]
}

fn group<A: Answer>(question: &'static str, flag: &'static str) -> OptionGroup {
    OptionGroup {
        question,
        flag,
        choices: A::ALL.iter().map(|answer| choice(*answer)).collect(),
    }
}

fn sorted_group<A: Answer>(question: &'static str, flag: &'static str) -> OptionGroup {
    let labels: Vec<&str> = A::ALL.iter().map(|answer| answer.label()).collect();
    let choices = sort_options(&labels)
        .iter()
        .filter_map(|label| A::ALL.iter().find(|answer| answer.label() == label.as_str()))
        .map(|answer| choice(*answer))
        .collect();
    OptionGroup {
        question,
        flag,
        choices,
    }
}

fn choice<A: Answer>(answer: A) -> Choice {
    Choice {
        label: answer.label(),
        key: answer.key(),
    }
}
