//! Questionnaire answers.
//!
//! Every categorical question has three spellings for each answer:
//!
//! - **key**: stable snake_case name used in TOML profiles and CLI flags
//! - **label**: Portuguese text shown to the person filling the form
//! - **token**: category value the model was trained on (appears in encoded
//!   feature identifiers such as `cat__qtd_agua_Baixo_consumo`)
//!
//! Parsing accepts any of the three, ignoring ASCII case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Shared behavior of the categorical questionnaire answers.
pub trait Answer: Copy + Sized + 'static {
    /// Name of the question, used in error messages.
    const QUESTION: &'static str;
    /// Every answer in form order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
    fn token(self) -> &'static str;
}

/// Parse an answer from its key, label or token.
pub fn parse_answer<A: Answer>(value: &str) -> Result<A, ModelError> {
    let trimmed = value.trim();
    A::ALL
        .iter()
        .copied()
        .find(|answer| {
            trimmed.eq_ignore_ascii_case(answer.key())
                || trimmed.eq_ignore_ascii_case(answer.token())
                || trimmed.to_lowercase() == answer.label().to_lowercase()
        })
        .ok_or_else(|| ModelError::UnknownAnswer {
            question: A::QUESTION,
            value: value.to_string(),
        })
}

macro_rules! impl_answer_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_answer(s)
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Feminino,
    Masculino,
}

impl Gender {
    /// Binary encoding used by the model (Feminino = 1).
    #[must_use]
    pub const fn encoded(self) -> u8 {
        match self {
            Self::Feminino => 1,
            Self::Masculino => 0,
        }
    }
}

impl Answer for Gender {
    const QUESTION: &'static str = "gênero";
    const ALL: &'static [Self] = &[Self::Feminino, Self::Masculino];

    fn key(self) -> &'static str {
        match self {
            Self::Feminino => "feminino",
            Self::Masculino => "masculino",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Feminino => "Feminino",
            Self::Masculino => "Masculino",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Feminino => "1",
            Self::Masculino => "0",
        }
    }
}

/// Number of main meals per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainMeals {
    One,
    Two,
    #[default]
    Three,
    FourOrMore,
}

impl Answer for MainMeals {
    const QUESTION: &'static str = "refeições principais/dia";
    const ALL: &'static [Self] = &[Self::One, Self::Two, Self::Three, Self::FourOrMore];

    fn key(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
            Self::FourOrMore => "four_or_more",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::FourOrMore => "4+",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::One => "Uma_refeicao_principal_por_dia",
            Self::Two => "Duas_refeicoes_principais_por_dia",
            Self::Three => "Tres_refeicoes_principais_por_dia",
            Self::FourOrMore => "Quatro_ou_mais_refeicoes_principais_por_dia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vegetables {
    Rarely,
    #[default]
    Sometimes,
    Always,
}

impl Answer for Vegetables {
    const QUESTION: &'static str = "frequência de vegetais";
    const ALL: &'static [Self] = &[Self::Rarely, Self::Sometimes, Self::Always];

    fn key(self) -> &'static str {
        match self {
            Self::Rarely => "rarely",
            Self::Sometimes => "sometimes",
            Self::Always => "always",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Rarely => "Raramente",
            Self::Sometimes => "Às vezes",
            Self::Always => "Sempre",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Rarely => "Raramente",
            Self::Sometimes => "As_vezes",
            Self::Always => "Sempre",
        }
    }
}

/// Daily water intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterIntake {
    Low,
    #[default]
    Adequate,
    High,
}

impl Answer for WaterIntake {
    const QUESTION: &'static str = "consumo de água";
    const ALL: &'static [Self] = &[Self::Low, Self::Adequate, Self::High];

    fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Adequate => "adequate",
            Self::High => "high",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "< 1 Litro",
            Self::Adequate => "1-2 Litros",
            Self::High => "> 2 Litros",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Low => "Baixo_consumo",
            Self::Adequate => "Consumo_adequado",
            Self::High => "Alto_consumo",
        }
    }
}

/// Frequency scale shared by the snacking and alcohol questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Never,
    Sometimes,
    Frequently,
    Always,
}

impl Answer for Frequency {
    const QUESTION: &'static str = "frequência";
    const ALL: &'static [Self] = &[
        Self::Never,
        Self::Sometimes,
        Self::Frequently,
        Self::Always,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Sometimes => "sometimes",
            Self::Frequently => "frequently",
            Self::Always => "always",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Never => "Não",
            Self::Sometimes => "Às vezes",
            Self::Frequently => "Frequentemente",
            Self::Always => "Sempre",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Never => "no",
            Self::Sometimes => "Sometimes",
            Self::Frequently => "Frequently",
            Self::Always => "Always",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalActivity {
    #[default]
    Sedentary,
    Low,
    Moderate,
    High,
}

impl Answer for PhysicalActivity {
    const QUESTION: &'static str = "frequência de atividade física";
    const ALL: &'static [Self] = &[Self::Sedentary, Self::Low, Self::Moderate, Self::High];

    fn key(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentário",
            Self::Low => "Baixa",
            Self::Moderate => "Moderada",
            Self::High => "Alta",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentario",
            Self::Low => "Baixa_frequencia",
            Self::Moderate => "Moderada_frequencia",
            Self::High => "Alta_frequencia",
        }
    }
}

/// Daily time spent on electronic devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenTime {
    #[default]
    Low,
    Moderate,
    Intense,
}

impl Answer for ScreenTime {
    const QUESTION: &'static str = "tempo diário em dispositivos eletrônicos";
    const ALL: &'static [Self] = &[Self::Low, Self::Moderate, Self::Intense];

    fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixo (0-2h)",
            Self::Moderate => "Moderado (3-5h)",
            Self::Intense => "Intenso (>5h)",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Low => "Uso_baixo",
            Self::Moderate => "Uso_moderado",
            Self::Intense => "Uso_intenso",
        }
    }
}

/// Main means of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    PublicTransportation,
    Walking,
    Automobile,
    #[default]
    Bike,
    Motorbike,
}

impl Answer for Transport {
    const QUESTION: &'static str = "meio de transporte principal";
    const ALL: &'static [Self] = &[
        Self::PublicTransportation,
        Self::Walking,
        Self::Automobile,
        Self::Bike,
        Self::Motorbike,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::PublicTransportation => "public_transportation",
            Self::Walking => "walking",
            Self::Automobile => "automobile",
            Self::Bike => "bike",
            Self::Motorbike => "motorbike",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PublicTransportation => "Transporte Público",
            Self::Walking => "Caminhada",
            Self::Automobile => "Carro",
            Self::Bike => "Bicicleta",
            Self::Motorbike => "Moto",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::PublicTransportation => "Public_Transportation",
            Self::Walking => "Walking",
            Self::Automobile => "Automobile",
            Self::Bike => "Bike",
            Self::Motorbike => "Motorbike",
        }
    }
}

impl_answer_traits!(Gender);
impl_answer_traits!(MainMeals);
impl_answer_traits!(Vegetables);
impl_answer_traits!(WaterIntake);
impl_answer_traits!(Frequency);
impl_answer_traits!(PhysicalActivity);
impl_answer_traits!(ScreenTime);
impl_answer_traits!(Transport);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_label_and_token() {
        assert_eq!(parse_answer::<WaterIntake>("high"), Ok(WaterIntake::High));
        assert_eq!(
            parse_answer::<WaterIntake>("> 2 Litros"),
            Ok(WaterIntake::High)
        );
        assert_eq!(
            parse_answer::<WaterIntake>("alto_consumo"),
            Ok(WaterIntake::High)
        );
        assert_eq!("ÀS VEZES".parse::<Vegetables>(), Ok(Vegetables::Sometimes));
    }

    #[test]
    fn unknown_answer_names_the_question() {
        let err = "talvez".parse::<Frequency>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownAnswer {
                question: "frequência",
                value: "talvez".to_string(),
            }
        );
    }

    #[test]
    fn tokens_are_unique_per_question() {
        fn assert_unique<A: Answer>() {
            let mut tokens: Vec<_> = A::ALL.iter().map(|a| a.token()).collect();
            tokens.sort_unstable();
            tokens.dedup();
            assert_eq!(tokens.len(), A::ALL.len(), "{}", A::QUESTION);
        }
        assert_unique::<Gender>();
        assert_unique::<MainMeals>();
        assert_unique::<Vegetables>();
        assert_unique::<WaterIntake>();
        assert_unique::<Frequency>();
        assert_unique::<PhysicalActivity>();
        assert_unique::<ScreenTime>();
        assert_unique::<Transport>();
    }

    #[test]
    fn gender_encoding() {
        assert_eq!(Gender::Feminino.encoded(), 1);
        assert_eq!(Gender::Masculino.encoded(), 0);
    }
}
