//! The questionnaire a person fills in, and its conversion to a model input row.

use serde::{Deserialize, Serialize};

use crate::answers::{
    Answer, Frequency, Gender, MainMeals, PhysicalActivity, ScreenTime, Transport, Vegetables,
    WaterIntake,
};
use crate::error::{ModelError, Result};
use crate::input::{FieldValue, InputRow};

pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const HEIGHT_RANGE_M: (f64, f64) = (1.0, 2.5);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);

/// Field names the model was trained on.
pub mod fields {
    pub const AGE: &str = "idade";
    pub const GENDER: &str = "genero";
    pub const BMI: &str = "imc";
    pub const FAMILY_HISTORY: &str = "b_historico_familiar";
    pub const SMOKES: &str = "b_fuma";
    pub const HIGH_CALORIE_FOOD: &str = "b_come_alimentos_caloricos";
    pub const MONITORS_CALORIES: &str = "b_monitora_calorias";
    pub const MAIN_MEALS: &str = "qtd_refeicao";
    pub const VEGETABLES: &str = "qtd_vegetais";
    pub const WATER: &str = "qtd_agua";
    pub const SNACKING: &str = "freq_come_fora_refeicao";
    pub const ALCOHOL: &str = "freq_alcool";
    pub const PHYSICAL_ACTIVITY: &str = "qtd_atv_fisicas";
    pub const SCREEN_TIME: &str = "qtd_tmp_na_internet";
    pub const TRANSPORT: &str = "meio_de_transporte";
}

/// Answers collected by the form.
///
/// Defaults mirror the form's initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientProfile {
    pub age: u32,
    pub height_m: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    pub family_history: bool,
    pub smokes: bool,
    pub high_calorie_food: bool,
    pub monitors_calories: bool,
    pub main_meals: MainMeals,
    pub vegetables: Vegetables,
    pub water: WaterIntake,
    pub snacking: Frequency,
    pub alcohol: Frequency,
    pub physical_activity: PhysicalActivity,
    pub screen_time: ScreenTime,
    pub transport: Transport,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            age: 25,
            height_m: 1.70,
            weight_kg: 70.0,
            gender: Gender::default(),
            family_history: true,
            smokes: true,
            high_calorie_food: true,
            monitors_calories: true,
            main_meals: MainMeals::default(),
            vegetables: Vegetables::default(),
            water: WaterIntake::default(),
            snacking: Frequency::Sometimes,
            alcohol: Frequency::Never,
            physical_activity: PhysicalActivity::default(),
            screen_time: ScreenTime::default(),
            transport: Transport::default(),
        }
    }
}

impl PatientProfile {
    /// Reject values outside the ranges the form accepts.
    pub fn validate(&self) -> Result<()> {
        check_range("idade", f64::from(self.age), AGE_RANGE.0.into(), AGE_RANGE.1.into())?;
        check_range("altura", self.height_m, HEIGHT_RANGE_M.0, HEIGHT_RANGE_M.1)?;
        check_range("peso", self.weight_kg, WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1)?;
        Ok(())
    }

    /// Body mass index rounded up to a whole number, as the model expects.
    #[must_use]
    pub fn bmi(&self) -> u32 {
        let raw = self.weight_kg / (self.height_m * self.height_m);
        raw.ceil() as u32
    }

    /// Build the raw input row consumed by the encoder.
    pub fn to_input_row(&self) -> Result<InputRow> {
        self.validate()?;
        let mut row = InputRow::new();
        let mut number = |name: &str, value: f64| {
            row.insert(name.to_string(), FieldValue::Number(value));
        };
        number(fields::AGE, f64::from(self.age));
        number(fields::BMI, f64::from(self.bmi()));
        number(fields::GENDER, f64::from(self.gender.encoded()));
        number(fields::FAMILY_HISTORY, flag(self.family_history));
        number(fields::SMOKES, flag(self.smokes));
        number(fields::HIGH_CALORIE_FOOD, flag(self.high_calorie_food));
        number(fields::MONITORS_CALORIES, flag(self.monitors_calories));

        let mut text = |name: &str, value: &str| {
            row.insert(name.to_string(), FieldValue::Text(value.to_string()));
        };
        text(fields::MAIN_MEALS, self.main_meals.token());
        text(fields::VEGETABLES, self.vegetables.token());
        text(fields::WATER, self.water.token());
        text(fields::SNACKING, self.snacking.token());
        text(fields::ALCOHOL, self.alcohol.token());
        text(fields::PHYSICAL_ACTIVITY, self.physical_activity.token());
        text(fields::SCREEN_TIME, self.screen_time.token());
        text(fields::TRANSPORT, self.transport.token());
        Ok(row)
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(ModelError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
