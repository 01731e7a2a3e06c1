pub mod answers;
pub mod error;
pub mod input;
pub mod profile;
pub mod risk;

pub use answers::{
    Answer, Frequency, Gender, MainMeals, PhysicalActivity, ScreenTime, Transport, Vegetables,
    WaterIntake, parse_answer,
};
pub use error::{ModelError, Result};
pub use input::{FieldValue, InputRow};
pub use profile::{PatientProfile, fields};
pub use risk::{Prediction, RiskClass};
