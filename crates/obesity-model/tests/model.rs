//! Tests for obesity-model types.

use obesity_model::{
    FieldValue, Frequency, PatientProfile, Prediction, RiskClass, Transport, WaterIntake, fields,
};

#[test]
fn profile_deserializes_from_partial_toml() {
    let profile: PatientProfile = toml::from_str(
        r#"
age = 41
height_m = 1.62
weight_kg = 88.0
water = "low"
alcohol = "frequently"
transport = "automobile"
"#,
    )
    .expect("parse profile");

    assert_eq!(profile.age, 41);
    assert_eq!(profile.water, WaterIntake::Low);
    assert_eq!(profile.alcohol, Frequency::Frequently);
    assert_eq!(profile.transport, Transport::Automobile);
    // Unspecified answers keep the form defaults.
    assert_eq!(profile.snacking, Frequency::Sometimes);
    // 88 / 1.62^2 = 33.53
    assert_eq!(profile.bmi(), 34);
}

#[test]
fn input_row_carries_encoded_tokens() {
    let row = PatientProfile::default().to_input_row().unwrap();
    assert_eq!(row[fields::WATER], FieldValue::from("Consumo_adequado"));
    assert_eq!(
        row[fields::MAIN_MEALS],
        FieldValue::from("Tres_refeicoes_principais_por_dia")
    );
    assert_eq!(row[fields::GENDER], FieldValue::Number(1.0));
    assert_eq!(row[fields::AGE], FieldValue::Number(25.0));
}

#[test]
fn invalid_profile_has_no_input_row() {
    let profile = PatientProfile {
        age: 7,
        ..PatientProfile::default()
    };
    let err = profile.to_input_row().unwrap_err();
    assert_eq!(err.to_string(), "idade must be between 10 and 100, got 7");
}

#[test]
fn prediction_serializes() {
    let prediction = Prediction {
        class: RiskClass::Low,
        probability: 0.125,
        log_odds: -1.95,
    };
    let json = serde_json::to_string(&prediction).expect("serialize prediction");
    assert!(json.contains("\"class\":\"low\""));
    let round: Prediction = serde_json::from_str(&json).expect("deserialize prediction");
    assert_eq!(round, prediction);
    assert_eq!(round.summary(), "BAIXO RISCO IMEDIATO (12.5%)");
}
