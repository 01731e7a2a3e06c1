use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info, info_span};

use obesity_cli::config::AppConfig;
use obesity_cli::logging::redact_display;
use obesity_cli::questionnaire::option_groups;
use obesity_cli::summary::{
    labels_table, mapping_table, options_table, print_explanation, print_prediction,
};
use obesity_labels::translate;
use obesity_model::PatientProfile;
use obesity_pipeline::{ChartRow, Explanation};
use obesity_store::{LoadedModel, ModelStore, StoreError};

use crate::cli::{AnswerArgs, Cli, LabelsArgs, PredictArgs};

/// Configuration file (or defaults) with the global CLI overrides applied.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let dir = env::current_dir().context("resolve working directory")?;
    let mut config = AppConfig::load(cli.config.as_deref(), &dir)?;
    if let Some(path) = &cli.model {
        config.model.path = path.clone();
    }
    if let Some(url) = &cli.model_url {
        config.model.url = Some(url.clone());
    }
    Ok(config)
}

pub fn load_model(config: &AppConfig) -> Result<LoadedModel, StoreError> {
    let store = ModelStore::new(config.model.clone())?;
    let loaded = store.load()?;
    info!(
        model = loaded.pipeline.name(),
        source = %loaded.source,
        "model loaded"
    );
    Ok(loaded)
}

/// Profile from `--profile` (or defaults) with the answer flags applied on top.
pub fn build_profile(args: &PredictArgs) -> Result<PatientProfile> {
    let mut profile = match &args.profile {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read profile {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parse profile {}", path.display()))?
        }
        None => PatientProfile::default(),
    };
    apply_answers(&args.answers, &mut profile);
    profile.validate().context("invalid profile")?;
    debug!(
        age = %redact_display(profile.age),
        height = %redact_display(profile.height_m),
        weight = %redact_display(profile.weight_kg),
        "profile collected"
    );
    Ok(profile)
}

fn apply_answers(answers: &AnswerArgs, profile: &mut PatientProfile) {
    set(&mut profile.age, answers.age);
    set(&mut profile.height_m, answers.height);
    set(&mut profile.weight_kg, answers.weight);
    set(&mut profile.gender, answers.gender);
    set(&mut profile.family_history, answers.family_history);
    set(&mut profile.smokes, answers.smokes);
    set(&mut profile.high_calorie_food, answers.high_calorie_food);
    set(&mut profile.monitors_calories, answers.monitors_calories);
    set(&mut profile.main_meals, answers.main_meals);
    set(&mut profile.vegetables, answers.vegetables);
    set(&mut profile.water, answers.water);
    set(&mut profile.snacking, answers.snacking);
    set(&mut profile.alcohol, answers.alcohol);
    set(&mut profile.physical_activity, answers.physical_activity);
    set(&mut profile.screen_time, answers.screen_time);
    set(&mut profile.transport, answers.transport);
}

fn set<T: Copy>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[derive(Serialize)]
struct PredictionReport<'a> {
    model: &'a str,
    version: Option<&'a str>,
    bmi: u32,
    explanation: &'a Explanation,
    chart: Vec<ChartRow>,
}

pub fn run_predict(
    args: &PredictArgs,
    profile: &PatientProfile,
    config: &AppConfig,
    model: &LoadedModel,
) -> Result<()> {
    let span = info_span!("run_predict");
    let _guard = span.enter();
    let max_display = args
        .max_display
        .map_or(config.display.max_display, usize::from);
    let table = config.translation_table()?;
    let row = profile.to_input_row()?;
    let explanation = model.pipeline.explain(&row, &table)?;
    info!(
        class = ?explanation.prediction.class,
        probability = explanation.prediction.probability,
        "prediction complete"
    );

    if args.json {
        let report = PredictionReport {
            model: model.pipeline.name(),
            version: model.pipeline.version(),
            bmi: profile.bmi(),
            explanation: &explanation,
            chart: explanation.top(max_display),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_prediction(&explanation.prediction, &describe(model));
    println!("IMC calculado: {}", profile.bmi());
    print_explanation(&explanation, max_display);
    if args.show_mapping {
        let rows = model.pipeline.mapping(&row, &table)?;
        println!();
        println!("Mapeamento de variáveis:");
        println!("{}", mapping_table(&rows));
    }
    Ok(())
}

pub fn run_labels(args: &LabelsArgs, config: &AppConfig) -> Result<()> {
    let mut identifiers = Vec::new();
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read identifiers {}", path.display()))?;
        identifiers.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    identifiers.extend(args.identifiers.iter().cloned());
    if identifiers.is_empty() {
        bail!("no identifiers given; pass IDS or --input FILE");
    }
    let table = config.translation_table()?;
    let labels = translate(&table, &identifiers);
    println!("{}", labels_table(&identifiers, &labels));
    Ok(())
}

pub fn run_features(config: &AppConfig, model: &LoadedModel) -> Result<()> {
    let table = config.translation_table()?;
    let names = model.pipeline.feature_names();
    let labels = translate(&table, names);
    println!("Modelo: {}", describe(model));
    println!("{}", labels_table(names, &labels));
    Ok(())
}

pub fn run_options() -> Result<()> {
    println!("{}", options_table(&option_groups()));
    Ok(())
}

fn describe(model: &LoadedModel) -> String {
    match model.pipeline.version() {
        Some(version) => format!(
            "{} {} ({})",
            model.pipeline.name(),
            version,
            model.source
        ),
        None => format!("{} ({})", model.pipeline.name(), model.source),
    }
}
