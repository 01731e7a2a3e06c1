//! CLI argument definitions for the obesity risk explainer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use obesity_model::{
    Frequency, Gender, MainMeals, PhysicalActivity, ScreenTime, Transport, Vegetables, WaterIntake,
};

#[derive(Parser)]
#[command(
    name = "obesity-risk",
    version,
    about = "Obesity risk prediction with per-feature explanations",
    long_about = "Predict obesity risk from lifestyle answers and explain the result.\n\n\
                  Encoded model features are shown with readable Portuguese labels."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./obesity-risk.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact path (overrides [model].path).
    #[arg(long = "model", value_name = "PATH", global = true)]
    pub model: Option<PathBuf>,

    /// Remote model URL used when the local artifact is missing (overrides [model].url).
    #[arg(long = "model-url", value_name = "URL", global = true)]
    pub model_url: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include profile values (age, height, weight) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict the risk class for a profile and explain it.
    Predict(PredictArgs),

    /// Translate encoded feature identifiers into display labels.
    Labels(LabelsArgs),

    /// List the model's encoded features with their labels.
    Features,

    /// List every question and its accepted answers.
    Options,
}

#[derive(Args)]
pub struct PredictArgs {
    /// TOML profile file; flags override its values.
    #[arg(long = "profile", value_name = "FILE")]
    pub profile: Option<PathBuf>,

    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Number of rows in the attribution chart (default: [display].max_display).
    #[arg(long = "max-display", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub max_display: Option<u16>,

    /// Also print the identifier -> label -> encoded value table.
    #[arg(long = "show-mapping")]
    pub show_mapping: bool,

    /// Print the explanation as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// Questionnaire answers given as flags.
#[derive(Args, Default)]
#[command(next_help_heading = "Profile")]
pub struct AnswerArgs {
    /// Age in years (10-100).
    #[arg(long = "age")]
    pub age: Option<u32>,

    /// Height in meters (1.0-2.5).
    #[arg(long = "height")]
    pub height: Option<f64>,

    /// Weight in kilograms (30-200).
    #[arg(long = "weight")]
    pub weight: Option<f64>,

    #[arg(long = "gender")]
    pub gender: Option<Gender>,

    /// Family history of overweight (sim/não).
    #[arg(long = "family-history", value_parser = parse_yes_no)]
    pub family_history: Option<bool>,

    /// Smokes (sim/não).
    #[arg(long = "smokes", value_parser = parse_yes_no)]
    pub smokes: Option<bool>,

    /// Frequently eats high-calorie food (sim/não).
    #[arg(long = "high-calorie-food", value_parser = parse_yes_no)]
    pub high_calorie_food: Option<bool>,

    /// Monitors daily calories (sim/não).
    #[arg(long = "monitors-calories", value_parser = parse_yes_no)]
    pub monitors_calories: Option<bool>,

    #[arg(long = "main-meals")]
    pub main_meals: Option<MainMeals>,

    #[arg(long = "vegetables")]
    pub vegetables: Option<Vegetables>,

    #[arg(long = "water")]
    pub water: Option<WaterIntake>,

    /// Eats between meals.
    #[arg(long = "snacking")]
    pub snacking: Option<Frequency>,

    #[arg(long = "alcohol")]
    pub alcohol: Option<Frequency>,

    #[arg(long = "physical-activity")]
    pub physical_activity: Option<PhysicalActivity>,

    /// Daily time on electronic devices.
    #[arg(long = "screen-time")]
    pub screen_time: Option<ScreenTime>,

    #[arg(long = "transport")]
    pub transport: Option<Transport>,
}

#[derive(Args)]
pub struct LabelsArgs {
    /// Encoded identifiers, e.g. cat__qtd_agua_Alto_consumo.
    #[arg(value_name = "IDS")]
    pub identifiers: Vec<String>,

    /// Read identifiers from a file, one per line (read before IDS).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "sim" | "s" | "yes" | "y" | "true" | "1" => Ok(true),
        "não" | "nao" | "n" | "no" | "false" | "0" => Ok(false),
        other => Err(format!("expected sim or não, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_flags_parse_answers() {
        let cli = Cli::try_parse_from([
            "obesity-risk",
            "predict",
            "--age",
            "40",
            "--transport",
            "Transporte Público",
            "--water",
            "Alto_consumo",
            "--smokes",
            "não",
            "--max-display",
            "5",
        ])
        .unwrap();
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.answers.age, Some(40));
        assert_eq!(args.answers.transport, Some(Transport::PublicTransportation));
        assert_eq!(args.answers.water, Some(WaterIntake::High));
        assert_eq!(args.answers.smokes, Some(false));
        assert_eq!(args.max_display, Some(5));
    }

    #[test]
    fn unknown_answer_is_rejected() {
        assert!(Cli::try_parse_from(["obesity-risk", "predict", "--vegetables", "nunca"]).is_err());
        assert!(Cli::try_parse_from(["obesity-risk", "predict", "--max-display", "0"]).is_err());
    }

    #[test]
    fn yes_no_accepts_portuguese() {
        assert_eq!(parse_yes_no("Sim"), Ok(true));
        assert_eq!(parse_yes_no("NAO"), Ok(false));
        assert!(parse_yes_no("talvez").is_err());
    }
}
