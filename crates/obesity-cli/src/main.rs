//! Obesity risk CLI.

use clap::{ColorChoice, Parser};
use obesity_cli::logging::{LogConfig, LogFormat, init_logging};
use obesity_store::StoreError;
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, PredictArgs};
use crate::commands::{
    build_profile, load_config, load_model, run_features, run_labels, run_options, run_predict,
};
use obesity_cli::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match &cli.command {
        Command::Predict(args) => predict(args, &config),
        Command::Labels(args) => report(run_labels(args, &config)),
        Command::Features => match load_model(&config) {
            Ok(model) => report(run_features(&config, &model)),
            Err(error) => model_unavailable(&error),
        },
        Command::Options => report(run_options()),
    };
    std::process::exit(exit_code);
}

fn predict(args: &PredictArgs, config: &AppConfig) -> i32 {
    let profile = match build_profile(args) {
        Ok(profile) => profile,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    let model = match load_model(config) {
        Ok(model) => model,
        Err(error) => return model_unavailable(&error),
    };
    match run_predict(args, &profile, config, &model) {
        Ok(()) => 0,
        Err(error) => {
            error!("prediction failed: {error:#}");
            eprintln!("Erro na predição: {error:#}");
            1
        }
    }
}

fn model_unavailable(error: &StoreError) -> i32 {
    error!("model unavailable: {error}");
    eprintln!("Modelo não carregado. {}", error.user_message());
    eprintln!("error: {error}");
    1
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
