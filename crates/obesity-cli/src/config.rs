//! TOML configuration for the `obesity-risk` command.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use obesity_labels::{LabelError, TranslationTable};
use obesity_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "obesity-risk.toml";

/// Default number of rows in the attribution chart.
pub const DEFAULT_MAX_DISPLAY: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub model: StoreConfig,
    pub display: DisplayConfig,
    /// Label overrides and additions, keyed by field name.
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub max_display: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_display: DEFAULT_MAX_DISPLAY,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("parse configuration")?;
        if config.display.max_display == 0 {
            bail!("display.max_display must be at least 1");
        }
        config.translation_table().context("invalid [labels] entry")?;
        Ok(config)
    }

    /// Load `explicit` when given, else [`DEFAULT_CONFIG_FILE`] in `dir` when
    /// present, else defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("load configuration {}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// The Portuguese table with the configured overrides applied.
    pub fn translation_table(&self) -> Result<TranslationTable, LabelError> {
        TranslationTable::portuguese().try_with_overrides(self.labels.clone())
    }
}
