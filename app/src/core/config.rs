use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gridfilter::{ColumnCatalog, ColumnOption};
use serde::{Deserialize, Serialize};

use crate::utils::file::expand_home;

use super::cli::CliConfig;
use super::constants::CONFIG_FILE_NAME;

// =============================================================================
// Output Format Enum
// =============================================================================

/// How committed filter sets are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON array of predicates per commit
    #[default]
    Json,
    /// Sentence form, e.g. `where Age contains "x"`
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

// =============================================================================
// File Configuration
// =============================================================================

/// Output section of the config file
#[derive(Debug, Default, Deserialize)]
pub struct OutputFileConfig {
    pub format: Option<OutputFormat>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub columns: Option<Vec<ColumnOption>>,
    pub output: Option<OutputFileConfig>,
    pub prompt: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Names of top-level keys this version does not understand
    fn unknown_fields(&self) -> Vec<&str> {
        match &self.extra {
            serde_json::Value::Object(map) => map.keys().map(|k| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        let unknown = self.unknown_fields();
        if !unknown.is_empty() {
            tracing::warn!(
                fields = %unknown.join(", "),
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Resolved configuration: defaults, then config file, then CLI/env
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub columns: ColumnCatalog,
    pub output: OutputFormat,
    pub prompt: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns: ColumnCatalog::default(),
            output: OutputFormat::default(),
            prompt: true,
        }
    }
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        // Explicit path must exist; the local file is optional
        let path = if let Some(ref path) = cli.config {
            let expanded = expand_home(path);
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        let file_config = match path {
            Some(path) => {
                let config = FileConfig::load_from_file(&path)?;
                config.warn_unknown_fields();
                config
            }
            None => FileConfig::default(),
        };

        Ok(Self::layer(file_config, cli))
    }

    /// Apply file values over defaults, then CLI/env values over those
    pub fn layer(file: FileConfig, cli: &CliConfig) -> Self {
        let file_columns = file.columns.map(ColumnCatalog::new);
        let file_format = file.output.and_then(|o| o.format);

        let columns = cli
            .columns
            .clone()
            .or(file_columns)
            .unwrap_or_default();
        let output = cli.format.or(file_format).unwrap_or_default();
        let prompt = if cli.no_prompt {
            false
        } else {
            file.prompt.unwrap_or(true)
        };

        tracing::debug!(
            columns = columns.len(),
            output = %output,
            prompt,
            "Configuration resolved"
        );

        Self {
            columns,
            output,
            prompt,
        }
    }
}
