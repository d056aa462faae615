use clap::{Parser, Subcommand};

use std::path::PathBuf;

use gridfilter::ColumnCatalog;

use super::config::OutputFormat;
use super::constants::{ENV_COLUMNS, ENV_CONFIG, ENV_FORMAT};

#[derive(Parser)]
#[command(name = "gridfilter")]
#[command(version, about = "Interactive table filter panel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Selectable columns as `id[:label]`, comma-separated
    #[arg(long, global = true, env = ENV_COLUMNS)]
    pub columns: Option<String>,

    /// How committed filters are printed (json or text)
    #[arg(long, short = 'f', global = true, env = ENV_FORMAT, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Do not print a prompt before each command
    #[arg(long, global = true)]
    pub no_prompt: bool,
}

/// Parse output format from CLI/env string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        _ => Err(format!(
            "Invalid output format '{}'. Valid options: json, text",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Run an interactive filter session on stdin (default command)
    Run,
    /// List the supported filter operators
    Operators,
    /// List the configured columns
    Columns,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub columns: Option<ColumnCatalog>,
    pub format: Option<OutputFormat>,
    pub no_prompt: bool,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        config: cli.config,
        columns: cli.columns.as_deref().map(ColumnCatalog::parse_list),
        format: cli.format,
        no_prompt: cli.no_prompt,
    };
    (config, cli.command)
}
