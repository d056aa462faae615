//! Application entry: logging, configuration, and command dispatch

use anyhow::Result;
use tokio::io::BufReader;

use crate::core::cli::{self, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::session::{self, column_lines, operator_lines};

pub struct FilterApp;

impl FilterApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let config = AppConfig::load(&cli_config)?;

        match command.unwrap_or(Commands::Run) {
            Commands::Run => Self::run_session(&config).await,
            Commands::Operators => {
                Self::print_lines(&operator_lines());
                Ok(())
            }
            Commands::Columns => {
                Self::print_lines(&column_lines(&config.columns));
                Ok(())
            }
        }
    }

    async fn run_session(config: &AppConfig) -> Result<()> {
        let input = BufReader::new(tokio::io::stdin());
        let mut output = tokio::io::stdout();

        let outcome = session::run_session(config, input, &mut output).await?;
        tracing::debug!(
            active = outcome.active.len(),
            closed = outcome.closed,
            "Session finished"
        );
        Ok(())
    }

    fn print_lines(lines: &[String]) {
        for line in lines {
            println!("{}", line);
        }
    }

    fn init_logging() {
        let filter = [ENV_LOG, "RUST_LOG"]
            .into_iter()
            .find_map(|key| std::env::var(key).ok())
            .unwrap_or_else(|| format!("warn,{}=info", APP_NAME_LOWER));

        // stdout carries session output
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}
