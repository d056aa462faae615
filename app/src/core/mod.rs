//! Application infrastructure: CLI, configuration, constants

pub mod cli;
pub mod config;
pub mod constants;

pub use cli::{CliConfig, Commands};
pub use config::{AppConfig, OutputFormat};
