//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod export;
pub mod formats;
pub mod list;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use testdoc_core::config::Config;
use testdoc_storage::FileSystemStore;

/// Default configuration file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".testdoc/config.toml";

/// testdoc - export test plans, cases, checklists, strategies and runs
#[derive(Debug, Parser)]
#[command(name = "testdoc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TESTDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export an entity to a document
    Export(export::ExportArgs),

    /// List stored entities of a kind
    List(list::ListArgs),

    /// Show export formats and whether they are available
    Formats,

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Config commands read the file themselves
    match cli.command {
        Commands::Export(args) => export::execute(args, &load_config(&config_path)?),
        Commands::List(args) => list::execute(args, &load_config(&config_path)?),
        Commands::Formats => formats::execute(),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load(path).with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Open the entity store: `--data-dir`, then config, then the platform default
pub fn open_store(data_dir: Option<&Path>, config: &Config) -> Result<FileSystemStore> {
    let dir = data_dir
        .map(Path::to_path_buf)
        .or_else(|| config.storage.data_dir.clone())
        .unwrap_or_else(FileSystemStore::default_dir);

    tracing::debug!("Using data directory {:?}", dir);
    FileSystemStore::new(&dir)
        .with_context(|| format!("Failed to open data directory {}", dir.display()))
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_open_store_prefers_flag() {
        let flag_dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = Some(PathBuf::from("/definitely/not/here"));

        let store = open_store(Some(flag_dir.path()), &config).unwrap();
        assert_eq!(store.base_dir(), flag_dir.path());

        assert!(open_store(None, &config).is_err());
    }
}
