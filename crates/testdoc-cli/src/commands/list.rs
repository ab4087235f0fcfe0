//! List command
//!
//! Show the entities available for export.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use testdoc_core::config::Config;
use testdoc_core::types::EntityKind;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Entity type (test_plan, test_case, checklist, test_strategy, test_run)
    pub entity_type: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Entity store directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let kind: EntityKind = args.entity_type.parse()?;
    let store = super::open_store(args.data_dir.as_deref(), config)?;
    let entities = store
        .list(kind)
        .with_context(|| format!("Failed to list {} entities", kind))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
        return Ok(());
    }

    if entities.is_empty() {
        eprintln!("No {} entities found.", kind);
        return Ok(());
    }

    for entity in &entities {
        println!("{}  {}", entity.id.to_string().cyan(), entity.name);
    }
    eprintln!("{} {} entities", entities.len().to_string().yellow(), kind);

    Ok(())
}
