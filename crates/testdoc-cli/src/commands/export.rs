//! Export command
//!
//! Export a stored entity to a document.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use testdoc_core::config::Config;
use testdoc_core::export::{ExportDocument, ExportRequest, ExportService};

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Entity type (test_plan, test_case, checklist, test_strategy, test_run)
    pub entity_type: String,

    /// Entity ID (UUID)
    pub entity_id: String,

    /// Export format (defaults to the configured format)
    #[arg(long, short)]
    pub format: Option<String>,

    /// Include change history
    #[arg(long)]
    pub include_history: bool,

    /// Include comments
    #[arg(long)]
    pub include_comments: bool,

    /// Output file path
    #[arg(long, short, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write into this directory using the generated filename
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Entity store directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Validate arguments into a request, filling gaps from config
    pub fn to_request(&self, config: &Config) -> Result<ExportRequest> {
        let defaults = config.export.render_options();
        let flag = |set: bool, default: bool| (set || default).then_some("true");

        let format = self
            .format
            .as_deref()
            .unwrap_or(config.export.default_format.as_str());

        let request = ExportRequest::parse(
            &self.entity_type,
            &self.entity_id,
            Some(format),
            flag(self.include_history, defaults.include_history),
            flag(self.include_comments, defaults.include_comments),
        )?;
        Ok(request)
    }

    /// Where to write the document, if not stdout
    fn destination(&self, config: &Config, doc: &ExportDocument) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            return Some(path.clone());
        }
        self.output_dir
            .as_ref()
            .or(config.export.output_dir.as_ref())
            .map(|dir| dir.join(&doc.filename))
    }
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let request = args.to_request(config)?;
    let store = super::open_store(args.data_dir.as_deref(), config)?;
    let service = ExportService::new(store);

    let doc = service.export(&request).with_context(|| {
        format!("Failed to export {} {}", request.entity_type, request.entity_id)
    })?;

    if let Some(path) = args.destination(config, &doc) {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(&path, &doc.content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        eprintln!(
            "{} Exported {} {} to {} ({} bytes)",
            "✓".green(),
            request.entity_type,
            request.entity_id.to_string().cyan(),
            path.display(),
            doc.content_length()
        );
    } else {
        std::io::stdout()
            .write_all(doc.content.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
