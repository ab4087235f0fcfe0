//! Formats command
//!
//! Show which export formats can be rendered.

use anyhow::Result;
use testdoc_core::export::RendererRegistry;
use testdoc_core::types::ExportFormat;

/// Execute the formats command
pub fn execute() -> Result<()> {
    use colored::Colorize;

    let registry = RendererRegistry::new();
    for format in ExportFormat::ALL {
        match registry.get(format) {
            Ok(renderer) => println!(
                "{} {:<10} .{}  {}",
                "✓".green(),
                format.as_str(),
                renderer.file_extension(),
                renderer.content_type().dimmed()
            ),
            Err(_) => println!(
                "{} {:<10} {}",
                "✗".red(),
                format.as_str(),
                "not available".dimmed()
            ),
        }
    }

    Ok(())
}
