//! Generated filenames for exported documents

use crate::types::EntityKind;
use chrono::{DateTime, Utc};

const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build `{kind}_{name}_{YYYYMMDD_HHMMSS}.{ext}`
pub fn export_filename(
    kind: EntityKind,
    display_name: &str,
    generated_at: &DateTime<Utc>,
    extension: &str,
) -> String {
    format!(
        "{}_{}_{}.{}",
        kind,
        sanitize_name(display_name),
        generated_at.format(FILENAME_TIMESTAMP_FORMAT),
        extension
    )
}

/// Make an entity name safe for use in a path and an unquoted header value
pub fn sanitize_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if is_unsafe(c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_unsafe(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ';' | ',')
        || c.is_control()
        || c.is_whitespace()
}
