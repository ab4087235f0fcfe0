//! Export request parsing and response shapes

use crate::error::{Result, TestDocError};
use crate::types::{EntityId, EntityKind, ExportFormat};
use serde::{Deserialize, Serialize};

/// Optional content switches passed to every renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub include_history: bool,
    pub include_comments: bool,
}

/// A validated export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub entity_type: EntityKind,
    pub entity_id: EntityId,
    pub format: ExportFormat,
    pub options: RenderOptions,
}

impl ExportRequest {
    /// Create a markdown request with default options
    pub fn new(entity_type: EntityKind, entity_id: EntityId) -> Self {
        Self {
            entity_type,
            entity_id,
            format: ExportFormat::default(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate raw request parameters.
    ///
    /// The identifier is checked before the entity type. A missing format means
    /// markdown; a flag is set only by the literal string `"true"`.
    pub fn parse(
        entity_type: &str,
        entity_id: &str,
        format: Option<&str>,
        include_history: Option<&str>,
        include_comments: Option<&str>,
    ) -> Result<Self> {
        let entity_id = EntityId::parse(entity_id)?;
        let entity_type: EntityKind = entity_type.parse()?;
        let format = match format {
            Some(raw) => raw.parse()?,
            None => ExportFormat::default(),
        };

        Ok(Self {
            entity_type,
            entity_id,
            format,
            options: RenderOptions {
                include_history: parse_flag(include_history),
                include_comments: parse_flag(include_comments),
            },
        })
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// A rendered export ready to hand to a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub content: String,
    pub filename: String,
    pub content_type: String,
}

impl ExportDocument {
    /// Value for a `Content-Disposition` header
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }

    /// Body length in bytes
    pub fn content_length(&self) -> usize {
        self.content.len()
    }
}

/// Structured error body for a routing layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&TestDocError> for ErrorBody {
    fn from(err: &TestDocError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "6f1c2a9e-3b7d-4c1e-9a8f-0d2e4b6c8a10";

    #[test]
    fn test_parse_defaults() {
        let req = ExportRequest::parse("test_plan", ID, None, None, None).unwrap();
        assert_eq!(req.entity_type, EntityKind::TestPlan);
        assert_eq!(req.entity_id.to_string(), ID);
        assert_eq!(req.format, ExportFormat::Markdown);
        assert_eq!(req.options, RenderOptions::default());
    }

    #[test]
    fn test_parse_flags() {
        let req =
            ExportRequest::parse("test_run", ID, Some("markdown"), Some("true"), Some("TRUE"))
                .unwrap();
        assert!(req.options.include_history);
        assert!(!req.options.include_comments);

        let req = ExportRequest::parse("test_run", ID, None, Some("1"), Some("yes")).unwrap();
        assert!(!req.options.include_history);
        assert!(!req.options.include_comments);
    }

    #[test]
    fn test_parse_bogus_type() {
        let err = ExportRequest::parse("bogus", ID, None, None, None).unwrap_err();
        assert!(matches!(err, TestDocError::UnsupportedEntityType(t) if t == "bogus"));
    }

    #[test]
    fn test_parse_identifier_checked_first() {
        let err = ExportRequest::parse("bogus", "nope", None, None, None).unwrap_err();
        assert!(matches!(err, TestDocError::InvalidIdentifier(_)));
    }

    #[test]
    fn test_parse_formats() {
        let req = ExportRequest::parse("checklist", ID, Some("pdf"), None, None).unwrap();
        assert_eq!(req.format, ExportFormat::Pdf);

        let err = ExportRequest::parse("checklist", ID, Some("docx"), None, None).unwrap_err();
        assert!(matches!(err, TestDocError::UnsupportedFormat(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_document_headers() {
        let doc = ExportDocument {
            content: "# Täst\n".to_string(),
            filename: "test_case_Login_20240301_090000.md".to_string(),
            content_type: "text/markdown; charset=utf-8".to_string(),
        };
        assert_eq!(
            doc.content_disposition(),
            "attachment; filename=test_case_Login_20240301_090000.md"
        );
        // Byte length, not char count
        assert_eq!(doc.content_length(), 8);
    }

    #[test]
    fn test_error_body() {
        let err = TestDocError::UnsupportedEntityType("bogus".into());
        let body = ErrorBody::from(&err);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Unsupported entity type: bogus"}"#);
    }
}
