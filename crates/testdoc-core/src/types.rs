//! Core type definitions for testdoc

use crate::error::{Result, TestDocError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for any stored entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random EntityId
    pub fn new() -> Self {
        EntityId(Uuid::new_v4())
    }

    /// Parse from a UUID string
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(EntityId)
            .map_err(|_| TestDocError::InvalidIdentifier(s.to_string()))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        EntityId(id)
    }
}

/// The exportable entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    TestPlan,
    TestCase,
    Checklist,
    TestStrategy,
    TestRun,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::TestPlan,
        EntityKind::TestCase,
        EntityKind::Checklist,
        EntityKind::TestStrategy,
        EntityKind::TestRun,
    ];

    /// Wire name, also used as the filename prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::TestPlan => "test_plan",
            EntityKind::TestCase => "test_case",
            EntityKind::Checklist => "checklist",
            EntityKind::TestStrategy => "test_strategy",
            EntityKind::TestRun => "test_run",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::TestPlan => "Test plan",
            EntityKind::TestCase => "Test case",
            EntityKind::Checklist => "Checklist",
            EntityKind::TestStrategy => "Test strategy",
            EntityKind::TestRun => "Test run",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = TestDocError;

    fn from_str(s: &str) -> Result<Self> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TestDocError::UnsupportedEntityType(s.to_string()))
    }
}

/// Recognized export formats
///
/// Only markdown has a renderer out of the box; the others are accepted at the
/// boundary and rejected by the registry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Html,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Markdown,
        ExportFormat::Html,
        ExportFormat::Pdf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = TestDocError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| TestDocError::UnsupportedFormat(s.to_string()))
    }
}
