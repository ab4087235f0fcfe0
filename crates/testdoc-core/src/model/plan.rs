//! Test plans and the artifacts they own

use crate::types::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A test plan with its test cases and checklists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestPlan {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default = "default_plan_status")]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Cases in stored order
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    /// Checklists in stored order
    #[serde(default)]
    pub checklists: Vec<Checklist>,
}

fn default_plan_status() -> String {
    "draft".to_string()
}

impl TestPlan {
    /// Create an empty draft plan
    pub fn new(project_id: EntityId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            project_id,
            name: name.into(),
            description: String::new(),
            deadline: None,
            status: default_plan_status(),
            created_at: now,
            updated_at: now,
            test_cases: Vec::new(),
            checklists: Vec::new(),
        }
    }
}

/// A single test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: EntityId,
    pub project_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pre_steps: String,
    #[serde(default)]
    pub steps: Vec<TestStep>,
    #[serde(default)]
    pub expected_result: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl TestCase {
    /// Create a test case with no steps or attachments
    pub fn new(project_id: EntityId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            project_id,
            title: title.into(),
            description: String::new(),
            pre_steps: String::new(),
            steps: Vec::new(),
            expected_result: String::new(),
            created_at: now,
            updated_at: now,
            attachments: Vec::new(),
        }
    }
}

/// One action in a test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    pub description: String,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub order: i32,
}

impl TestStep {
    pub fn new(description: impl Into<String>, expected_result: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            expected_result: expected_result.into(),
            order: 0,
        }
    }
}

/// File attached to a test case. Only metadata is exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub file_size: u64,
}

/// A checklist of items to verify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Checklist {
    pub fn new(project_id: EntityId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            project_id,
            name: name.into(),
            description: String::new(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One entry of a checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: EntityId,
    pub description: String,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub order: i32,
}

impl ChecklistItem {
    pub fn new(description: impl Into<String>, expected_result: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            description: description.into(),
            expected_result: expected_result.into(),
            order: 0,
        }
    }
}

/// A free-form test strategy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestStrategy {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestStrategy {
    pub fn new(project_id: EntityId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            project_id,
            name: name.into(),
            description: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
