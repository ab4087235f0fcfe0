//! Test runs and their execution results

use crate::types::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An execution of a test plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub id: EntityId,
    pub test_plan_id: EntityId,
    pub name: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Results in stored order
    #[serde(default)]
    pub results: Vec<TestResult>,
}

impl TestRun {
    /// Start a new run with no results
    pub fn new(test_plan_id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            test_plan_id,
            name: name.into(),
            started_at: Utc::now(),
            completed_at: None,
            results: Vec::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Outcome of a single execution
///
/// Stored as a plain string; values outside the four known statuses are kept
/// verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultStatus {
    Pass,
    Fail,
    Blocked,
    Skipped,
    Unknown(String),
}

impl ResultStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ResultStatus::Pass => "pass",
            ResultStatus::Fail => "fail",
            ResultStatus::Blocked => "blocked",
            ResultStatus::Skipped => "skipped",
            ResultStatus::Unknown(raw) => raw,
        }
    }

    /// Icon shown next to the status in reports
    pub fn icon(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "✅",
            ResultStatus::Fail => "❌",
            ResultStatus::Blocked => "🚫",
            ResultStatus::Skipped => "⏭️",
            ResultStatus::Unknown(_) => "❓",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ResultStatus::Unknown(_))
    }
}

impl From<&str> for ResultStatus {
    fn from(s: &str) -> Self {
        match s {
            "pass" => ResultStatus::Pass,
            "fail" => ResultStatus::Fail,
            "blocked" => ResultStatus::Blocked,
            "skipped" => ResultStatus::Skipped,
            other => ResultStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ResultStatus {
    fn from(s: String) -> Self {
        ResultStatus::from(s.as_str())
    }
}

impl From<ResultStatus> for String {
    fn from(status: ResultStatus) -> Self {
        match status {
            ResultStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a result was recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultSubject {
    TestCase(EntityId),
    ChecklistItem(EntityId),
    None,
}

impl ResultSubject {
    /// Build from the stored pair of nullable references.
    ///
    /// A test case reference wins when both are present.
    pub fn from_refs(test_case_id: Option<EntityId>, checklist_item_id: Option<EntityId>) -> Self {
        match (test_case_id, checklist_item_id) {
            (Some(id), _) => ResultSubject::TestCase(id),
            (None, Some(id)) => ResultSubject::ChecklistItem(id),
            (None, None) => ResultSubject::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultSubject::TestCase(_) => "Test Case",
            ResultSubject::ChecklistItem(_) => "Checklist Item",
            ResultSubject::None => "Unknown Entity",
        }
    }

    pub fn test_case_id(&self) -> Option<EntityId> {
        match self {
            ResultSubject::TestCase(id) => Some(*id),
            _ => None,
        }
    }

    pub fn checklist_item_id(&self) -> Option<EntityId> {
        match self {
            ResultSubject::ChecklistItem(id) => Some(*id),
            _ => None,
        }
    }
}

/// A single recorded execution within a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TestResultRecord", into = "TestResultRecord")]
pub struct TestResult {
    pub id: EntityId,
    pub test_run_id: EntityId,
    pub subject: ResultSubject,
    pub status: ResultStatus,
    /// Free-text note; empty means none
    pub comment: String,
    pub executed_by: EntityId,
    pub executed_at: DateTime<Utc>,
}

impl TestResult {
    pub fn new(
        test_run_id: EntityId,
        subject: ResultSubject,
        status: impl Into<ResultStatus>,
        executed_by: EntityId,
    ) -> Self {
        Self {
            id: EntityId::new(),
            test_run_id,
            subject,
            status: status.into(),
            comment: String::new(),
            executed_by,
            executed_at: Utc::now(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Stored shape of a test result
#[derive(Clone, Serialize, Deserialize)]
struct TestResultRecord {
    id: EntityId,
    test_run_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    test_case_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checklist_item_id: Option<EntityId>,
    status: ResultStatus,
    #[serde(default)]
    comments: String,
    executed_by: EntityId,
    executed_at: DateTime<Utc>,
}

impl From<TestResultRecord> for TestResult {
    fn from(record: TestResultRecord) -> Self {
        Self {
            id: record.id,
            test_run_id: record.test_run_id,
            subject: ResultSubject::from_refs(record.test_case_id, record.checklist_item_id),
            status: record.status,
            comment: record.comments,
            executed_by: record.executed_by,
            executed_at: record.executed_at,
        }
    }
}

impl From<TestResult> for TestResultRecord {
    fn from(result: TestResult) -> Self {
        Self {
            id: result.id,
            test_run_id: result.test_run_id,
            test_case_id: result.subject.test_case_id(),
            checklist_item_id: result.subject.checklist_item_id(),
            status: result.status,
            comments: result.comment,
            executed_by: result.executed_by,
            executed_at: result.executed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(ResultStatus::from("pass"), ResultStatus::Pass);
        assert_eq!(ResultStatus::from("fail"), ResultStatus::Fail);
        assert_eq!(ResultStatus::from("blocked"), ResultStatus::Blocked);
        assert_eq!(ResultStatus::from("skipped"), ResultStatus::Skipped);
        assert_eq!(ResultStatus::from("PASS"), ResultStatus::Unknown("PASS".into()));
        assert_eq!(ResultStatus::from("n/a").as_str(), "n/a");
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(ResultStatus::Pass.icon(), "✅");
        assert_eq!(ResultStatus::Fail.icon(), "❌");
        assert_eq!(ResultStatus::Blocked.icon(), "🚫");
        assert_eq!(ResultStatus::Skipped.icon(), "⏭️");
        assert_eq!(ResultStatus::from("retest").icon(), "❓");
    }

    #[test]
    fn test_subject_precedence() {
        let case = EntityId::new();
        let item = EntityId::new();

        let both = ResultSubject::from_refs(Some(case), Some(item));
        assert_eq!(both, ResultSubject::TestCase(case));
        assert_eq!(both.label(), "Test Case");

        let only_item = ResultSubject::from_refs(None, Some(item));
        assert_eq!(only_item.label(), "Checklist Item");

        assert_eq!(ResultSubject::from_refs(None, None).label(), "Unknown Entity");
    }

    #[test]
    fn test_result_deserialize_both_refs() {
        let case = EntityId::new();
        let json = format!(
            r#"{{
                "id": "{}",
                "test_run_id": "{}",
                "test_case_id": "{}",
                "checklist_item_id": "{}",
                "status": "blocked",
                "comments": "env down",
                "executed_by": "{}",
                "executed_at": "2024-05-02T08:30:00Z"
            }}"#,
            EntityId::new(),
            EntityId::new(),
            case,
            EntityId::new(),
            EntityId::new()
        );
        let result: TestResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.subject, ResultSubject::TestCase(case));
        assert_eq!(result.status, ResultStatus::Blocked);
        assert_eq!(result.comment, "env down");
    }

    #[test]
    fn test_result_serialize_single_ref() {
        let item = EntityId::new();
        let result = TestResult::new(
            EntityId::new(),
            ResultSubject::ChecklistItem(item),
            "weird",
            EntityId::new(),
        );
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("test_case_id").is_none());
        assert_eq!(value["checklist_item_id"], item.to_string());
        assert_eq!(value["status"], "weird");

        let back: TestResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }
}
