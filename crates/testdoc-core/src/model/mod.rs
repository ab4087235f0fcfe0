//! Test management data model
//!
//! These are the read-only shapes the exporter renders. Lifecycle of every
//! entity is owned by the storage backend; nothing here mutates stored data.

mod aggregate;
mod plan;
mod run;

pub use aggregate::Aggregate;
pub use plan::{Attachment, Checklist, ChecklistItem, TestCase, TestPlan, TestStep, TestStrategy};
pub use run::{ResultStatus, ResultSubject, TestResult, TestRun};
