//! Markdown renderer for test management entities

use super::renderer::DocumentRenderer;
use super::request::RenderOptions;
use super::stats::ResultSummary;
use crate::error::Result;
use crate::model::{Checklist, TestCase, TestPlan, TestResult, TestRun, TestStrategy};
use crate::types::{EntityId, ExportFormat};
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Markdown renderer
///
/// History and comment flags are accepted but do not change the output.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the title line and identity fields shared by project artifacts
    fn render_header(&self, title: &str, id: &EntityId, project_id: &EntityId) -> String {
        let mut header = String::new();
        header.push_str(&format!("# {}\n\n", title));
        header.push_str(&format!("**ID:** {}\n", id));
        header.push_str(&format!("**Project ID:** {}\n", project_id));
        header
    }

    fn render_lifecycle(&self, created_at: &DateTime<Utc>, updated_at: &DateTime<Utc>) -> String {
        let mut output = String::new();
        output.push_str(&format!("**Created:** {}\n", timestamp(created_at)));
        output.push_str(&format!("**Last Updated:** {}\n\n", timestamp(updated_at)));
        output
    }

    /// Render a `##` section, or nothing when the body is empty
    fn render_section(&self, heading: &str, body: &str) -> String {
        if body.is_empty() {
            return String::new();
        }
        format!("## {}\n\n{}\n\n", heading, body)
    }

    /// A test case as nested inside a plan
    fn render_plan_case(&self, index: usize, case: &TestCase) -> String {
        let mut output = String::new();
        output.push_str(&format!("### {}. {}\n", index, case.title));
        output.push_str(&format!("**ID:** {}\n", case.id));

        if !case.description.is_empty() {
            output.push_str(&format!("**Description:** {}\n", case.description));
        }
        if !case.pre_steps.is_empty() {
            output.push_str(&format!("**Pre-Steps:**\n{}\n", case.pre_steps));
        }
        if !case.expected_result.is_empty() {
            output.push_str(&format!("**Expected Result:** {}\n", case.expected_result));
        }

        if !case.steps.is_empty() {
            output.push_str("**Test Steps:**\n");
            for (i, step) in case.steps.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, step.description));
                if !step.expected_result.is_empty() {
                    output.push_str(&format!("   *Expected:* {}\n", step.expected_result));
                }
            }
        }

        output.push('\n');
        output
    }

    /// A checklist as nested inside a plan
    fn render_plan_checklist(&self, index: usize, checklist: &Checklist) -> String {
        let mut output = String::new();
        output.push_str(&format!("### {}. {}\n", index, checklist.name));

        if !checklist.description.is_empty() {
            output.push_str(&format!("**Description:** {}\n", checklist.description));
        }

        if !checklist.items.is_empty() {
            output.push_str("**Checklist Items:**\n");
            for item in &checklist.items {
                output.push_str(&format!("- [ ] {}\n", item.description));
                if !item.expected_result.is_empty() {
                    output.push_str(&format!("  *Expected:* {}\n", item.expected_result));
                }
            }
        }

        output.push('\n');
        output
    }

    fn render_summary(&self, summary: &ResultSummary) -> String {
        let mut output = String::new();
        output.push_str("## Test Results Summary\n\n");
        output.push_str(&format!("- **Total:** {}\n", summary.total()));
        output.push_str(&format!("- **✅ Passed:** {}\n", summary.passed));
        output.push_str(&format!("- **❌ Failed:** {}\n", summary.failed));
        output.push_str(&format!("- **🚫 Blocked:** {}\n", summary.blocked));
        output.push_str(&format!("- **⏭️ Skipped:** {}\n", summary.skipped));

        if let Some(rate) = summary.formatted_pass_rate() {
            output.push_str(&format!("- **📊 Pass Rate:** {}%\n", rate));
        }

        output.push('\n');
        output
    }

    fn render_result(&self, index: usize, result: &TestResult) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "### {}. {} {}\n",
            index,
            result.status.icon(),
            result.subject.label()
        ));
        output.push_str(&format!("**Status:** {}\n", result.status));
        output.push_str(&format!("**Executed By:** {}\n", result.executed_by));
        output.push_str(&format!("**Executed At:** {}\n", timestamp(&result.executed_at)));

        if !result.comment.is_empty() {
            output.push_str(&format!("**Comments:** {}\n", result.comment));
        }

        output.push('\n');
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn file_extension(&self) -> &str {
        "md"
    }

    fn content_type(&self) -> &str {
        "text/markdown; charset=utf-8"
    }

    fn render_test_plan(&self, plan: &TestPlan, _options: &RenderOptions) -> Result<String> {
        let mut output = self.render_header(
            &format!("Test Plan: {}", plan.name),
            &plan.id,
            &plan.project_id,
        );
        output.push_str(&format!("**Status:** {}\n", plan.status));
        if let Some(deadline) = &plan.deadline {
            output.push_str(&format!("**Deadline:** {}\n", timestamp(deadline)));
        }
        output.push_str(&self.render_lifecycle(&plan.created_at, &plan.updated_at));

        output.push_str(&self.render_section("Description", &plan.description));

        if !plan.test_cases.is_empty() {
            output.push_str("## Test Cases\n\n");
            for (i, case) in plan.test_cases.iter().enumerate() {
                output.push_str(&self.render_plan_case(i + 1, case));
            }
        }

        if !plan.checklists.is_empty() {
            output.push_str("## Checklists\n\n");
            for (i, checklist) in plan.checklists.iter().enumerate() {
                output.push_str(&self.render_plan_checklist(i + 1, checklist));
            }
        }

        Ok(output)
    }

    fn render_test_case(&self, case: &TestCase, _options: &RenderOptions) -> Result<String> {
        let mut output = self.render_header(
            &format!("Test Case: {}", case.title),
            &case.id,
            &case.project_id,
        );
        output.push_str(&self.render_lifecycle(&case.created_at, &case.updated_at));

        output.push_str(&self.render_section("Description", &case.description));
        output.push_str(&self.render_section("Pre-Steps", &case.pre_steps));

        if !case.steps.is_empty() {
            output.push_str("## Test Steps\n\n");
            for (i, step) in case.steps.iter().enumerate() {
                output.push_str(&format!("### Step {}\n", i + 1));
                output.push_str(&format!("**Action:** {}\n", step.description));
                if !step.expected_result.is_empty() {
                    output.push_str(&format!("**Expected Result:** {}\n", step.expected_result));
                }
                output.push('\n');
            }
        }

        output.push_str(&self.render_section("Expected Result", &case.expected_result));

        if !case.attachments.is_empty() {
            output.push_str("## Attachments\n\n");
            for attachment in &case.attachments {
                output.push_str(&format!(
                    "- **{}** ({}, {} bytes)\n",
                    attachment.file_name, attachment.mime_type, attachment.file_size
                ));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn render_checklist(&self, checklist: &Checklist, _options: &RenderOptions) -> Result<String> {
        let mut output = self.render_header(
            &format!("Checklist: {}", checklist.name),
            &checklist.id,
            &checklist.project_id,
        );
        output.push_str(&self.render_lifecycle(&checklist.created_at, &checklist.updated_at));

        output.push_str(&self.render_section("Description", &checklist.description));

        if !checklist.items.is_empty() {
            output.push_str("## Checklist Items\n\n");
            for (i, item) in checklist.items.iter().enumerate() {
                output.push_str(&format!("{}. [ ] {}\n", i + 1, item.description));
                if !item.expected_result.is_empty() {
                    output.push_str(&format!("   *Expected:* {}\n", item.expected_result));
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn render_test_strategy(
        &self,
        strategy: &TestStrategy,
        _options: &RenderOptions,
    ) -> Result<String> {
        let mut output = self.render_header(
            &format!("Test Strategy: {}", strategy.name),
            &strategy.id,
            &strategy.project_id,
        );
        output.push_str(&self.render_lifecycle(&strategy.created_at, &strategy.updated_at));

        output.push_str(&self.render_section("Description", &strategy.description));
        output.push_str(&self.render_section("Strategy Content", &strategy.content));

        Ok(output)
    }

    fn render_test_run(&self, run: &TestRun, _options: &RenderOptions) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# Test Run: {}\n\n", run.name));
        output.push_str(&format!("**ID:** {}\n", run.id));
        output.push_str(&format!("**Test Plan ID:** {}\n", run.test_plan_id));
        output.push_str(&format!("**Started:** {}\n", timestamp(&run.started_at)));
        if let Some(completed_at) = &run.completed_at {
            output.push_str(&format!("**Completed:** {}\n", timestamp(completed_at)));
        }
        output.push('\n');

        if run.results.is_empty() {
            return Ok(output);
        }

        let summary = ResultSummary::from_results(&run.results);
        output.push_str(&self.render_summary(&summary));

        output.push_str("## Detailed Results\n\n");
        for (i, result) in run.results.iter().enumerate() {
            output.push_str(&self.render_result(i + 1, result));
        }

        Ok(output)
    }
}
