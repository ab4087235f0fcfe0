//! Renderer trait and registry

use super::request::RenderOptions;
use crate::error::{Result, TestDocError};
use crate::model::{Aggregate, Checklist, TestCase, TestPlan, TestRun, TestStrategy};
use crate::types::ExportFormat;
use std::collections::HashMap;

/// Trait for document renderers, one implementation per output format
pub trait DocumentRenderer: Send + Sync {
    /// Format this renderer produces
    fn format(&self) -> ExportFormat;

    /// Extension used for generated filenames
    fn file_extension(&self) -> &str;

    /// MIME type of the rendered document
    fn content_type(&self) -> &str;

    fn render_test_plan(&self, plan: &TestPlan, options: &RenderOptions) -> Result<String>;

    fn render_test_case(&self, case: &TestCase, options: &RenderOptions) -> Result<String>;

    fn render_checklist(&self, checklist: &Checklist, options: &RenderOptions) -> Result<String>;

    fn render_test_strategy(
        &self,
        strategy: &TestStrategy,
        options: &RenderOptions,
    ) -> Result<String>;

    fn render_test_run(&self, run: &TestRun, options: &RenderOptions) -> Result<String>;

    /// Render any aggregate
    fn render(&self, aggregate: &Aggregate, options: &RenderOptions) -> Result<String> {
        match aggregate {
            Aggregate::TestPlan(plan) => self.render_test_plan(plan, options),
            Aggregate::TestCase(case) => self.render_test_case(case, options),
            Aggregate::Checklist(checklist) => self.render_checklist(checklist, options),
            Aggregate::TestStrategy(strategy) => self.render_test_strategy(strategy, options),
            Aggregate::TestRun(run) => self.render_test_run(run, options),
        }
    }
}

/// Registry mapping export formats to renderers
pub struct RendererRegistry {
    renderers: HashMap<ExportFormat, Box<dyn DocumentRenderer>>,
}

impl RendererRegistry {
    /// Create a registry with the default renderers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(super::markdown::MarkdownRenderer::new()));
        registry
    }

    /// Create a registry with no renderers
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer, replacing any existing one for the same format
    pub fn register(&mut self, renderer: Box<dyn DocumentRenderer>) {
        self.renderers.insert(renderer.format(), renderer);
    }

    /// Get the renderer for a format
    pub fn get(&self, format: ExportFormat) -> Result<&dyn DocumentRenderer> {
        self.renderers
            .get(&format)
            .map(|r| r.as_ref())
            .ok_or_else(|| TestDocError::UnsupportedFormat(format.to_string()))
    }

    /// Check if a format has a renderer
    pub fn has_format(&self, format: ExportFormat) -> bool {
        self.renderers.contains_key(&format)
    }

    /// Formats with a registered renderer
    pub fn available_formats(&self) -> Vec<ExportFormat> {
        let mut formats: Vec<_> = self.renderers.keys().copied().collect();
        formats.sort();
        formats
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}
