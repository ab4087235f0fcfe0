//! Export entry point

use super::filename::export_filename;
use super::renderer::RendererRegistry;
use super::request::{ExportDocument, ExportRequest};
use crate::error::Result;
use crate::fetch::EntityFetcher;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Fetches an entity, renders it and names the result
///
/// Holds no mutable state, so one service can serve concurrent exports.
pub struct ExportService {
    fetcher: Arc<dyn EntityFetcher>,
    registry: RendererRegistry,
}

impl ExportService {
    /// Create a service with the default renderers
    pub fn new(fetcher: impl EntityFetcher + 'static) -> Self {
        Self::with_fetcher(Arc::new(fetcher))
    }

    /// Create a service over a shared fetcher
    pub fn with_fetcher(fetcher: Arc<dyn EntityFetcher>) -> Self {
        Self {
            fetcher,
            registry: RendererRegistry::new(),
        }
    }

    /// Replace the renderer registry
    pub fn with_registry(mut self, registry: RendererRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Export using the current time for the filename
    pub fn export(&self, request: &ExportRequest) -> Result<ExportDocument> {
        self.export_at(request, Utc::now())
    }

    /// Export with an explicit filename timestamp
    pub fn export_at(
        &self,
        request: &ExportRequest,
        now: DateTime<Utc>,
    ) -> Result<ExportDocument> {
        debug!(
            "Fetching {} {} for {} export",
            request.entity_type, request.entity_id, request.format
        );
        let aggregate = self.fetcher.fetch(request.entity_type, &request.entity_id)?;
        let renderer = self.registry.get(request.format)?;

        let content = renderer.render(&aggregate, &request.options)?;
        let filename = export_filename(
            aggregate.kind(),
            aggregate.display_name(),
            &now,
            renderer.file_extension(),
        );

        info!(
            "Exported {} {} as {} ({} bytes)",
            request.entity_type,
            request.entity_id,
            filename,
            content.len()
        );

        Ok(ExportDocument {
            content,
            filename,
            content_type: renderer.content_type().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TestDocError;
    use crate::export::RenderOptions;
    use crate::fetch::memory::MemoryStore;
    use crate::model::{ResultSubject, TestCase, TestPlan, TestResult, TestRun};
    use crate::types::{EntityId, EntityKind, ExportFormat};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 15, 30).unwrap()
    }

    fn create_service() -> (ExportService, EntityId, EntityId) {
        let store = MemoryStore::new();
        let project = EntityId::new();

        let mut plan = TestPlan::new(project, "Release 2.0");
        plan.test_cases.push(TestCase::new(project, "Login"));
        let plan_id = store.insert(plan);

        let mut run = TestRun::new(plan_id, "Nightly run");
        for status in ["pass", "pass", "fail", "blocked", "skipped"] {
            run.results.push(TestResult::new(
                run.id,
                ResultSubject::None,
                status,
                EntityId::new(),
            ));
        }
        let run_id = store.insert(run);

        (ExportService::new(store), plan_id, run_id)
    }

    #[test]
    fn test_export_test_plan() {
        let (service, plan_id, _) = create_service();
        let request = ExportRequest::new(EntityKind::TestPlan, plan_id);

        let doc = service.export_at(&request, fixed_now()).unwrap();
        assert!(doc.content.starts_with("# Test Plan: Release 2.0\n"));
        assert!(doc.content.contains("### 1. Login\n"));
        assert_eq!(doc.filename, "test_plan_Release_2.0_20240601_081530.md");
        assert_eq!(doc.content_type, "text/markdown; charset=utf-8");
    }

    #[test]
    fn test_export_test_run() {
        let (service, _, run_id) = create_service();
        let request = ExportRequest::new(EntityKind::TestRun, run_id);

        let doc = service.export_at(&request, fixed_now()).unwrap();
        assert!(doc.content.contains("- **📊 Pass Rate:** 40.0%"));
        assert_eq!(doc.filename, "test_run_Nightly_run_20240601_081530.md");
    }

    #[test]
    fn test_export_not_found() {
        let (service, _, _) = create_service();
        let request = ExportRequest::new(EntityKind::Checklist, EntityId::new());

        let err = service.export(&request).unwrap_err();
        assert!(matches!(
            err,
            TestDocError::NotFound { kind: EntityKind::Checklist, .. }
        ));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_export_kind_mismatch_is_not_found() {
        let (service, plan_id, _) = create_service();
        let request = ExportRequest::new(EntityKind::TestRun, plan_id);
        assert!(matches!(
            service.export(&request),
            Err(TestDocError::NotFound { .. })
        ));
    }

    #[test]
    fn test_export_unregistered_format() {
        let (service, plan_id, _) = create_service();
        let request =
            ExportRequest::new(EntityKind::TestPlan, plan_id).with_format(ExportFormat::Html);

        let err = service.export(&request).unwrap_err();
        assert!(matches!(err, TestDocError::UnsupportedFormat(f) if f == "html"));
    }

    #[test]
    fn test_missing_entity_reported_before_format() {
        let (service, _, _) = create_service();
        let request = ExportRequest::new(EntityKind::TestPlan, EntityId::new())
            .with_format(ExportFormat::Pdf);

        let err = service.export(&request).unwrap_err();
        assert!(matches!(
            err,
            TestDocError::NotFound { kind: EntityKind::TestPlan, .. }
        ));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_export_is_deterministic() {
        let (service, _, run_id) = create_service();
        let request = ExportRequest::new(EntityKind::TestRun, run_id).with_options(RenderOptions {
            include_history: true,
            include_comments: true,
        });

        let first = service.export_at(&request, fixed_now()).unwrap();
        let second = service.export_at(&request, fixed_now()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let (service, plan_id, _) = create_service();
        let service = Arc::new(service);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    let request = ExportRequest::new(EntityKind::TestPlan, plan_id);
                    service.export_at(&request, fixed_now()).unwrap().content
                })
            })
            .collect();

        let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }
}
