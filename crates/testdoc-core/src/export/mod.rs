//! Export of test management entities to documents
//!
//! This module turns stored aggregates (test plans, test cases, checklists,
//! test strategies and test runs) into downloadable documents.
//!
//! # Overview
//!
//! - [`ExportRequest`] validates raw boundary values into closed types
//! - [`ExportService`] fetches the aggregate, renders it and names the file
//! - [`RendererRegistry`] maps an [`ExportFormat`](crate::types::ExportFormat)
//!   to a [`DocumentRenderer`]; only markdown is registered by default
//! - [`ResultSummary`] computes per-status counts and pass rate for test runs
//!
//! # Example
//!
//! ```ignore
//! use testdoc_core::export::{ExportRequest, ExportService};
//!
//! let service = ExportService::new(store);
//! let request = ExportRequest::parse("test_run", &id, None, None, None)?;
//! let doc = service.export(&request)?;
//! println!("{} ({} bytes)", doc.filename, doc.content_length());
//! ```

mod filename;
mod markdown;
mod renderer;
mod request;
mod service;
mod stats;

pub use filename::{export_filename, sanitize_name};
pub use markdown::MarkdownRenderer;
pub use renderer::{DocumentRenderer, RendererRegistry};
pub use request::{ErrorBody, ExportDocument, ExportRequest, RenderOptions};
pub use service::ExportService;
pub use stats::ResultSummary;
