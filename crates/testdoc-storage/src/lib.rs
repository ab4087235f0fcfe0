//! testdoc-storage - Storage library for testdoc
//!
//! This crate provides a read-only JSON file store that serves aggregates to
//! the exporter.

mod entity_store;

pub use entity_store::{EntityInfo, FileSystemStore};
