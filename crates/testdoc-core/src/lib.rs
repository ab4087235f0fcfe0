//! testdoc-core - Core library for testdoc
//!
//! This crate provides the test management data model, the entity lookup
//! abstraction and the report export pipeline.

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod model;
pub mod types;

pub use error::{Result, TestDocError};
pub use fetch::EntityFetcher;
pub use types::*;
