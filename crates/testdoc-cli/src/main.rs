//! testdoc - test management report exporter
//!
//! Renders stored test plans, test cases, checklists, test strategies and
//! test runs as downloadable documents.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! testdoc config init
//!
//! # See what is stored
//! testdoc list test_run --data-dir ./data
//!
//! # Export a run to a markdown file
//! testdoc export test_run 6f1c2a9e-3b7d-4c1e-9a8f-0d2e4b6c8a10 --output-dir reports
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
