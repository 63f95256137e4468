//! Corpus-level driver for the QA linter
//!
//! Finds candidate documents under a root directory and lints them
//! concurrently; the binary in `main.rs` adds argument parsing and reporting.

pub mod discover;
pub mod runner;

pub use discover::discover_documents;
pub use runner::{document_label, lint_corpus};
