//! Corpus-level aggregation and reporting for QA lint results
//!
//! A [`CorpusReport`] reduces per-document findings to an overall status per
//! document and a corpus-wide FAIL count. [`Reporter`] renders the same report
//! as a CSV row-per-finding table, a grouped Markdown report, JSON, or a short
//! console summary.
//!
//! # Example
//!
//! ```no_run
//! use qa_report::{CorpusReport, OutputFormat, Reporter};
//! use qa_types::Finding;
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = CorpusReport::from_results(
//!     vec![("Q001.md".to_string(), vec![Finding::warn("Unknown pack 'X:2000'")])],
//!     "2024-01-01T00:00:00Z",
//! );
//!
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! Reporter::new(OutputFormat::Csv).write_to_file(&report, "qa_validation_report.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod reporter;
pub mod summary;

pub use reporter::{OutputFormat, Reporter};
pub use summary::{CorpusReport, DocumentResult, FindingRow};
