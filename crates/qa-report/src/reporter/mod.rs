//! Corpus report rendering
//!
//! # Output Formats
//!
//! - **CSV**: one row per finding, for spreadsheets and tooling
//! - **Markdown**: findings grouped per document, worst first
//! - **JSON**: machine-readable export of the whole report
//! - **Console**: short run summary for the terminal

mod console;
mod csv;
mod json;
mod markdown;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::summary::CorpusReport;

pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

/// Output format for a corpus report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `file,level,message` rows
    Csv,
    /// Grouped Markdown report
    Markdown,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Terminal summary
    #[default]
    Console,
}

/// Renders a [`CorpusReport`] in one format
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &CorpusReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write the rendered report to a file, replacing any previous one
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &CorpusReport, path: P) -> Result<()> {
        let path = path.as_ref();
        let output = self.format_report(report)?;
        fs::write(path, output)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::debug!(path = %path.display(), format = ?self.format, "Report written");
        Ok(())
    }

    /// Render the report as a string
    pub fn format_report(&self, report: &CorpusReport) -> Result<String> {
        match self.format {
            OutputFormat::Csv => CsvReporter::format(report),
            OutputFormat::Markdown => MarkdownReporter::format(report),
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
