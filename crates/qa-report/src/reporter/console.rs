//! Console reporter: short run summary with status indicators

use anyhow::Result;
use std::fmt::Write;

use crate::summary::CorpusReport;
use qa_types::Severity;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format(report: &CorpusReport) -> Result<String> {
        let mut output = String::new();
        let pass_count = report
            .documents
            .iter()
            .filter(|d| d.status == Severity::Pass)
            .count();

        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                    QA VALIDATION RESULTS                     ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;
        writeln!(output, "Generated:  {}", report.generated_at)?;
        writeln!(output, "Scanned:    {} files", report.files_scanned)?;
        writeln!(
            output,
            "Statuses:   {} pass, {} warn, {} fail",
            pass_count, report.warn_count, report.fail_count
        )?;

        let failing: Vec<_> = report
            .documents
            .iter()
            .filter(|d| d.status == Severity::Fail)
            .collect();
        if !failing.is_empty() {
            writeln!(output)?;
            writeln!(output, "Failing files:")?;
            for doc in failing {
                writeln!(output, "  • {}", doc.path)?;
                for finding in doc.findings.iter().filter(|f| f.severity == Severity::Fail) {
                    writeln!(output, "      {}", finding)?;
                }
            }
        }

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let (symbol, status) = if report.is_success() {
            ("✓", "PASSED")
        } else {
            ("✗", "FAILED")
        };
        writeln!(output, "Overall Status: {} {}", symbol, status)?;
        writeln!(output)?;
        Ok(output)
    }
}
