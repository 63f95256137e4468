//! Markdown reporter: findings grouped per document, worst first

use anyhow::Result;
use qa_types::Severity;
use std::fmt::Write;

use crate::summary::CorpusReport;

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn format(report: &CorpusReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# QA Validation Report")?;
        writeln!(output)?;
        writeln!(output, "_Generated: {}_", report.generated_at)?;
        writeln!(output)?;
        writeln!(output, "**Files scanned:** {}", report.files_scanned)?;
        writeln!(output)?;
        writeln!(output, "**Files with FAIL issues:** {}", report.fail_count)?;
        writeln!(output)?;

        for doc in report.ranked() {
            writeln!(output, "## {} — {}", badge(doc.status), doc.path)?;
            if doc.findings.is_empty() {
                writeln!(output, "- No issues.")?;
            }
            for finding in &doc.findings {
                writeln!(
                    output,
                    "- {} **{}**: {}",
                    emoji(finding.severity),
                    finding.severity,
                    finding.message
                )?;
            }
            writeln!(output)?;
        }

        Ok(output)
    }
}

fn emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::Pass => "✅",
        Severity::Warn => "⚠️",
        Severity::Fail => "❌",
    }
}

fn badge(severity: Severity) -> String {
    format!("{} {}", emoji(severity), severity)
}
