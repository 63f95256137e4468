//! Severity aggregation across a corpus

use qa_types::{Finding, Severity};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Findings and overall status of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    pub path: String,
    pub status: Severity,
    pub findings: Vec<Finding>,
}

impl DocumentResult {
    pub fn new(path: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            path: path.into(),
            status: Severity::overall(&findings),
            findings,
        }
    }
}

/// One row of the flattened finding table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FindingRow<'a> {
    pub file: &'a str,
    pub level: Severity,
    pub message: &'a str,
}

/// Results of one lint run over the whole corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub generated_at: String,
    pub files_scanned: usize,
    pub fail_count: usize,
    pub warn_count: usize,
    /// Documents ordered by path
    pub documents: Vec<DocumentResult>,
}

impl CorpusReport {
    /// Aggregate `(path, findings)` pairs; input order does not matter
    pub fn from_results<I>(results: I, generated_at: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Finding>)>,
    {
        let mut documents: Vec<DocumentResult> = results
            .into_iter()
            .map(|(path, findings)| DocumentResult::new(path, findings))
            .collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        let count = |status: Severity| documents.iter().filter(|d| d.status == status).count();
        let fail_count = count(Severity::Fail);
        let warn_count = count(Severity::Warn);

        Self {
            generated_at: generated_at.into(),
            files_scanned: documents.len(),
            fail_count,
            warn_count,
            documents,
        }
    }

    /// Row-per-finding projection, in document path order
    pub fn rows(&self) -> Vec<FindingRow<'_>> {
        self.documents
            .iter()
            .flat_map(|doc| {
                doc.findings.iter().map(move |finding| FindingRow {
                    file: &doc.path,
                    level: finding.severity,
                    message: &finding.message,
                })
            })
            .collect()
    }

    /// Documents ordered worst status first, then by path
    pub fn ranked(&self) -> Vec<&DocumentResult> {
        let mut ranked: Vec<&DocumentResult> = self.documents.iter().collect();
        ranked.sort_by(|a, b| {
            (Reverse(a.status), &a.path).cmp(&(Reverse(b.status), &b.path))
        });
        ranked
    }

    /// A run succeeds unless some document FAILs; warnings alone are fine
    pub fn is_success(&self) -> bool {
        self.fail_count == 0
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
