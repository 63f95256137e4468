//! JSON reporter for corpus reports

use crate::summary::CorpusReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Serialize the whole report, optionally pretty-printed
    pub fn format(report: &CorpusReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}
