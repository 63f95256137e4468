//! CSV reporter: one `file,level,message` row per finding

use anyhow::Result;
use std::borrow::Cow;
use std::fmt::Write;

use crate::summary::CorpusReport;

/// CSV format reporter
pub struct CsvReporter;

impl CsvReporter {
    /// Header row plus one row per finding; lines end in CRLF
    pub fn format(report: &CorpusReport) -> Result<String> {
        let mut output = String::new();
        write!(output, "file,level,message\r\n")?;
        for row in report.rows() {
            write!(
                output,
                "{},{},{}\r\n",
                escape(row.file),
                row.level,
                escape(row.message)
            )?;
        }
        Ok(output)
    }
}

/// Quote a field when it holds a delimiter, quote, or line break
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::fixtures::sample_report;
    use pretty_assertions::assert_eq;
    use qa_types::Finding;

    #[test]
    fn test_rows_in_path_order() {
        let output = CsvReporter::format(&sample_report()).unwrap();
        let lines: Vec<&str> = output.split("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "file,level,message",
                "guides/Q002.md,FAIL,Missing YAML key: sources",
                "guides/Q002.md,WARN,Unknown pack 'ABC:2020' (not in the allowed pack set)",
                "guides/Q003.md,WARN,Body Sources don't appear to reference metadata packs (manual check advised)",
                "",
            ]
        );
    }

    #[test]
    fn test_passing_corpus_has_only_header() {
        let report = CorpusReport::from_results(vec![("a.md".to_string(), vec![])], "");
        assert_eq!(CsvReporter::format(&report).unwrap(), "file,level,message\r\n");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let report = CorpusReport::from_results(
            vec![(
                "dir,with,commas/Q1.md".to_string(),
                vec![Finding::fail("Non-canonical IDs in primary_ids: [a, \"b\"]")],
            )],
            "",
        );
        let output = CsvReporter::format(&report).unwrap();
        assert!(output.contains(
            "\"dir,with,commas/Q1.md\",FAIL,\"Non-canonical IDs in primary_ids: [a, \"\"b\"\"]\""
        ));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape(""), "");
    }
}
