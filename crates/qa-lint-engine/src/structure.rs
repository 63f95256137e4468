//! Ordered body-section checks

use crate::error::LintError;
use qa_types::Finding;
use regex::Regex;

/// Verifies that required section markers appear in the body, in order
#[derive(Debug, Clone)]
pub struct StructureChecker {
    markers: Vec<Regex>,
}

impl StructureChecker {
    /// Compile the ordered marker patterns
    pub fn new<I, S>(patterns: I) -> Result<Self, LintError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|e| LintError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { markers })
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(Regex::as_str)
    }

    /// One FAIL per missing or out-of-order marker
    ///
    /// Only the first match of each marker counts. A missing marker leaves the
    /// cursor where it was, so its successors are not reported a second time.
    pub fn check(&self, body: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut cursor = 0;

        for marker in &self.markers {
            match marker.find(body) {
                None => findings.push(Finding::fail(format!(
                    "Body missing section marker matching /{}/",
                    marker.as_str()
                ))),
                Some(m) => {
                    if m.start() < cursor {
                        findings.push(Finding::fail(format!(
                            "Section out of order around /{}/",
                            marker.as_str()
                        )));
                    }
                    cursor = m.end();
                }
            }
        }

        findings
    }
}
