use crate::grammar::{format_list, Grammar};
use crate::metadata::Metadata;
use qa_types::Finding;

/// Capability tags are the UI-facing contract: unknown tags FAIL, an unusual
/// count only WARNs
pub fn check_capability_tags(
    meta: &Metadata,
    grammar: &Grammar,
    min: usize,
    max: usize,
) -> Vec<Finding> {
    let tags = match &meta.capability_tags {
        Ok(tags) if !tags.is_empty() => tags,
        _ => return vec![Finding::fail("capability_tags must be a non-empty list")],
    };

    let mut findings = Vec::new();

    let unknown: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|tag| !grammar.is_known_capability_tag(tag))
        .collect();
    if !unknown.is_empty() {
        findings.push(Finding::fail(format!(
            "Unknown capability_tags: {}",
            format_list(unknown)
        )));
    }

    if tags.len() < min || tags.len() > max {
        findings.push(Finding::warn(format!(
            "capability_tags should be {}–{} (found {})",
            min,
            max,
            tags.len()
        )));
    }

    findings
}
