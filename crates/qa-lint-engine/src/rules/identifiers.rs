use crate::grammar::{format_list, Grammar};
use crate::metadata::{Field, FieldError, Metadata};
use qa_types::Finding;
use std::collections::BTreeSet;

/// Canonical syntax and pack vocabulary for `primary_ids` and `overlap_ids`
///
/// Violations are batched: one FAIL listing every non-canonical id and one
/// WARN listing every id whose `PACK:YEAR` is unknown.
pub fn check_identifier_fields(
    meta: &Metadata,
    grammar: &Grammar,
    allow_empty_primary: &BTreeSet<String>,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (field, value) in [
        ("primary_ids", &meta.primary_ids),
        ("overlap_ids", &meta.overlap_ids),
    ] {
        findings.extend(check_id_list(field, value, grammar));
    }

    let primary_empty = match &meta.primary_ids {
        Ok(ids) => ids.is_empty(),
        Err(FieldError::Missing) => true,
        Err(FieldError::WrongType { .. }) => false,
    };
    let exempt = meta
        .id
        .as_deref()
        .map(|id| allow_empty_primary.contains(id))
        .unwrap_or(false);
    if primary_empty && !exempt {
        findings.push(Finding::fail("primary_ids is empty"));
    }

    findings
}

fn check_id_list(field: &str, value: &Field<Vec<String>>, grammar: &Grammar) -> Vec<Finding> {
    let ids: &[String] = match value {
        Ok(ids) => ids,
        Err(FieldError::Missing) => &[],
        Err(err) => return vec![Finding::fail(format!("{} {}", field, err))],
    };

    let mut findings = Vec::new();

    let non_canonical: Vec<&str> = ids
        .iter()
        .map(String::as_str)
        .filter(|id| !grammar.is_canonical_id(id))
        .collect();
    if !non_canonical.is_empty() {
        findings.push(Finding::fail(format!(
            "Non-canonical IDs in {}: {}",
            field,
            format_list(non_canonical)
        )));
    }

    let unknown_pack: Vec<&str> = ids
        .iter()
        .map(String::as_str)
        .filter(|id| {
            grammar
                .pack_of(id)
                .map(|pack| !grammar.is_known_pack(pack))
                .unwrap_or(false)
        })
        .collect();
    if !unknown_pack.is_empty() {
        findings.push(Finding::warn(format!(
            "Unknown pack/year in {}: {}",
            field,
            format_list(unknown_pack)
        )));
    }

    findings
}
