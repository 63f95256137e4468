use crate::extractors::body::extract_body_sources;
use crate::grammar::Grammar;
use crate::metadata::Metadata;
use qa_types::Finding;
use std::collections::BTreeSet;

const SOURCE_SUBFIELDS: [&str; 3] = ["title", "id", "locator"];

/// Every metadata source needs a title, a canonical id and a locator
///
/// A canonical id from a pack outside the vocabulary only WARNs.
pub fn check_metadata_sources(meta: &Metadata, grammar: &Grammar) -> Vec<Finding> {
    let entries = match &meta.sources {
        Ok(entries) if !entries.is_empty() => entries,
        _ => return vec![Finding::fail("sources missing or empty")],
    };

    let mut findings = Vec::new();
    for (n, entry) in entries.iter().enumerate() {
        let n = n + 1;
        let source = match entry {
            Ok(source) => source,
            Err(err) => {
                findings.push(Finding::fail(format!("source #{} {}", n, err)));
                continue;
            }
        };

        for sub in SOURCE_SUBFIELDS {
            if source.get(sub).is_none() {
                findings.push(Finding::fail(format!("source #{} missing {}", n, sub)));
            }
        }

        if let Some(id) = source.id.as_deref() {
            match grammar.pack_of(id) {
                None => findings.push(Finding::fail(format!(
                    "source #{} id not canonical: {}",
                    n, id
                ))),
                Some(pack) if !grammar.is_known_pack(pack) => findings.push(Finding::warn(
                    format!("source #{} unknown pack/year: {}", n, id),
                )),
                Some(_) => {}
            }
        }
    }
    findings
}

/// The body must list its sources; those entries should mention at least one
/// pack cited by the metadata sources
///
/// The pack check is a substring heuristic over free-form citation text, so it
/// only ever WARNs.
pub fn check_body_sources(
    meta: &Metadata,
    body: &str,
    marker: &str,
    grammar: &Grammar,
) -> Vec<Finding> {
    let entries = extract_body_sources(body, marker);
    if entries.is_empty() {
        return vec![Finding::fail("Body lacks Sources entries")];
    }

    let pack_names: BTreeSet<&str> = meta
        .sources
        .iter()
        .flatten()
        .flatten()
        .filter_map(|source| source.id.as_deref())
        .filter_map(|id| grammar.pack_of(id))
        .filter_map(|pack| pack.split(':').next())
        .collect();
    if pack_names.is_empty() {
        return Vec::new();
    }

    let joined = entries.join(" | ");
    if pack_names.iter().any(|name| joined.contains(name)) {
        Vec::new()
    } else {
        vec![Finding::warn(
            "Body Sources don't appear to reference metadata packs (manual check advised)",
        )]
    }
}
