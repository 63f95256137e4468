use crate::grammar::Grammar;
use crate::metadata::Metadata;
use qa_types::Finding;

/// `packs` must be a non-empty list; unknown packs are advisory
pub fn check_packs(meta: &Metadata, grammar: &Grammar) -> Vec<Finding> {
    match &meta.packs {
        Ok(packs) if !packs.is_empty() => packs
            .iter()
            .filter(|pack| !grammar.is_known_pack(pack))
            .map(|pack| {
                Finding::warn(format!(
                    "Unknown pack '{}' (not in the allowed pack set)",
                    pack
                ))
            })
            .collect(),
        _ => vec![Finding::fail("packs must be a non-empty list")],
    }
}
