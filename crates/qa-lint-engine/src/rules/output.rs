use crate::grammar::{format_list, Grammar};
use crate::metadata::Metadata;
use qa_types::Finding;

/// `output_mode` must name one of the allowed modes
pub fn check_output_mode(meta: &Metadata, grammar: &Grammar) -> Vec<Finding> {
    match &meta.output_mode {
        Ok(mode) if grammar.is_known_output_mode(mode) => Vec::new(),
        _ => vec![Finding::fail(format!(
            "output_mode must be one of {}",
            format_list(&grammar.vocabulary().output_modes)
        ))],
    }
}
