use crate::extractors::body::bracketed_tokens;
use crate::grammar::Grammar;
use crate::metadata::{FieldError, Metadata};
use qa_types::Finding;

/// Metadata flags and bracketed body tokens must come from the flag vocabulary
///
/// Bracketed body tokens are informal, so unknown ones only ever WARN.
pub fn check_flags(meta: &Metadata, body: &str, grammar: &Grammar) -> Vec<Finding> {
    let mut findings = Vec::new();

    match &meta.flags {
        Ok(flags) => findings.extend(
            flags
                .iter()
                .filter(|flag| !grammar.is_known_flag(flag))
                .map(|flag| Finding::warn(format!("Unknown flag in metadata: '{}'", flag))),
        ),
        Err(FieldError::Missing) => {}
        Err(err) => findings.push(Finding::fail(format!("flags {}", err))),
    }

    findings.extend(
        bracketed_tokens(body)
            .into_iter()
            .filter(|token| !grammar.is_known_flag(token))
            .map(|token| {
                Finding::warn(format!(
                    "Bracketed tag in body not in allowed flags: [{}]",
                    token
                ))
            }),
    );

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::metadata;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_known_flags_pass() {
        let meta = metadata(json!({"flags": ["LOCAL LAW CHECK"]}));
        let body = "Retention varies [LOCAL LAW CHECK] by country [MARKET PRACTICE—VALIDATE].";
        assert!(check_flags(&meta, body, &Grammar::default()).is_empty());
    }

    #[test]
    fn test_unknown_flags_warn() {
        let meta = metadata(json!({"flags": ["MAYBE"]}));
        let findings = check_flags(&meta, "See [TBD] and [].", &Grammar::default());
        assert_eq!(
            findings,
            vec![
                Finding::warn("Unknown flag in metadata: 'MAYBE'"),
                Finding::warn("Bracketed tag in body not in allowed flags: [TBD]"),
            ]
        );
    }

    #[test]
    fn test_flags_must_be_a_list() {
        let meta = metadata(json!({"flags": "LOCAL LAW CHECK"}));
        let findings = check_flags(&meta, "", &Grammar::default());
        assert_eq!(
            findings,
            vec![Finding::fail("flags must be a list (found string)")]
        );
    }
}
