use crate::metadata::Metadata;
use qa_types::Finding;

/// One FAIL per required key absent from the metadata block
pub fn check_required_keys(meta: &Metadata, required: &[String]) -> Vec<Finding> {
    required
        .iter()
        .filter(|key| !meta.has_key(key))
        .map(|key| Finding::fail(format!("Missing YAML key: {}", key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REQUIRED_KEYS;
    use crate::rules::fixtures::metadata;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn required() -> Vec<String> {
        DEFAULT_REQUIRED_KEYS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reports_each_missing_key() {
        let meta = metadata(json!({"id": "Q001", "query": "What?"}));
        let findings = check_required_keys(&meta, &required());
        assert_eq!(findings.len(), 7);
        assert_eq!(findings[0], Finding::fail("Missing YAML key: packs"));
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let meta = metadata(json!({
            "id": "Q001", "query": "q", "packs": [], "primary_ids": [],
            "capability_tags": [], "sources": [], "ui": {}, "output_mode": "cards",
            "graph_required": null
        }));
        assert!(check_required_keys(&meta, &required()).is_empty());
    }
}
