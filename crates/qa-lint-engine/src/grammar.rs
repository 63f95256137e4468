//! Canonical grammar: identifier syntax and controlled vocabularies

use crate::config::Vocabulary;
use crate::patterns::{ID_CANONICAL, SNAKE_CASE};
use qa_types::Finding;
use std::fmt;

/// True iff `s` is a canonical identifier (`PACK:YEAR/segment(.segment)*`)
pub fn is_canonical_id(s: &str) -> bool {
    ID_CANONICAL.is_match(s)
}

/// The `PACK:YEAR` prefix of a canonical identifier
///
/// Returns `None` for strings that are not canonical.
pub fn pack_of(id: &str) -> Option<&str> {
    if !is_canonical_id(id) {
        return None;
    }
    id.split_once('/').map(|(pack, _)| pack)
}

/// True iff `s` is a snake_case name
pub fn is_snake_case(s: &str) -> bool {
    SNAKE_CASE.is_match(s)
}

/// Render a list as `[a, b, c]` for finding messages
pub(crate) fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Canonical name set a UI action target is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Register,
    Tracker,
    Workflow,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetKind::Register => "register",
            TargetKind::Tracker => "tracker",
            TargetKind::Workflow => "workflow",
        })
    }
}

/// Outcome of classifying one `ui.actions` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiActionVerdict {
    Accepted,
    UnknownType {
        action_type: String,
        allowed: Vec<String>,
    },
    NonCanonicalTarget {
        kind: TargetKind,
        action_type: String,
        target: String,
    },
    NotSnakeCase {
        target: String,
    },
}

impl UiActionVerdict {
    /// Whether the target missed its register/tracker/workflow taxonomy
    pub fn is_non_canonical_target(&self) -> bool {
        matches!(self, UiActionVerdict::NonCanonicalTarget { .. })
    }

    pub fn finding(&self) -> Finding {
        match self {
            UiActionVerdict::Accepted => Finding::pass(),
            UiActionVerdict::UnknownType {
                action_type,
                allowed,
            } => Finding::fail(format!(
                "ui.actions.type '{}' not in allowed set {}",
                action_type,
                format_list(allowed)
            )),
            UiActionVerdict::NonCanonicalTarget {
                kind,
                action_type,
                target,
            } => Finding::warn(format!(
                "{} target '{}' is not canonical ({} taxonomy)",
                action_type, target, kind
            )),
            UiActionVerdict::NotSnakeCase { target } => Finding::warn(format!(
                "upload_evidence target '{}' is not snake_case",
                target
            )),
        }
    }
}

/// Identifier grammar plus the vocabularies of one lint run
#[derive(Debug, Clone)]
pub struct Grammar {
    vocabulary: Vocabulary,
}

impl Grammar {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn is_canonical_id(&self, s: &str) -> bool {
        is_canonical_id(s)
    }

    pub fn pack_of<'a>(&self, id: &'a str) -> Option<&'a str> {
        pack_of(id)
    }

    pub fn is_known_pack(&self, pack: &str) -> bool {
        self.vocabulary.packs.contains(pack)
    }

    pub fn is_known_capability_tag(&self, tag: &str) -> bool {
        self.vocabulary.capability_tags.contains(tag)
    }

    pub fn is_known_flag(&self, flag: &str) -> bool {
        self.vocabulary.flags.contains(flag)
    }

    pub fn is_known_output_mode(&self, mode: &str) -> bool {
        self.vocabulary.output_modes.contains(mode)
    }

    /// Classify a UI action against the action-type and target taxonomies
    pub fn ui_action_verdict(&self, action_type: &str, target: &str) -> UiActionVerdict {
        if !self.vocabulary.action_types.contains(action_type) {
            return UiActionVerdict::UnknownType {
                action_type: action_type.to_string(),
                allowed: self.vocabulary.action_types.iter().cloned().collect(),
            };
        }

        let canonical = match action_type {
            "open_register" => Some((TargetKind::Register, &self.vocabulary.registers)),
            "open_tracker" => Some((TargetKind::Tracker, &self.vocabulary.trackers)),
            "start_workflow" => Some((TargetKind::Workflow, &self.vocabulary.workflows)),
            _ => None,
        };

        if let Some((kind, names)) = canonical {
            if !names.contains(target) {
                return UiActionVerdict::NonCanonicalTarget {
                    kind,
                    action_type: action_type.to_string(),
                    target: target.to_string(),
                };
            }
            return UiActionVerdict::Accepted;
        }

        if action_type == "upload_evidence" && !is_snake_case(target) {
            return UiActionVerdict::NotSnakeCase {
                target: target.to_string(),
            };
        }

        // open_template / create_policy targets come from the template and
        // policy catalogs, which have no canonical list here
        UiActionVerdict::Accepted
    }

    /// Severity-graded result for one UI action
    pub fn classify_ui_action(&self, action_type: &str, target: &str) -> Finding {
        self.ui_action_verdict(action_type, target).finding()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_types::Severity;

    #[test]
    fn test_canonical_ids() {
        assert!(is_canonical_id("ISO27001:2022/A.5.1"));
        assert!(is_canonical_id("GDPR:2016/Art.30"));
        assert!(is_canonical_id("EUAI:2024/Art.9-2"));
        assert!(is_canonical_id("ISO27701:2019/§7.2.8"));
    }

    #[test]
    fn test_non_canonical_ids() {
        assert!(!is_canonical_id(""));
        assert!(!is_canonical_id("iso27001:2022/A.5.1"));
        assert!(!is_canonical_id("ISO27001:202/A.5.1"));
        assert!(!is_canonical_id("ISO27001:2022/"));
        assert!(!is_canonical_id("ISO27001:2022"));
        assert!(!is_canonical_id("ISO27001 2022/A.5.1"));
        assert!(!is_canonical_id(" ISO27001:2022/A.5.1"));
        assert!(!is_canonical_id("ISO27001:2022/A 5"));
        assert!(!is_canonical_id("ISO27001:2022/A.5/extra"));
    }

    #[test]
    fn test_empty_segments_rejected() {
        for id in [
            "ISO27001:2022/.",
            "ISO27001:2022/A..5",
            "ISO27001:2022/A.5.",
            "ISO27001:2022/.5",
        ] {
            assert!(!is_canonical_id(id), "{id} should not be canonical");
        }
    }

    #[test]
    fn test_pack_of() {
        assert_eq!(pack_of("ISO27001:2022/A.5.1"), Some("ISO27001:2022"));
        assert_eq!(pack_of("not-an-id"), None);
    }

    #[test]
    fn test_snake_case() {
        assert!(is_snake_case("access_logs"));
        assert!(is_snake_case("soa2"));
        assert!(!is_snake_case("AccessLogs"));
        assert!(!is_snake_case("access__logs"));
        assert!(!is_snake_case("_access"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn test_unknown_action_type_fails() {
        let grammar = Grammar::default();
        let finding = grammar.classify_ui_action("open_dashboard", "kpi");
        assert_eq!(finding.severity, Severity::Fail);
        assert!(finding.message.contains("'open_dashboard' not in allowed set"));
        assert!(finding.message.contains("open_register"));
    }

    #[test]
    fn test_canonical_targets_pass() {
        let grammar = Grammar::default();
        assert!(grammar.classify_ui_action("open_register", "ropa").is_pass());
        assert!(grammar.classify_ui_action("open_tracker", "cap_nc").is_pass());
        assert!(grammar.classify_ui_action("start_workflow", "dpia").is_pass());
        assert!(grammar
            .classify_ui_action("upload_evidence", "access_reviews")
            .is_pass());
    }

    #[test]
    fn test_non_canonical_targets_warn() {
        let grammar = Grammar::default();
        let verdict = grammar.ui_action_verdict("open_register", "not_a_real_register");
        assert!(verdict.is_non_canonical_target());
        let finding = verdict.finding();
        assert_eq!(finding.severity, Severity::Warn);
        assert_eq!(
            finding.message,
            "open_register target 'not_a_real_register' is not canonical (register taxonomy)"
        );

        let tracker = grammar.ui_action_verdict("open_tracker", "risk");
        assert!(matches!(
            tracker,
            UiActionVerdict::NonCanonicalTarget {
                kind: TargetKind::Tracker,
                ..
            }
        ));
    }

    #[test]
    fn test_evidence_bucket_must_be_snake_case() {
        let grammar = Grammar::default();
        let verdict = grammar.ui_action_verdict("upload_evidence", "Access Reviews");
        assert!(!verdict.is_non_canonical_target());
        assert_eq!(verdict.finding().severity, Severity::Warn);
    }

    #[test]
    fn test_catalog_driven_types_always_pass() {
        let grammar = Grammar::default();
        assert!(grammar
            .classify_ui_action("open_template", "Anything Goes")
            .is_pass());
        assert!(grammar.classify_ui_action("create_policy", "").is_pass());
    }

    #[test]
    fn test_smaller_vocabulary_override() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.registers = ["custom_register".to_string()].into_iter().collect();
        let grammar = Grammar::new(vocabulary);
        assert!(grammar
            .classify_ui_action("open_register", "custom_register")
            .is_pass());
        assert!(!grammar.classify_ui_action("open_register", "risk").is_pass());
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(["a", "b"]), "[a, b]");
        assert_eq!(format_list(Vec::<String>::new()), "[]");
    }
}
