use crate::grammar::Grammar;
use crate::metadata::{FieldError, Metadata, UiBlock};
use qa_types::Finding;

fn ui_block(meta: &Metadata) -> Option<&UiBlock> {
    meta.ui.as_ref().ok()
}

/// Rendering hints are optional, but should stay few and short
pub fn check_cards_hint(meta: &Metadata, max_count: usize, max_chars: usize) -> Vec<Finding> {
    let Some(ui) = ui_block(meta) else {
        return Vec::new();
    };
    let hints = match &ui.cards_hint {
        Ok(hints) => hints,
        Err(FieldError::Missing) => return Vec::new(),
        Err(err) => return vec![Finding::fail(format!("ui.cards_hint {}", err))],
    };

    let mut findings = Vec::new();
    if hints.len() > max_count {
        findings.push(Finding::warn(format!(
            "cards_hint should have ≤{} items",
            max_count
        )));
    }
    for hint in hints {
        if hint.chars().count() > max_chars {
            findings.push(Finding::warn(format!(
                "cards_hint item over {} chars: '{}'",
                max_chars, hint
            )));
        }
    }
    findings
}

/// Classify every UI action; non-canonical targets must be acknowledged with
/// the taxonomy note in `notes`
pub fn check_ui_actions(meta: &Metadata, grammar: &Grammar, taxonomy_note: &str) -> Vec<Finding> {
    let ui = match &meta.ui {
        Ok(ui) => ui,
        Err(FieldError::Missing) => return Vec::new(),
        Err(err) => return vec![Finding::fail(format!("ui {}", err))],
    };
    let actions = match &ui.actions {
        Ok(actions) => actions,
        Err(FieldError::Missing) => return Vec::new(),
        Err(err) => return vec![Finding::fail(format!("ui.actions {}", err))],
    };

    let noted = meta.notes_text().contains(taxonomy_note);
    let mut findings = Vec::new();

    for (n, action) in actions.iter().enumerate() {
        let action = match action {
            Ok(action) => action,
            Err(err) => {
                findings.push(Finding::fail(format!("ui.actions #{} {}", n + 1, err)));
                continue;
            }
        };

        let verdict = grammar.ui_action_verdict(&action.action_type, &action.target);
        let finding = verdict.finding();
        if !finding.is_pass() {
            findings.push(finding);
        }
        if verdict.is_non_canonical_target() && !noted {
            findings.push(Finding::warn(format!(
                "Non-canonical UI target without '{}' note in notes",
                taxonomy_note
            )));
        }
    }
    findings
}
