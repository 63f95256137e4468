//! Conformance engine for the compliance Q&A corpus
//!
//! [`QaLinter`] splits each document into metadata and body, then runs the
//! full rule battery and returns the document's severity-graded findings.
//!
//! ```
//! use qa_lint_engine::{config::LintConfig, QaLinter};
//!
//! # fn example() -> Result<(), qa_lint_engine::LintError> {
//! let linter = QaLinter::new(LintConfig::default())?;
//! let findings = linter.lint_text("Q001.md", "no front matter here");
//! assert_eq!(findings.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod frontmatter;
pub mod grammar;
pub mod metadata;
pub mod patterns;
pub mod rules;
pub mod structure;

pub use config::{FenceSyntax, LintConfig, Vocabulary};
pub use document::Document;
pub use error::LintError;
pub use grammar::{is_canonical_id, pack_of, Grammar, UiActionVerdict};
pub use structure::StructureChecker;

use qa_types::{Finding, Severity};
use std::fs;
use std::path::Path;

/// QaLinter entry point
#[derive(Debug, Clone)]
pub struct QaLinter {
    config: LintConfig,
    grammar: Grammar,
    structure: StructureChecker,
}

impl QaLinter {
    /// Build a linter; fails when a configured section marker is not a valid regex
    pub fn new(config: LintConfig) -> Result<Self, LintError> {
        let structure = StructureChecker::new(&config.rules.section_markers)?;
        let grammar = Grammar::new(config.vocabulary.clone());
        Ok(Self {
            config,
            grammar,
            structure,
        })
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Split document text using the configured fence syntaxes
    pub fn parse(&self, path: &str, text: &str) -> Result<Document, LintError> {
        Document::parse(path, text, &self.config.fences)
    }

    /// Run every rule against a parsed document
    pub fn lint_document(&self, document: &Document) -> Vec<Finding> {
        let meta = &document.metadata;
        let body = document.body.as_str();
        let rules = &self.config.rules;
        let grammar = &self.grammar;

        let mut findings = Vec::new();
        findings.extend(rules::required::check_required_keys(meta, &rules.required_keys));
        findings.extend(rules::packs::check_packs(meta, grammar));
        findings.extend(rules::identifiers::check_identifier_fields(
            meta,
            grammar,
            &rules.allow_empty_primary,
        ));
        findings.extend(rules::capabilities::check_capability_tags(
            meta,
            grammar,
            rules.capability_tags_min,
            rules.capability_tags_max,
        ));
        findings.extend(rules::sources::check_metadata_sources(meta, grammar));
        findings.extend(rules::output::check_output_mode(meta, grammar));
        findings.extend(rules::ui::check_cards_hint(
            meta,
            rules.max_cards_hint,
            rules.max_card_chars,
        ));
        findings.extend(rules::ui::check_ui_actions(meta, grammar, &rules.taxonomy_note));
        findings.extend(self.structure.check(body));
        findings.extend(rules::flags::check_flags(meta, body, grammar));
        findings.extend(rules::sources::check_body_sources(
            meta,
            body,
            &rules.sources_marker,
            grammar,
        ));
        findings
    }

    /// Lint document text; a split failure becomes the document's only finding
    pub fn lint_text(&self, path: &str, text: &str) -> Vec<Finding> {
        match self.parse(path, text) {
            Ok(document) => {
                let findings = self.lint_document(&document);
                tracing::debug!(
                    path,
                    findings = findings.len(),
                    status = %Severity::overall(&findings),
                    "linted document"
                );
                findings
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "structural error");
                vec![Finding::fail(err.to_string())]
            }
        }
    }

    /// Read and lint a file; read errors become a FAIL finding
    pub fn lint_file(&self, path: &Path) -> Vec<Finding> {
        self.lint_file_as(path, &path.display().to_string())
    }

    /// Like [`QaLinter::lint_file`], reporting the document under `label`
    pub fn lint_file_as(&self, path: &Path, label: &str) -> Vec<Finding> {
        match fs::read_to_string(path) {
            Ok(text) => self.lint_text(label, &text),
            Err(source) => {
                let err = LintError::Io {
                    path: label.to_string(),
                    source,
                };
                tracing::warn!(error = %err, "unreadable document");
                vec![Finding::fail(err.to_string())]
            }
        }
    }
}
