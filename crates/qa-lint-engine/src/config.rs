//! Linter configuration
//!
//! Controlled vocabularies and rule parameters are loaded from TOML. Every
//! section is optional; omitted values fall back to the authoring guide's
//! defaults, so a fixture can override just the vocabulary it cares about.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Top-level linter configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LintConfig {
    /// Front matter fence syntaxes accepted by the splitter
    pub fences: Vec<FenceSyntax>,
    /// Controlled vocabularies
    pub vocabulary: Vocabulary,
    /// Rule parameters
    pub rules: RuleConfig,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            fences: vec![FenceSyntax::Yaml, FenceSyntax::Toml],
            vocabulary: Vocabulary::default(),
            rules: RuleConfig::default(),
        }
    }
}

impl LintConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use qa_lint_engine::config::LintConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = LintConfig::from_file("qa-lint.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// ```
    /// use qa_lint_engine::config::LintConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = LintConfig::from_str(r#"
    ///     [vocabulary]
    ///     packs = ["ISO27001:2022"]
    /// "#)?;
    /// assert_eq!(config.vocabulary.packs.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Metadata fence syntax
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FenceSyntax {
    /// `---` delimited YAML
    Yaml,
    /// `+++` delimited TOML
    Toml,
}

impl FenceSyntax {
    /// The line that opens and closes the block
    pub fn marker(&self) -> &'static str {
        match self {
            FenceSyntax::Yaml => "---",
            FenceSyntax::Toml => "+++",
        }
    }
}

/// Controlled vocabularies from the authoring guide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Vocabulary {
    /// Allowed `PACK:YEAR` prefixes
    pub packs: BTreeSet<String>,
    /// Public capability tags
    pub capability_tags: BTreeSet<String>,
    /// `ui.actions[].type` values
    pub action_types: BTreeSet<String>,
    /// Canonical register names (`open_register`)
    pub registers: BTreeSet<String>,
    /// Canonical tracker names (`open_tracker`)
    pub trackers: BTreeSet<String>,
    /// Canonical workflow names (`start_workflow`)
    pub workflows: BTreeSet<String>,
    /// Flags usable in metadata and as bracketed body tokens
    pub flags: BTreeSet<String>,
    /// `output_mode` values
    pub output_modes: BTreeSet<String>,
}

fn set_of(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub const DEFAULT_PACKS: &[&str] = &[
    "ISO27001:2022",
    "ISO27701:2019",
    "GDPR:2016",
    "CPRA:2023",
    "NIS2:2023",
    "EUAI:2024",
    "ISO27002:2022",
    "ISO27000:2018",
];

pub const DEFAULT_CAPABILITY_TAGS: &[&str] = &[
    "NL-Portal",
    "Draft Doc",
    "Approval",
    "Versioning",
    "Register",
    "Tracker",
    "Workflow",
    "Reminder",
    "Planner",
    "Dashboard",
    "Report",
    "Virtual Manager",
    "Classify-Assist",
    "Evidence-Guided",
];

pub const DEFAULT_ACTION_TYPES: &[&str] = &[
    "open_register",
    "start_workflow",
    "open_template",
    "create_policy",
    "open_tracker",
    "upload_evidence",
];

pub const DEFAULT_REGISTERS: &[&str] = &[
    "risk",
    "soa",
    "vendors",
    "ropa",
    "transfers",
    "incidents",
    "dsr",
    "assets_systems",
    "training",
    "audits",
    "document_register",
    "byod_compliance",
    "risk_communications",
    "business_impact",
    "privacy_compliance",
    "operational_controls",
    "access_control_matrix",
    "policy_acknowledgements",
    "kpi_metrics",
    "legal_regulatory_compliance",
];

pub const DEFAULT_TRACKERS: &[&str] = &[
    "cap_nc",
    "change_management",
    "monitoring",
    "security_assessments",
    "penetration_tests",
    "security_reviews",
    "findings",
    "remediation",
    "tasks",
    "issues",
    "evidence_requests",
];

pub const DEFAULT_WORKFLOWS: &[&str] = &[
    "program_readiness",
    "program_external_assessment",
    "program_maintenance",
    "gdpr_quick_start",
    "dpa_pack",
    "dpia",
    "incident_breach",
    "internal_audit",
    "management_review",
    "exception",
    "vendor_dd",
    "dsr_fulfillment",
    "policy_refresh",
    "risk_assessment",
    "bc_dr_plan",
];

pub const DEFAULT_FLAGS: &[&str] = &[
    "LOCAL LAW CHECK",
    "CB POLICY VARIES",
    "MARKET PRACTICE—VALIDATE",
    "RESEARCH NEEDED",
];

pub const DEFAULT_OUTPUT_MODES: &[&str] = &["cards", "prose", "both"];

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            packs: set_of(DEFAULT_PACKS),
            capability_tags: set_of(DEFAULT_CAPABILITY_TAGS),
            action_types: set_of(DEFAULT_ACTION_TYPES),
            registers: set_of(DEFAULT_REGISTERS),
            trackers: set_of(DEFAULT_TRACKERS),
            workflows: set_of(DEFAULT_WORKFLOWS),
            flags: set_of(DEFAULT_FLAGS),
            output_modes: set_of(DEFAULT_OUTPUT_MODES),
        }
    }
}

/// Rule parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuleConfig {
    /// Metadata keys that must be present
    pub required_keys: Vec<String>,
    /// Ordered body section markers (regular expressions)
    pub section_markers: Vec<String>,
    /// Literal marker introducing the body Sources listing
    pub sources_marker: String,
    /// Document ids allowed to have an empty `primary_ids`
    pub allow_empty_primary: BTreeSet<String>,
    /// Marker in `notes` that tolerates non-canonical UI targets
    pub taxonomy_note: String,
    /// Maximum number of `ui.cards_hint` entries
    pub max_cards_hint: usize,
    /// Maximum characters per `ui.cards_hint` entry
    pub max_card_chars: usize,
    /// Recommended minimum number of capability tags
    pub capability_tags_min: usize,
    /// Recommended maximum number of capability tags
    pub capability_tags_max: usize,
}

pub const DEFAULT_REQUIRED_KEYS: &[&str] = &[
    "id",
    "query",
    "packs",
    "primary_ids",
    "capability_tags",
    "sources",
    "ui",
    "output_mode",
    "graph_required",
];

pub const DEFAULT_SECTION_MARKERS: &[&str] = &[
    r"###\s*\d+\)\s*",
    r"\*\*Standard term\(s\)\*\*",
    r"\*\*Plain-English answer\*\*",
    r"\*\*Applies to\*\*",
    r"\*\*Why it matters\*\*",
    r"\*\*Do next in our platform\*\*",
    r"\*\*How our platform will help\*\*",
    r"\*\*Likely follow-ups\*\*",
    r"\*\*Sources\*\*",
];

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            required_keys: DEFAULT_REQUIRED_KEYS.iter().map(|s| s.to_string()).collect(),
            section_markers: DEFAULT_SECTION_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sources_marker: "**Sources**".to_string(),
            allow_empty_primary: BTreeSet::new(),
            taxonomy_note: "@product-taxonomy".to_string(),
            max_cards_hint: 3,
            max_card_chars: 40,
            capability_tags_min: 3,
            capability_tags_max: 6,
        }
    }
}
