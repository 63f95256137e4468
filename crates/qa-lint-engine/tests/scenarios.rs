//! End-to-end rule scenarios over whole documents

use pretty_assertions::assert_eq;
use qa_lint_engine::{config::LintConfig, QaLinter};
use qa_types::{Finding, Severity};

const FRONT: &str = r#"id: Q101
query: Do we need an information security policy?
packs: ["ISO27001:2022"]
primary_ids: ["ISO27001:2022/A.5.1"]
overlap_ids: ["ISO27002:2022/5.1"]
capability_tags: ["Draft Doc", "Approval", "Versioning"]
sources:
  - title: ISO/IEC 27001:2022 Annex A
    id: ISO27001:2022/A.5.1
    locator: Annex A 5.1
ui:
  actions:
    - type: open_template
      target: information_security_policy
    - type: start_workflow
      target: policy_refresh
  cards_hint: ["Policy basics", "Who approves"]
output_mode: cards
graph_required: true
notes: ""
"#;

const BODY: &str = "### 101) Do we need an information security policy?
**Standard term(s)**
- Information security policy
**Plain-English answer**
Yes. Top management approves a policy and communicates it [LOCAL LAW CHECK].
**Applies to**
Every organisation certifying against ISO 27001.
**Why it matters**
Auditors start here.
**Do next in our platform**
Draft the policy from the template.
**How our platform will help**
Versioning and approvals are tracked.
**Likely follow-ups**
- How often do we review it?
**Sources**
- ISO27001:2022 Annex A 5.1 Policies for information security
";

fn document(front: &str, body: &str) -> String {
    format!("---\n{}---\n{}", front, body)
}

fn lint(text: &str) -> Vec<Finding> {
    QaLinter::new(LintConfig::default())
        .unwrap()
        .lint_text("Q101.md", text)
}

fn without_line(front: &str, prefix: &str) -> String {
    front
        .lines()
        .filter(|line| !line.starts_with(prefix))
        .map(|line| format!("{}\n", line))
        .collect()
}

#[test]
fn well_formed_document_passes() {
    let findings = lint(&document(FRONT, BODY));
    assert_eq!(findings, Vec::<Finding>::new());
    assert_eq!(Severity::overall(&findings), Severity::Pass);
}

#[test]
fn missing_sources_key() {
    let front = without_line(FRONT, "sources:");
    let front = without_line(&front, "  - title:");
    let front = without_line(&front, "    id:");
    let front = without_line(&front, "    locator:");

    let findings = lint(&document(&front, BODY));
    assert_eq!(
        findings,
        vec![
            Finding::fail("Missing YAML key: sources"),
            Finding::fail("sources missing or empty"),
        ]
    );
    assert_eq!(Severity::overall(&findings), Severity::Fail);
}

#[test]
fn canonical_primary_id_passes() {
    let front = FRONT.replace(
        "primary_ids: [\"ISO27001:2022/A.5.1\"]",
        "primary_ids:\n  - ISO27001:2022/A.5.1",
    );
    let findings = lint(&document(&front, BODY));
    assert_eq!(Severity::overall(&findings), Severity::Pass);
}

#[test]
fn unknown_pack_is_single_warning() {
    let front = FRONT.replace("packs: [\"ISO27001:2022\"]", "packs: [\"MADE-UP:2099\"]");
    let findings = lint(&document(&front, BODY));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warn);
    assert!(findings[0].message.starts_with("Unknown pack"));
    assert_eq!(Severity::overall(&findings), Severity::Warn);
}

#[test]
fn unknown_source_pack_is_a_warning() {
    let front = FRONT
        .replace("    id: ISO27001:2022/A.5.1", "    id: SOC2:2017/CC6.1")
        .replace("    locator: Annex A 5.1", "    locator: CC6.1");
    let findings = lint(&document(&front, BODY));
    assert_eq!(
        findings,
        vec![
            Finding::warn("source #1 unknown pack/year: SOC2:2017/CC6.1"),
            Finding::warn(
                "Body Sources don't appear to reference metadata packs (manual check advised)"
            ),
        ]
    );
    assert_eq!(Severity::overall(&findings), Severity::Warn);
}

#[test]
fn sources_heading_without_entries_fails() {
    let body = BODY.replace(
        "- ISO27001:2022 Annex A 5.1 Policies for information security\n",
        "\n",
    );
    let findings = lint(&document(FRONT, &body));
    assert_eq!(findings, vec![Finding::fail("Body lacks Sources entries")]);
}

#[test]
fn non_canonical_register_needs_taxonomy_note() {
    let front = FRONT.replace(
        "    - type: open_template\n      target: information_security_policy\n",
        "    - type: open_register\n      target: not_a_real_register\n",
    );
    let findings = lint(&document(&front, BODY));
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().all(|f| f.severity == Severity::Warn));
    assert!(findings[0].message.contains("not_a_real_register"));
    assert!(findings[1].message.contains("@product-taxonomy"));

    let noted = front.replace("notes: \"\"", "notes: \"Pending guide update @product-taxonomy\"");
    let findings = lint(&document(&noted, BODY));
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("not_a_real_register"));
}

#[test]
fn toml_front_matter_is_equivalent() {
    let toml_front = r#"id = "Q101"
query = "Do we need an information security policy?"
packs = ["ISO27001:2022"]
primary_ids = ["ISO27001:2022/A.5.1"]
overlap_ids = ["ISO27002:2022/5.1"]
capability_tags = ["Draft Doc", "Approval", "Versioning"]
output_mode = "cards"
graph_required = true
notes = ""

[[sources]]
title = "ISO/IEC 27001:2022 Annex A"
id = "ISO27001:2022/A.5.1"
locator = "Annex A 5.1"

[ui]
cards_hint = ["Policy basics", "Who approves"]

[[ui.actions]]
type = "open_template"
target = "information_security_policy"

[[ui.actions]]
type = "start_workflow"
target = "policy_refresh"
"#;
    let text = format!("+++\n{}+++\n{}", toml_front, BODY);
    assert_eq!(lint(&text), Vec::<Finding>::new());
}

#[test]
fn malformed_metadata_stops_all_other_checks() {
    let findings = lint(&document("id: [Q101\n", ""));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Fail);
    assert!(findings[0].message.contains("YAML parse error"));
}

#[test]
fn relinting_is_idempotent() {
    let linter = QaLinter::new(LintConfig::default()).unwrap();
    let corpus = [
        document(FRONT, BODY),
        document(&FRONT.replace("cards", "table"), BODY),
        document(FRONT, &BODY.replace("**Applies to**", "")),
        "no front matter".to_string(),
    ];

    let first: Vec<Vec<Finding>> = corpus.iter().map(|t| linter.lint_text("q.md", t)).collect();
    let second: Vec<Vec<Finding>> = corpus.iter().map(|t| linter.lint_text("q.md", t)).collect();
    assert_eq!(first, second);
}

#[test]
fn smaller_vocabulary_fixture() {
    let config = LintConfig::from_str(
        r#"
        [vocabulary]
        packs = ["ISO27001:2022"]
        capability_tags = ["Draft Doc", "Approval", "Versioning"]
        "#,
    )
    .unwrap();
    let linter = QaLinter::new(config).unwrap();
    let findings = linter.lint_text("Q101.md", &document(FRONT, BODY));
    assert_eq!(
        findings,
        vec![Finding::warn(
            "Unknown pack/year in overlap_ids: [ISO27002:2022/5.1]"
        )]
    );
}
