//! QA corpus linter binary
//!
//! Lints every candidate document under ROOT, prints a summary, writes the CSV
//! and Markdown reports, and exits 1 when any document FAILs.

use anyhow::{Context, Result};
use clap::Parser;
use qa_lint::discover::{discover_documents, DEFAULT_EXTENSIONS};
use qa_lint::runner::lint_corpus;
use qa_lint_engine::{LintConfig, QaLinter};
use qa_report::{CorpusReport, OutputFormat, Reporter};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for usage, configuration, and I/O errors outside any document
const EXIT_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "qa-lint")]
#[command(version, about = "Conformance linter for the compliance Q&A knowledge base")]
struct Args {
    /// Corpus root directory (or a single document)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// TOML configuration overriding vocabularies and rule settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV report path
    #[arg(long, default_value = "qa_validation_report.csv")]
    csv: PathBuf,

    /// Markdown report path
    #[arg(long, default_value = "qa_validation_report.md")]
    markdown: PathBuf,

    /// Also write the report as pretty JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Candidate file extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Print the summary without writing report files
    #[arg(long)]
    no_write: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the summary
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(args).await {
        Ok(report) => report.exit_code(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

async fn run(args: Args) -> Result<CorpusReport> {
    let config = match &args.config {
        Some(path) => LintConfig::from_file(path)?,
        None => LintConfig::default(),
    };
    let linter = Arc::new(QaLinter::new(config).context("Invalid lint configuration")?);
    tracing::debug!(
        fences = ?linter.config().fences,
        packs = linter.grammar().vocabulary().packs.len(),
        markers = linter.config().rules.section_markers.len(),
        "Linter configured"
    );

    let extensions = if args.extensions.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        args.extensions.clone()
    };

    // Never lint our own previous output
    let exclude: BTreeSet<PathBuf> = [Some(&args.csv), Some(&args.markdown), args.json.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|p| fs::canonicalize(p).ok())
        .collect();

    let files = discover_documents(&args.root, &extensions, &exclude)?;
    tracing::info!(
        "Linting {} documents under {}",
        files.len(),
        args.root.display()
    );

    let results = lint_corpus(linter, &args.root, files).await?;
    let generated_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let report = CorpusReport::from_results(results, generated_at);

    Reporter::new(OutputFormat::Console).report(&report)?;

    if !args.no_write {
        Reporter::new(OutputFormat::Csv).write_to_file(&report, &args.csv)?;
        Reporter::new(OutputFormat::Markdown).write_to_file(&report, &args.markdown)?;
        if let Some(json) = &args.json {
            Reporter::new(OutputFormat::JsonPretty).write_to_file(&report, json)?;
        }
        tracing::info!(
            "Wrote {} and {}",
            args.csv.display(),
            args.markdown.display()
        );
    }

    tracing::info!(
        files = report.files_scanned,
        fail = report.fail_count,
        warn = report.warn_count,
        "QA validation complete"
    );
    Ok(report)
}
