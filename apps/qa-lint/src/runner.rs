//! Concurrent corpus linting

use anyhow::Result;
use qa_lint_engine::QaLinter;
use qa_types::Finding;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Report label for a document: its path relative to `root`, `/`-separated
pub fn document_label(root: &Path, path: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => path.file_name().map(Path::new).unwrap_or(path),
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lint every file on the blocking pool, one task per document
///
/// Results come back in input order. A task that dies is reported as a FAIL
/// finding for its document rather than aborting the run.
pub async fn lint_corpus(
    linter: Arc<QaLinter>,
    root: &Path,
    files: Vec<PathBuf>,
) -> Result<Vec<(String, Vec<Finding>)>> {
    let handles: Vec<_> = files
        .into_iter()
        .map(|path| {
            let label = document_label(root, &path);
            let linter = Arc::clone(&linter);
            let task_label = label.clone();
            let handle =
                tokio::task::spawn_blocking(move || linter.lint_file_as(&path, &task_label));
            (label, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (label, handle) in handles {
        let findings = match handle.await {
            Ok(findings) => findings,
            Err(join_error) => {
                tracing::error!(path = %label, error = %join_error, "lint task failed");
                vec![Finding::fail(format!("Linting task failed: {}", join_error))]
            }
        };
        results.push((label, findings));
    }
    Ok(results)
}
