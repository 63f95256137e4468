//! Candidate document discovery

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Default candidate extensions
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "yml", "yaml"];

/// Collect candidate files under `root`, sorted by path
///
/// Extensions match case-insensitively. Hidden directories and `target/` are
/// not descended into, and any path in `exclude` is skipped. A `root` that is
/// itself a file is returned as the only candidate. Entries that cannot be read
/// below the root are logged and skipped.
pub fn discover_documents(
    root: &Path,
    extensions: &[String],
    exclude: &BTreeSet<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let extensions: Vec<String> = extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
        .collect();

    let metadata = fs::metadata(root)
        .with_context(|| format!("Failed to read directory {}", root.display()))?;
    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if has_extension(path, &extensions) && !is_excluded(path, exclude) {
            found.push(path.to_path_buf());
        }
    }
    found.sort();
    tracing::debug!(root = %root.display(), count = found.len(), "discovered documents");
    Ok(found)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "target"
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| extensions.iter().any(|e| *e == ext))
}

fn is_excluded(path: &Path, exclude: &BTreeSet<PathBuf>) -> bool {
    if exclude.is_empty() {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| exclude.contains(&p))
}
