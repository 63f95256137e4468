//! Metadata/body splitting
//!
//! A document starts with a fence line (`---` for YAML, `+++` for TOML), the
//! metadata block, and a closing line carrying the same fence. Everything after
//! the closing fence is the body.

use crate::config::FenceSyntax;
use crate::error::LintError;
use serde_json::{Map, Value};

/// Parsed metadata block, keyed by top-level key
pub type MetadataMap = Map<String, Value>;

/// Split document text into its metadata mapping and body text
///
/// Only the fence syntaxes listed in `fences` are recognised.
pub fn split_front_matter(
    path: &str,
    text: &str,
    fences: &[FenceSyntax],
) -> Result<(MetadataMap, String), LintError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let first_end = text.find('\n').unwrap_or(text.len());
    let opening = text[..first_end].trim_end();
    let Some(syntax) = fences.iter().copied().find(|f| f.marker() == opening) else {
        return Err(LintError::MissingFrontMatter {
            path: path.to_string(),
        });
    };

    let block_start = (first_end + 1).min(text.len());
    let mut offset = block_start;
    while offset < text.len() {
        let line_end = text[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(text.len());
        if text[offset..line_end].trim_end() == syntax.marker() {
            let block = &text[block_start..offset];
            let body_start = (line_end + 1).min(text.len());
            let metadata =
                parse_block(syntax, block).map_err(|message| LintError::MalformedFrontMatter {
                    path: path.to_string(),
                    message,
                })?;
            return Ok((metadata, text[body_start..].to_string()));
        }
        offset = line_end + 1;
    }

    Err(LintError::UnterminatedFrontMatter {
        path: path.to_string(),
        fence: syntax.marker(),
    })
}

fn parse_block(syntax: FenceSyntax, block: &str) -> Result<MetadataMap, String> {
    if block.trim().is_empty() {
        return Ok(Map::new());
    }

    let value: Value = match syntax {
        FenceSyntax::Yaml => {
            serde_yaml::from_str(block).map_err(|e| format!("YAML parse error: {}", e))?
        }
        FenceSyntax::Toml => toml::from_str(block).map_err(|e| format!("TOML parse error: {}", e))?,
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(format!(
            "metadata block must be a mapping, found {}",
            value_kind(&other)
        )),
    }
}

/// Human-readable name of a JSON value's type
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
