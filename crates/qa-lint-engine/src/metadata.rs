//! Typed view over a parsed metadata block
//!
//! Every recognised key becomes a [`Field`], so rules can tell a missing key
//! apart from a value of the wrong shape without poking at raw JSON.

use crate::frontmatter::{value_kind, MetadataMap};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Why a metadata field could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Key absent or explicitly null
    Missing,
    /// Key present with a value of the wrong shape
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    fn wrong(expected: &'static str, value: &Value) -> Self {
        FieldError::WrongType {
            expected,
            found: value_kind(value),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing => f.write_str("is missing"),
            FieldError::WrongType { expected, found } => {
                write!(f, "must be {} (found {})", expected, found)
            }
        }
    }
}

/// Result of reading one metadata field
pub type Field<T> = Result<T, FieldError>;

/// An entry of the `sources` list
///
/// Subfields hold trimmed, non-empty text; blank values become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEntry {
    pub title: Option<String>,
    pub id: Option<String>,
    pub locator: Option<String>,
}

impl SourceEntry {
    /// Look up a subfield by its metadata name
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "id" => self.id.as_deref(),
            "locator" => self.locator.as_deref(),
            _ => None,
        }
    }
}

/// An entry of `ui.actions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiAction {
    pub action_type: String,
    pub target: String,
}

/// The `ui` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiBlock {
    pub actions: Field<Vec<Field<UiAction>>>,
    pub cards_hint: Field<Vec<String>>,
}

/// Typed metadata record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    keys: BTreeSet<String>,
    pub id: Field<String>,
    pub query: Field<String>,
    pub packs: Field<Vec<String>>,
    pub primary_ids: Field<Vec<String>>,
    pub overlap_ids: Field<Vec<String>>,
    pub capability_tags: Field<Vec<String>>,
    pub sources: Field<Vec<Field<SourceEntry>>>,
    pub ui: Field<UiBlock>,
    pub output_mode: Field<String>,
    pub graph_required: Field<Value>,
    pub flags: Field<Vec<String>>,
    pub notes: Field<String>,
}

impl Metadata {
    pub fn from_map(map: &MetadataMap) -> Self {
        Self {
            keys: map.keys().cloned().collect(),
            id: lookup(map, "id").and_then(as_string),
            query: lookup(map, "query").and_then(as_string),
            packs: lookup(map, "packs").and_then(as_string_list),
            primary_ids: lookup(map, "primary_ids").and_then(as_string_list),
            overlap_ids: lookup(map, "overlap_ids").and_then(as_string_list),
            capability_tags: lookup(map, "capability_tags").and_then(as_string_list),
            sources: lookup(map, "sources").and_then(as_sources),
            ui: lookup(map, "ui").and_then(as_ui),
            output_mode: lookup(map, "output_mode").and_then(as_string),
            graph_required: lookup(map, "graph_required").cloned(),
            flags: lookup(map, "flags").and_then(as_string_list),
            notes: lookup(map, "notes").and_then(as_string),
        }
    }

    /// Whether the key appears in the block at all, null values included
    pub fn has_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Free-text notes, empty when absent or not a string
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

fn lookup<'a>(map: &'a MetadataMap, key: &str) -> Field<&'a Value> {
    match map.get(key) {
        None | Some(Value::Null) => Err(FieldError::Missing),
        Some(value) => Ok(value),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(scalar_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn as_string(value: &Value) -> Field<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(FieldError::wrong("a string", other)),
    }
}

fn as_string_list(value: &Value) -> Field<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(FieldError::wrong("a list", value));
    };
    items
        .iter()
        .map(|item| scalar_text(item).ok_or_else(|| FieldError::wrong("a list of strings", item)))
        .collect()
}

fn as_sources(value: &Value) -> Field<Vec<Field<SourceEntry>>> {
    let Value::Array(items) = value else {
        return Err(FieldError::wrong("a list", value));
    };
    Ok(items
        .iter()
        .map(|item| match item {
            Value::Object(entry) => Ok(SourceEntry {
                title: non_blank(entry.get("title")),
                id: non_blank(entry.get("id")),
                locator: non_blank(entry.get("locator")),
            }),
            other => Err(FieldError::wrong("a mapping", other)),
        })
        .collect())
}

fn as_ui(value: &Value) -> Field<UiBlock> {
    let Value::Object(ui) = value else {
        return Err(FieldError::wrong("a mapping", value));
    };
    let actions = lookup(ui, "actions").and_then(|v| {
        let Value::Array(items) = v else {
            return Err(FieldError::wrong("a list", v));
        };
        Ok(items
            .iter()
            .map(|item| match item {
                Value::Object(action) => Ok(UiAction {
                    action_type: action.get("type").and_then(scalar_text).unwrap_or_default(),
                    target: action.get("target").and_then(scalar_text).unwrap_or_default(),
                }),
                other => Err(FieldError::wrong("a mapping", other)),
            })
            .collect())
    });
    Ok(UiBlock {
        actions,
        cards_hint: lookup(ui, "cards_hint").and_then(as_string_list),
    })
}
