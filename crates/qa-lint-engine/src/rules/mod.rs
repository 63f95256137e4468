//! Per-document rule battery
//!
//! Each rule reads the typed metadata (and, where needed, the body) and
//! returns its findings. Rules are independent of each other; a malformed
//! field only short-circuits the rule that owns it.

pub mod capabilities;
pub mod flags;
pub mod identifiers;
pub mod output;
pub mod packs;
pub mod required;
pub mod sources;
pub mod ui;
