use crate::config::FenceSyntax;
use crate::error::LintError;
use crate::frontmatter::split_front_matter;
use crate::metadata::Metadata;

/// One corpus entry, split into typed metadata and body text
#[derive(Debug, Clone)]
pub struct Document {
    pub path: String,
    pub metadata: Metadata,
    pub body: String,
}

impl Document {
    /// Split and type the document's source text
    pub fn parse(path: &str, text: &str, fences: &[FenceSyntax]) -> Result<Self, LintError> {
        let (map, body) = split_front_matter(path, text, fences)?;
        Ok(Self {
            path: path.to_string(),
            metadata: Metadata::from_map(&map),
            body,
        })
    }
}
