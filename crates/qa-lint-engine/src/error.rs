use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Missing front matter: {path} does not start with a metadata fence")]
    MissingFrontMatter { path: String },

    #[error("Malformed front matter in {path}: no closing '{fence}' fence")]
    UnterminatedFrontMatter { path: String, fence: &'static str },

    #[error("Malformed front matter in {path}: {message}")]
    MalformedFrontMatter { path: String, message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid section marker pattern /{pattern}/: {message}")]
    InvalidPattern { pattern: String, message: String },
}
