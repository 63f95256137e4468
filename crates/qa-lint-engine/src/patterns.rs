//! Regex patterns shared by the grammar and body rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Canonical identifier: `PACK:YEAR/segment(.segment)*`
    pub static ref ID_CANONICAL: Regex =
        Regex::new(r"^[A-Z0-9]+:[0-9]{4}/[A-Za-z0-9\-§]+(?:\.[A-Za-z0-9\-§]+)*$").unwrap();

    /// Evidence bucket names
    pub static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap();

    /// Single-line bracketed token such as `[LOCAL LAW CHECK]`
    pub static ref BRACKETED_TOKEN: Regex = Regex::new(r"\[([^\[\]\n]*)\]").unwrap();

    /// Markdown bullet line, capturing the entry text
    pub static ref BULLET_LINE: Regex = Regex::new(r"^\s*[-*+]\s+(.*?)\s*$").unwrap();
}
