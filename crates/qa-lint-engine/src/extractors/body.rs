// Body text extraction for cross-checks
use crate::patterns::{BRACKETED_TOKEN, BULLET_LINE};

/// Collects the bullet entries listed under the Sources marker
///
/// Reading starts after the first occurrence of `marker` and stops at the next
/// bold or heading line. Non-bullet prose in between is skipped.
pub fn extract_body_sources(body: &str, marker: &str) -> Vec<String> {
    let Some(idx) = body.find(marker) else {
        return Vec::new();
    };
    let tail = &body[idx + marker.len()..];

    let mut entries = Vec::new();
    for line in tail.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("**") || trimmed.starts_with('#') {
            break;
        }
        if let Some(entry) = BULLET_LINE
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
        {
            entries.push(entry.to_string());
        }
    }
    entries
}

/// Non-empty tokens written as `[TOKEN]` anywhere in the body
pub fn bracketed_tokens(body: &str) -> Vec<String> {
    BRACKETED_TOKEN
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bullets_after_marker() {
        let body = "**Likely follow-ups**\n- Not a source\n\n**Sources**\n- GDPR Art. 30 (ROPA)\n* ISO/IEC 27701:2019 §7.2.8\n";
        assert_eq!(
            extract_body_sources(body, "**Sources**"),
            vec!["GDPR Art. 30 (ROPA)", "ISO/IEC 27701:2019 §7.2.8"]
        );
    }

    #[test]
    fn test_stops_at_next_section() {
        let body = "**Sources**\n- GDPR Art. 5\n**Notes**\n- not a source\n";
        assert_eq!(extract_body_sources(body, "**Sources**"), vec!["GDPR Art. 5"]);
    }

    #[test]
    fn test_heading_without_bullets_is_empty() {
        assert!(extract_body_sources("**Sources**\n\n", "**Sources**").is_empty());
        assert!(extract_body_sources("**Sources**\nSee the guide.\n", "**Sources**").is_empty());
        assert!(extract_body_sources("no sources here", "**Sources**").is_empty());
    }

    #[test]
    fn test_inline_entries_on_marker_line_are_ignored_unless_bulleted() {
        let body = "**Sources**: GDPR\n- NIS2 Art. 21\n";
        assert_eq!(extract_body_sources(body, "**Sources**"), vec!["NIS2 Art. 21"]);
    }

    #[test]
    fn test_bracketed_tokens() {
        let body = "Check [LOCAL LAW CHECK] and [RESEARCH NEEDED]; ignore [] here.";
        assert_eq!(
            bracketed_tokens(body),
            vec!["LOCAL LAW CHECK", "RESEARCH NEEDED"]
        );
    }

    #[test]
    fn test_bracketed_tokens_do_not_span_lines() {
        assert!(bracketed_tokens("[open\nclose]").is_empty());
    }
}
