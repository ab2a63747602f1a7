// ABOUTME: Minimal frontmatter reader for post metadata blocks
// ABOUTME: Flat key/value lines and inline lists only; anything else is body

use serde::{Deserialize, Serialize};

const OPEN_MARKER: &[u8] = b"---\n";
const CLOSE_MARKER: &[u8] = b"\n---";

/// Post metadata read from a leading `---` block.
///
/// Fields missing from the block keep their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub tags: Vec<String>,
    pub audience: String,
    pub draft: bool,
    pub slug: String,
    pub canonical_url: String,
    pub meta_description: String,
    pub social_image: String,
    pub scheduled_at: String,
    pub section: String,
    pub podcast_url: String,
}

impl Frontmatter {
    /// Parse the lines between the delimiters.
    ///
    /// Lines without a colon and unknown keys are skipped; a repeated key
    /// overwrites the earlier value.
    pub fn parse(block: &str) -> Self {
        let mut fm = Frontmatter::default();
        for (key, value) in block.lines().filter_map(split_line) {
            match key {
                "title" => fm.title = value.to_string(),
                "subtitle" => fm.subtitle = value.to_string(),
                "date" => fm.date = value.to_string(),
                "tags" => fm.tags = parse_list(value),
                "audience" => fm.audience = value.to_string(),
                "draft" => fm.draft = value == "true",
                "slug" => fm.slug = value.to_string(),
                "canonical_url" => fm.canonical_url = value.to_string(),
                "meta_description" => fm.meta_description = value.to_string(),
                "social_image" => fm.social_image = value.to_string(),
                "scheduled_at" => fm.scheduled_at = value.to_string(),
                "section" => fm.section = value.to_string(),
                "podcast_url" => fm.podcast_url = value.to_string(),
                _ => {}
            }
        }
        fm
    }
}

/// Split a leading frontmatter block off `source`.
///
/// Returns `(None, source)` unchanged when the input does not open with
/// `---\n` or the block is never closed.
pub fn extract(source: &[u8]) -> (Option<Frontmatter>, &[u8]) {
    if !source.starts_with(OPEN_MARKER) {
        return (None, source);
    }

    let rest = &source[OPEN_MARKER.len()..];
    let Some(end) = find(rest, CLOSE_MARKER) else {
        return (None, source);
    };

    let block = String::from_utf8_lossy(&rest[..end]);
    // The newline ending the terminator line stays with the body
    let body = &rest[end + CLOSE_MARKER.len()..];

    (Some(Frontmatter::parse(&block)), body)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), unquote(value.trim())))
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn parse_list(value: &str) -> Vec<String> {
    let value = value.strip_prefix('[').unwrap_or(value);
    let value = value.strip_suffix(']').unwrap_or(value);
    value
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_without_marker_returns_source() {
        let source = b"# Hello\n\nWorld\n";
        let (fm, body) = extract(source);
        assert!(fm.is_none());
        assert_eq!(body, source);
    }

    #[test]
    fn test_extract_unterminated_block_is_body() {
        let source = b"---\ntitle: Lost\n\nNo closing marker\n";
        let (fm, body) = extract(source);
        assert!(fm.is_none());
        assert_eq!(body, source);
    }

    #[test]
    fn test_extract_marker_must_open_at_byte_zero() {
        let source = b"\n---\ntitle: Late\n---\nBody\n";
        let (fm, body) = extract(source);
        assert!(fm.is_none());
        assert_eq!(body, source);
    }

    #[test]
    fn test_extract_all_fields() {
        let source = b"---\n\
title: \"Hello World\"\n\
subtitle: 'A subtitle'\n\
date: 2025-01-15\n\
tags: [rust, \"cli\", 'tools']\n\
audience: only_paid\n\
draft: true\n\
slug: hello-world\n\
canonical_url: https://example.com/hello\n\
meta_description: About things\n\
social_image: https://example.com/img.png\n\
scheduled_at: 2025-02-01T09:00:00Z\n\
section: essays\n\
podcast_url: https://example.com/ep1.mp3\n\
---\n\
Body text\n";
        let (fm, body) = extract(source);
        let fm = fm.unwrap();
        assert_eq!(fm.title, "Hello World");
        assert_eq!(fm.subtitle, "A subtitle");
        assert_eq!(fm.date, "2025-01-15");
        assert_eq!(fm.tags, vec!["rust", "cli", "tools"]);
        assert_eq!(fm.audience, "only_paid");
        assert!(fm.draft);
        assert_eq!(fm.slug, "hello-world");
        assert_eq!(fm.canonical_url, "https://example.com/hello");
        assert_eq!(fm.meta_description, "About things");
        assert_eq!(fm.social_image, "https://example.com/img.png");
        assert_eq!(fm.scheduled_at, "2025-02-01T09:00:00Z");
        assert_eq!(fm.section, "essays");
        assert_eq!(fm.podcast_url, "https://example.com/ep1.mp3");
        assert_eq!(body, b"\nBody text\n");
    }

    #[test]
    fn test_extract_is_idempotent_on_stripped_body() {
        let source = b"---\ntitle: Once\n---\nJust body\n";
        let (_, body) = extract(source);
        let (fm, again) = extract(body);
        assert!(fm.is_none());
        assert_eq!(again, body);
    }

    #[test]
    fn test_extract_keeps_leading_rule_in_body() {
        let source = b"---\ntitle: x\n---\n---\nfoo\n---\nbar\n";
        let (fm, body) = extract(source);
        assert_eq!(fm.unwrap().title, "x");
        assert_eq!(body, b"\n---\nfoo\n---\nbar\n");

        let (again_fm, again) = extract(body);
        assert!(again_fm.is_none());
        assert_eq!(again, body);
    }

    #[test]
    fn test_extract_terminator_at_end_of_input() {
        let (fm, body) = extract(b"---\ntitle: Edge\n---");
        assert_eq!(fm.unwrap().title, "Edge");
        assert!(body.is_empty());
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_empty() {
        let fm = Frontmatter::parse("title: Only title");
        assert_eq!(fm.title, "Only title");
        assert_eq!(fm.subtitle, "");
        assert!(fm.tags.is_empty());
        assert!(!fm.draft);
    }

    #[test]
    fn test_lines_without_colon_and_unknown_keys_are_skipped() {
        let fm = Frontmatter::parse("just some words\nauthor: Nobody\ntitle: Kept");
        assert_eq!(fm.title, "Kept");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let fm = Frontmatter::parse("title: First\ntitle: Second");
        assert_eq!(fm.title, "Second");
    }

    #[test]
    fn test_value_splits_on_first_colon_only() {
        let fm = Frontmatter::parse("canonical_url: https://example.com:8080/x");
        assert_eq!(fm.canonical_url, "https://example.com:8080/x");
    }

    #[test]
    fn test_draft_is_case_sensitive() {
        assert!(!Frontmatter::parse("draft: True").draft);
        assert!(!Frontmatter::parse("draft: yes").draft);
        assert!(Frontmatter::parse("draft: \"true\"").draft);
    }

    #[test]
    fn test_only_one_quote_layer_is_stripped() {
        let fm = Frontmatter::parse("title: \"'nested'\"");
        assert_eq!(fm.title, "'nested'");

        let fm = Frontmatter::parse("title: \"unbalanced");
        assert_eq!(fm.title, "\"unbalanced");
    }

    #[test]
    fn test_tags_drop_empty_entries() {
        let fm = Frontmatter::parse("tags: [a, , 'b',\"\" ,c]");
        assert_eq!(fm.tags, vec!["a", "b", "c"]);

        let fm = Frontmatter::parse("tags: solo, pair");
        assert_eq!(fm.tags, vec!["solo", "pair"]);

        let fm = Frontmatter::parse("tags: []");
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_nested_mappings_lose_structure_silently() {
        let fm = Frontmatter::parse("author:\n  name: Someone\ntitle: Still parsed");
        assert_eq!(fm.title, "Still parsed");
    }
}
