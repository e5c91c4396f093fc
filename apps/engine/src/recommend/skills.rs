//! Skill-tag parsing for raw course skill text.

use crate::text::{self, SKILL_TAG_STOPWORDS};

/// Delimiters tried in fixed priority order; the first one present in the
/// text wins. Comma deliberately outranks semicolon — "Python, SQL; Data
/// Analysis" splits on the comma, leaving "SQL; Data Analysis" as one tag.
/// Preserved as-is for compatibility with the ingested catalogs.
const DELIMITERS: [char; 4] = [',', ';', '|', '\n'];

const MAX_TAGS: usize = 10;

/// Parses a raw delimited skill field into cleaned, title-cased tags.
pub fn parse_skill_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let pieces: Vec<&str> = match DELIMITERS.iter().find(|d| raw.contains(**d)) {
        Some(delimiter) => raw.split(*delimiter).collect(),
        None => raw.split_whitespace().collect(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|tag| tag.len() > 2 && !SKILL_TAG_STOPWORDS.contains(&tag.to_lowercase().as_str()))
        .map(text::title_case)
        .take(MAX_TAGS)
        .collect()
}
