//! Skill Extractor — finds which known skill terms occur in a text blob.
//!
//! Matching is plain case-insensitive substring containment: no word boundaries,
//! no stemming, no fuzzy matching. "java" is found inside "javascript".

use std::collections::BTreeSet;

use crate::analysis::text::{decode_utf8_dropping_invalid, split_lines};

/// Returns the sorted, deduplicated subset of `known_skills` that occur in `text`.
///
/// `known_skills` are expected to be normalized already (see [`load_skill_list`]).
/// Empty terms are skipped since they would match any text.
pub fn extract_skills<S: AsRef<str>>(text: &str, known_skills: &[S]) -> Vec<String> {
    if text.is_empty() || known_skills.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();

    known_skills
        .iter()
        .map(|skill| -> &str { skill.as_ref() })
        .filter(|skill| !skill.is_empty() && text_lower.contains(*skill))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Parses a JD skills file: one skill per line, trimmed and lower-cased,
/// blank lines dropped. File order and duplicates are preserved.
pub fn load_skill_list(content: &str) -> Vec<String> {
    split_lines(content)
        .into_iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Decodes raw JD file bytes, silently dropping invalid UTF-8 rather than failing.
pub fn load_skill_list_bytes(bytes: &[u8]) -> Vec<String> {
    load_skill_list(&decode_utf8_dropping_invalid(bytes))
}
