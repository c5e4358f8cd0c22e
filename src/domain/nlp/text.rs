//! Small text helpers shared by the extractors.

use crate::domain::foundation::ExtractionFault;

/// Lower-cases the whole input once; every keyword match runs on this form.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// True when any of the needles occurs as a plain substring.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Finds `needle` (already lower-case) in `haystack` ignoring case and
/// returns the byte span it covers in the original `haystack`.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    'starts: for (start, _) in haystack.char_indices() {
        let mut wanted = needle.chars().peekable();
        for (offset, ch) in haystack[start..].char_indices() {
            for lowered in ch.to_lowercase() {
                if wanted.next() != Some(lowered) {
                    continue 'starts;
                }
            }
            if wanted.peek().is_none() {
                return Some((start, start + offset + ch.len_utf8()));
            }
        }
    }
    None
}

/// Removes punctuation other than apostrophes and hyphens, collapsing
/// the remaining whitespace.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '\'' || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a whole count such as the `6` in "in 6 months".
pub fn parse_count(raw: &str) -> Result<u32, ExtractionFault> {
    raw.parse::<u32>()
        .map_err(|e| ExtractionFault::invalid_number(raw, e))
}

/// Parses a positive amount, ignoring thousands separators.
pub fn parse_amount(raw: &str) -> Result<f64, ExtractionFault> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|e| ExtractionFault::invalid_number(raw, e))?;
    if !value.is_finite() {
        return Err(ExtractionFault::invalid_number(raw, "value is not finite"));
    }
    Ok(value)
}
