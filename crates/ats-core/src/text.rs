use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

/// Common English function words dropped during tokenization.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "you",
        "your", "have", "had", "this", "they", "we", "our", "us", "can", "could", "would",
        "should", "may", "might", "must",
    ]
    .into_iter()
    .collect()
});

/// Lowercase and split on any non-alphanumeric character, dropping short
/// tokens and stop words. Order-preserving.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Collapse whitespace runs to single spaces and trim. Input is NFKC
/// normalized first; text pulled out of PDFs regularly carries fullwidth
/// codepoints and ligatures.
pub fn clean_text(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Order-preserving dedup: first occurrence wins, entries are trimmed and
/// blanks dropped. Applying it twice is a no-op.
pub fn remove_duplicates(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        let trimmed = item.trim();
        if !trimmed.is_empty() && seen.insert(trimmed.to_string()) {
            result.push(trimmed.to_string());
        }
    }
    result
}

/// Whitespace-separated words that start with an ASCII digit.
pub fn extract_numbers(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// Four-digit tokens in the 1900..=2030 range, after stripping surrounding
/// punctuation.
pub fn extract_years(text: &str) -> Vec<i32> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c| "().,;:".contains(c)))
        .filter(|word| word.len() == 4)
        .filter_map(|word| word.parse::<i32>().ok())
        .filter(|year| (1900..=2030).contains(year))
        .collect()
}

/// Split on sentence terminators, discarding fragments of five characters or
/// fewer after trimming.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    text.replace(['!', '?'], ".")
        .split('.')
        .map(str::trim)
        .filter(|sentence| sentence.len() > 5)
        .map(str::to_string)
        .collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive substring test against any of the needles.
pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    let text_lower = text.to_lowercase();
    needles
        .iter()
        .any(|needle| text_lower.contains(&needle.to_lowercase()))
}
