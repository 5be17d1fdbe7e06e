//! Descriptive text statistics: counts, uniqueness and frequency tables.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Word tokens are maximal runs of alphanumeric/underscore characters,
    /// Unicode-aware. This is deliberately stricter than the whitespace
    /// split used for the word counts below.
    static ref WORD_RE: Regex = Regex::new(r"\b\w+\b").expect("valid word pattern");
}

/// Fixed-shape record of counts derived from a single piece of text.
///
/// Invariant: `alphabetic_chars + numeric_chars + special_chars` plus the
/// number of whitespace characters equals `total_chars`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStatistics {
    pub total_chars: u64,
    pub total_chars_no_spaces: u64,
    pub total_words: u64,
    pub total_sentences: u64,
    pub total_lines: u64,
    pub unique_words: u64,
    pub avg_word_length: f64,
    pub alphabetic_chars: u64,
    pub numeric_chars: u64,
    pub special_chars: u64,
}

/// Compute the full statistics record in a handful of passes over the text.
///
/// The empty string yields an all-zero record. Every other input produces
/// well-formed counts; there are no error conditions.
pub fn compute_statistics(text: &str) -> TextStatistics {
    if text.is_empty() {
        return TextStatistics::default();
    }

    let mut stats = TextStatistics {
        total_lines: text.split('\n').count() as u64,
        total_sentences: count_sentences(text),
        ..Default::default()
    };

    for c in text.chars() {
        stats.total_chars += 1;
        if c != ' ' {
            stats.total_chars_no_spaces += 1;
        }
        // Mutually exclusive classification; whitespace lands in no bucket.
        if c.is_alphabetic() {
            stats.alphabetic_chars += 1;
        } else if c.is_numeric() {
            stats.numeric_chars += 1;
        } else if !c.is_whitespace() {
            stats.special_chars += 1;
        }
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    stats.total_words = words.len() as u64;
    if !words.is_empty() {
        let total_len: u64 = words.iter().map(|w| w.chars().count() as u64).sum();
        stats.avg_word_length = total_len as f64 / words.len() as f64;
        // Raw tokens, no case folding. Frequency tables fold case; this
        // count intentionally does not (see DESIGN.md).
        let distinct: HashSet<&str> = words.iter().copied().collect();
        stats.unique_words = distinct.len() as u64;
    }

    stats
}

/// Sentences are the segments produced by splitting on maximal runs of
/// `.`, `!` and `?`. Text with a trailing terminator therefore counts a
/// final empty segment, and unterminated non-empty text counts as one.
fn count_sentences(text: &str) -> u64 {
    let mut segments = 1u64;
    let mut in_terminator = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_terminator {
                segments += 1;
                in_terminator = true;
            }
        } else {
            in_terminator = false;
        }
    }
    segments
}

/// Count `items`, preserving first-seen order for equal counts, and keep the
/// `top_k` most frequent. A stable "most common" selection.
fn top_counts<T: std::hash::Hash + Eq>(
    items: impl Iterator<Item = T>,
    top_k: usize,
) -> Vec<(T, u64)> {
    if top_k == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();
    for (idx, item) in items.enumerate() {
        match counts.entry(item) {
            Entry::Occupied(mut e) => e.get_mut().0 += 1,
            Entry::Vacant(e) => {
                e.insert((1, idx));
            }
        }
    }

    let mut ranked: Vec<(T, u64, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top_k);
    ranked.into_iter().map(|(item, count, _)| (item, count)).collect()
}

/// Top `top_k` case-folded alphabetic characters by occurrence count.
pub fn character_frequency(text: &str, top_k: usize) -> Vec<(char, u64)> {
    let chars = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase);
    top_counts(chars, top_k)
}

/// Top `top_k` case-folded word tokens by occurrence count.
pub fn word_frequency(text: &str, top_k: usize) -> Vec<(String, u64)> {
    let words = WORD_RE.find_iter(text).map(|m| m.as_str().to_lowercase());
    top_counts(words, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        let stats = compute_statistics("");
        assert_eq!(stats, TextStatistics::default());
        assert_eq!(stats.avg_word_length, 0.0);
    }

    #[test]
    fn test_basic_counts() {
        let stats = compute_statistics("Hello world! This is a test.");
        assert_eq!(stats.total_chars, 28);
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.total_lines, 1);
        assert_eq!(stats.unique_words, 6);
    }

    #[test]
    fn test_char_classification_invariant() {
        for text in ["Hello, world! 42", "αβγ 123 --", "no-whitespace-here", ""] {
            let stats = compute_statistics(text);
            let whitespace = text.chars().filter(|c| c.is_whitespace()).count() as u64;
            assert_eq!(
                stats.alphabetic_chars + stats.numeric_chars + stats.special_chars + whitespace,
                stats.total_chars,
                "invariant broken for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_classified_chars_bounded_by_total() {
        let stats = compute_statistics("a b1!");
        assert!(stats.alphabetic_chars + stats.numeric_chars + stats.special_chars <= stats.total_chars);
        // Equality iff no whitespace
        let dense = compute_statistics("ab1!");
        assert_eq!(
            dense.alphabetic_chars + dense.numeric_chars + dense.special_chars,
            dense.total_chars
        );
    }

    #[test]
    fn test_sentence_segments() {
        // No terminator: one segment.
        assert_eq!(compute_statistics("no terminator here").total_sentences, 1);
        // A run of terminators counts once; the trailing empty segment counts.
        assert_eq!(compute_statistics("One. Two! Three?").total_sentences, 4);
        assert_eq!(compute_statistics("Wait... what").total_sentences, 2);
    }

    #[test]
    fn test_avg_word_length_counts_chars_not_bytes() {
        let stats = compute_statistics("héllo héllo");
        assert_eq!(stats.total_words, 2);
        assert!((stats.avg_word_length - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_unique_words_are_case_sensitive() {
        // "The" and "the" stay distinct here even though word_frequency folds them.
        let text = "The the THE";
        assert_eq!(compute_statistics(text).unique_words, 3);
        assert_eq!(word_frequency(text, 10), vec![("the".to_string(), 3)]);
    }

    #[test]
    fn test_character_frequency_stable_ordering() {
        assert_eq!(character_frequency("aabbbcc", 2), vec![('b', 3), ('a', 2)]);
        // 'a' and 'c' tie at 2; 'a' was seen first.
        assert_eq!(
            character_frequency("aabbbcc", 3),
            vec![('b', 3), ('a', 2), ('c', 2)]
        );
    }

    #[test]
    fn test_character_frequency_folds_case_and_skips_non_letters() {
        assert_eq!(character_frequency("AaA 11 !?", 10), vec![('a', 3)]);
    }

    #[test]
    fn test_frequency_top_k_bounds() {
        assert!(character_frequency("abc", 0).is_empty());
        assert!(word_frequency("some words", 0).is_empty());
        // top_k beyond the distinct count returns everything.
        assert_eq!(character_frequency("ab", 100).len(), 2);
    }

    #[test]
    fn test_word_frequency_uses_word_boundaries() {
        // Punctuation splits tokens; "don't" tokenizes as "don" and "t".
        let freq = word_frequency("don't stop, don't", 10);
        assert_eq!(freq[0], ("don".to_string(), 2));
        assert!(freq.contains(&("t".to_string(), 2)));
        assert!(freq.contains(&("stop".to_string(), 1)));
    }

    #[test]
    fn test_frequency_is_idempotent() {
        let text = "the quick brown fox jumps over the lazy dog the end";
        assert_eq!(word_frequency(text, 5), word_frequency(text, 5));
        assert_eq!(character_frequency(text, 5), character_frequency(text, 5));
    }
}
