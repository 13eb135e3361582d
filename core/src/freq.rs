use crate::stopwords::StopwordSet;
use crate::tokenizer::{is_number_like, tokenize};
use anyhow::Result;
use std::collections::HashMap;
use std::io::BufRead;

/// Frequency table: normalized word to occurrence count.
pub type WordCounts = HashMap<String, u64>;

/// Consume `input` line by line and count surviving tokens.
///
/// A token survives when it is non-empty, does not look numeric (only
/// checked when `filter_numbers` is set, and always against the raw token),
/// and its lower-cased form is not a stopword. Counts are keyed by the
/// lower-cased form. The whole stream is consumed before returning.
pub fn count_words(
    input: impl BufRead,
    stops: &StopwordSet,
    filter_numbers: bool,
) -> Result<WordCounts> {
    let mut counts = WordCounts::new();
    for line in input.lines() {
        let line = line?;
        for word in tokenize(&line) {
            if word.is_empty() {
                continue;
            }
            if filter_numbers && is_number_like(word) {
                continue;
            }
            let lowered = word.to_lowercase();
            if stops.contains(&lowered) {
                continue;
            }
            *counts.entry(lowered).or_insert(0) += 1;
        }
    }
    tracing::debug!(distinct = counts.len(), "input stream counted");
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_stops() -> StopwordSet {
        StopwordSet::default()
    }

    #[test]
    fn counts_case_insensitively() {
        let counts = count_words(Cursor::new("Bar bar BAR baz\n"), &no_stops(), true).unwrap();
        assert_eq!(counts.get("bar"), Some(&3));
        assert_eq!(counts.get("baz"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn drops_stopwords_after_lowercasing() {
        let stops = StopwordSet::from_reader(Cursor::new("gray\n")).unwrap();
        let counts = count_words(Cursor::new("Gray gray slate\n"), &stops, true).unwrap();
        assert_eq!(counts.get("slate"), Some(&1));
        assert!(!counts.contains_key("gray"));
    }

    #[test]
    fn numeric_filter_is_a_prefix_test_on_the_raw_token() {
        let counts = count_words(Cursor::new("3D model 123abc\n"), &no_stops(), true).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("model"), Some(&1));
    }

    #[test]
    fn numeric_filter_can_be_disabled() {
        let counts = count_words(Cursor::new("3D model\n"), &no_stops(), false).unwrap();
        assert_eq!(counts.get("3d"), Some(&1));
        assert_eq!(counts.get("model"), Some(&1));
    }

    #[test]
    fn empty_tokens_are_never_counted() {
        // Delimiter runs produce empty tokens; none may reach the table,
        // even with an empty stopword set.
        let counts = count_words(Cursor::new("foo  bar,, baz::\n"), &no_stops(), true).unwrap();
        assert!(!counts.contains_key(""));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn empty_stream_yields_empty_table() {
        let counts = count_words(Cursor::new(""), &no_stops(), true).unwrap();
        assert!(counts.is_empty());
    }
}
