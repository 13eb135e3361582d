use crate::tokenizer::tokenize;
use anyhow::Result;
use std::collections::HashSet;
use std::io::BufRead;

/// Lower-cased stopword membership set, built once at startup and immutable
/// thereafter.
#[derive(Debug, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build the set from a stopword source: one or more words per line,
    /// separated by the same delimiters the tokenizer splits on.
    ///
    /// Every token is trimmed and lower-cased before insertion, empty
    /// tokens included; duplicates and stray delimiters are tolerated.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            for word in tokenize(&line) {
                words.insert(word.trim().to_lowercase());
            }
        }
        tracing::debug!(words = words.len(), "stopword set built");
        Ok(Self { words })
    }

    /// Membership test. `word` must already be lower-cased.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
