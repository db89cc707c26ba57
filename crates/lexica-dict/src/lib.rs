//! Dictionary shell over [`lexica_automaton`].
//!
//! Loads a newline-delimited word list (from a file path or in-memory text)
//! and owns the built [`Automaton`], exposing the membership, substring-match
//! and prefix queries to callers that do not want to deal with construction
//! themselves. The automaton is built once at load time; the dictionary is
//! immutable afterwards.

use std::path::Path;

use lexica_automaton::{Automaton, AutomatonError};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// The word-list file could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// The word list was read but the automaton could not be built.
    #[error("failed to build automaton: {0}")]
    Build(#[from] AutomatonError),
}

/// A dictionary backed by an Aho-Corasick automaton.
#[derive(Debug)]
pub struct Dictionary {
    automaton: Automaton,
}

impl Dictionary {
    /// Load a dictionary from a newline-delimited word-list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_word_list(&text)
    }

    /// Build a dictionary from newline-delimited text.
    ///
    /// Lines are trimmed; blank lines are skipped, so trailing newlines and
    /// CRLF line endings do not end up as empty dictionary entries.
    pub fn from_word_list(text: &str) -> Result<Self, DictError> {
        let words = text.lines().map(str::trim).filter(|line| !line.is_empty());
        Ok(Self {
            automaton: Automaton::new(words)?,
        })
    }

    /// Build a dictionary from an explicit word sequence.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            automaton: Automaton::new(words)?,
        })
    }

    /// Check whether `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.automaton.contains(word)
    }

    /// Find every dictionary word occurring as a substring of `input`,
    /// repeats included, in scan-position order.
    pub fn find_matches(&self, input: &str) -> Vec<String> {
        self.automaton.find_matches(input)
    }

    /// List every dictionary word starting with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.automaton.words_with_prefix(prefix)
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.automaton.word_count()
    }

    /// Access the underlying automaton.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}
