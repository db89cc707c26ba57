//! Aho-Corasick automaton for multi-pattern dictionary matching.
//!
//! Given a fixed dictionary of words, the automaton answers three kinds of
//! queries over the finished structure:
//!
//! - exact membership ([`Automaton::contains`])
//! - every dictionary word occurring as a substring of an input, including
//!   overlapping and nested occurrences ([`Automaton::find_matches`])
//! - every dictionary word extending a given prefix
//!   ([`Automaton::words_with_prefix`])
//!
//! # Architecture
//!
//! - `node` -- arena-backed trie node (internal)
//! - `trie` -- word insertion pass (internal)
//! - `links` -- breadth-first failure- and suffix-link construction (internal)
//! - [`automaton`] -- the public [`Automaton`] type and query engine
//!
//! Construction runs the three passes once, in order; all queries afterwards
//! are read-only, so a built automaton can be shared freely across threads.

mod links;
mod node;
mod trie;

pub mod automaton;

pub use automaton::Automaton;

/// Error type for automaton construction.
#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    /// A dictionary entry was the empty string. Accepting it would mark the
    /// root terminal and make every query treat the empty path as a word,
    /// so empty entries are rejected up front.
    #[error("invalid dictionary word: empty string")]
    EmptyWord,
}
