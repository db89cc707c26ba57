// The public automaton type: construction pipeline and query engine.

use std::collections::VecDeque;

use crate::AutomatonError;
use crate::node::{Node, NodeId, ROOT};
use crate::{links, trie};

/// An Aho-Corasick automaton built from a fixed dictionary of words.
///
/// Construction runs three passes in strict order: trie insertion, then
/// failure links, then suffix links. The finished automaton is immutable;
/// every query is a read-only traversal, so shared references can be used
/// concurrently without locking. Rebuilding with a different dictionary
/// means building a new automaton (see [`merged`](Self::merged)).
///
/// ```
/// use lexica_automaton::Automaton;
///
/// let automaton = Automaton::new(["cat", "at"]).unwrap();
/// assert!(automaton.contains("cat"));
/// assert_eq!(automaton.find_matches("scatter"), ["cat", "at"]);
/// ```
#[derive(Debug)]
pub struct Automaton {
    /// Node arena. The root is at index 0; all links are arena indices.
    nodes: Vec<Node>,
    /// Number of distinct dictionary words.
    word_count: usize,
}

impl Automaton {
    /// Build an automaton from a dictionary of words.
    ///
    /// Duplicate words are deduplicated; empty words are rejected with
    /// [`AutomatonError::EmptyWord`]. On error nothing is published: the
    /// caller never observes a partially linked structure.
    pub fn new<I, S>(words: I) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut nodes = vec![Node::root()];
        // The root represents the empty path; its failure link is itself.
        nodes[ROOT].failure = Some(ROOT);
        let word_count = trie::insert_words(&mut nodes, words)?;
        links::build_failure_links(&mut nodes);
        links::build_suffix_links(&mut nodes);
        Ok(Self { nodes, word_count })
    }

    /// Check whether `word` is in the dictionary, exactly.
    ///
    /// Walks child links only; the first missing symbol aborts the walk.
    /// Prefixes of dictionary words only count if independently inserted,
    /// and the empty string is never a member.
    pub fn contains(&self, word: &str) -> bool {
        let mut curr = ROOT;
        for symbol in word.chars() {
            match self.nodes[curr].child(symbol) {
                Some(child) => curr = child,
                None => return false,
            }
        }
        self.nodes[curr].terminal
    }

    /// Find every dictionary word occurring as a substring of `input`.
    ///
    /// A single state pointer consumes the input left to right, advancing
    /// into a matching child or following failure links on a mismatch; the
    /// state persists across symbols, so the input is scanned exactly once.
    /// After each step the current node is emitted if terminal, and the
    /// suffix-link chain is walked to surface every word ending at the same
    /// position. The chain is walked even from non-terminal states: a state
    /// need not be a word itself to have a word as its suffix.
    ///
    /// Matches are ordered by scan position; a word occurring at several
    /// positions is reported once per occurrence.
    pub fn find_matches(&self, input: &str) -> Vec<String> {
        let mut matches = Vec::new();
        let mut curr = ROOT;
        for symbol in input.chars() {
            curr = self.next_state(curr, symbol);
            if self.nodes[curr].terminal {
                matches.push(self.nodes[curr].full_path.clone());
            }
            let mut link = self.nodes[curr].suffix;
            while let Some(id) = link {
                if self.nodes[id].terminal {
                    matches.push(self.nodes[id].full_path.clone());
                }
                link = self.nodes[id].suffix;
            }
        }
        matches
    }

    /// Transition from `curr` on `symbol`: advance into a matching child,
    /// or follow failure links until one is found or the root is reached.
    fn next_state(&self, mut curr: NodeId, symbol: char) -> NodeId {
        loop {
            if let Some(child) = self.nodes[curr].child(symbol) {
                return child;
            }
            if curr == ROOT {
                return ROOT;
            }
            curr = self.nodes[curr].failure.unwrap_or(ROOT);
        }
    }

    /// List every dictionary word starting with `prefix`.
    ///
    /// Walks child links along the prefix (any miss yields an empty list),
    /// then traverses the subtree breadth-first collecting terminal paths,
    /// the prefix itself included if it is a word. The empty prefix lists
    /// the whole dictionary.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut curr = ROOT;
        for symbol in prefix.chars() {
            match self.nodes[curr].child(symbol) {
                Some(child) => curr = child,
                None => return Vec::new(),
            }
        }
        let mut result = Vec::new();
        let mut queue = VecDeque::from([curr]);
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            if node.terminal {
                result.push(node.full_path.clone());
            }
            queue.extend(node.children.values().copied());
        }
        result
    }

    /// List every word in the dictionary.
    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Build a new automaton over the union of this dictionary and
    /// `other`'s.
    ///
    /// The live automata are never mutated: a rebuild always produces a
    /// fresh instance, so concurrent readers of either input cannot observe
    /// a partially linked structure.
    pub fn merged(&self, other: &Automaton) -> Result<Automaton, AutomatonError> {
        let mut words = self.words();
        words.extend(other.words());
        Automaton::new(words)
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Total number of trie nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
