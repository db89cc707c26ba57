// Arena-backed trie node.

use hashbrown::HashMap;

/// Index of a node within the automaton's arena.
///
/// `parent`, `failure` and `suffix` are stored as plain arena indices rather
/// than references, so the ownership graph stays a proper tree even though
/// the link graph carries back-edges.
pub(crate) type NodeId = usize;

/// Arena index of the root node. The root is always allocated first.
pub(crate) const ROOT: NodeId = 0;

/// Sentinel symbol stored on the root, which represents the empty path.
pub(crate) const ROOT_SYMBOL: char = '\0';

/// One trie node.
///
/// Every path from the root to a node spells a prefix of some dictionary
/// word; nodes flagged `terminal` spell a complete word.
#[derive(Debug)]
pub(crate) struct Node {
    /// The symbol on the edge from the parent; `ROOT_SYMBOL` at the root.
    pub symbol: char,
    /// Concatenation of symbols from the root to this node, cached at
    /// creation so matches are reported without walking parents.
    pub full_path: String,
    /// Parent index; `None` only at the root.
    pub parent: Option<NodeId>,
    /// Child index per symbol; at most one child per symbol.
    pub children: HashMap<char, NodeId>,
    /// True iff the path to this node equals a dictionary word. Set once,
    /// never cleared; re-inserting a word is a no-op.
    pub terminal: bool,
    /// Node spelling the longest proper suffix of this path that is itself
    /// a trie path. Populated for every node once link construction has
    /// run; the root links to itself.
    pub failure: Option<NodeId>,
    /// Nearest terminal node along the failure chain, if any exists.
    pub suffix: Option<NodeId>,
}

impl Node {
    /// Create the root node (empty path, no parent).
    pub fn root() -> Self {
        Self {
            symbol: ROOT_SYMBOL,
            full_path: String::new(),
            parent: None,
            children: HashMap::new(),
            terminal: false,
            failure: None,
            suffix: None,
        }
    }

    /// Create a non-root node reached from `parent` via `symbol`.
    pub fn new(symbol: char, full_path: String, parent: NodeId) -> Self {
        Self {
            symbol,
            full_path,
            parent: Some(parent),
            children: HashMap::new(),
            terminal: false,
            failure: None,
            suffix: None,
        }
    }

    /// Look up the child reached via `symbol`.
    pub fn child(&self, symbol: char) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }
}
