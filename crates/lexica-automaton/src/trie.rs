// Trie construction: inserts dictionary words as root-anchored paths.

use crate::AutomatonError;
use crate::node::{Node, NodeId, ROOT};

/// Insert every word into the arena, creating nodes on demand.
///
/// Words sharing a prefix share the corresponding path; the node at each
/// word's last symbol is marked terminal. Duplicate words are naturally
/// deduplicated (same path, flag already set). Empty words are rejected:
/// the only node they could mark is the root itself.
///
/// First-level children have their failure link preset to the root at
/// creation, since the longest proper suffix of a single-symbol path is
/// always the empty path.
///
/// Returns the number of distinct words inserted.
pub(crate) fn insert_words<I, S>(nodes: &mut Vec<Node>, words: I) -> Result<usize, AutomatonError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut distinct = 0;
    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(AutomatonError::EmptyWord);
        }
        let mut curr = ROOT;
        for symbol in word.chars() {
            curr = match nodes[curr].child(symbol) {
                Some(child) => child,
                None => add_child(nodes, curr, symbol),
            };
        }
        if !nodes[curr].terminal {
            nodes[curr].terminal = true;
            distinct += 1;
        }
    }
    Ok(distinct)
}

/// Allocate a child of `parent` for `symbol` and wire it into the arena.
fn add_child(nodes: &mut Vec<Node>, parent: NodeId, symbol: char) -> NodeId {
    let mut full_path = nodes[parent].full_path.clone();
    full_path.push(symbol);
    let mut node = Node::new(symbol, full_path, parent);
    if parent == ROOT {
        node.failure = Some(ROOT);
    }
    let id = nodes.len();
    nodes.push(node);
    nodes[parent].children.insert(symbol, id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> Vec<Node> {
        let mut nodes = vec![Node::root()];
        insert_words(&mut nodes, words).unwrap();
        nodes
    }

    fn walk(nodes: &[Node], path: &str) -> NodeId {
        let mut curr = ROOT;
        for symbol in path.chars() {
            curr = nodes[curr].child(symbol).unwrap();
        }
        curr
    }

    #[test]
    fn single_word_builds_a_chain() {
        let nodes = build(&["cat"]);
        assert_eq!(nodes.len(), 4); // root + c + a + t
        let t = walk(&nodes, "cat");
        assert!(nodes[t].terminal);
        assert_eq!(nodes[t].full_path, "cat");
        assert!(!nodes[walk(&nodes, "ca")].terminal);
    }

    #[test]
    fn common_prefixes_share_nodes() {
        let nodes = build(&["car", "cat"]);
        // root + c + a + r + t
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[walk(&nodes, "car")].parent, nodes[walk(&nodes, "cat")].parent);
    }

    #[test]
    fn duplicate_words_are_idempotent() {
        let nodes = build(&["march", "march"]);
        assert_eq!(nodes.len(), "march".len() + 1);
        assert_eq!(nodes.iter().filter(|n| n.terminal).count(), 1);
    }

    #[test]
    fn distinct_count_ignores_duplicates() {
        let mut nodes = vec![Node::root()];
        let count = insert_words(&mut nodes, ["a", "ab", "a"]).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn nested_word_marks_inner_node() {
        let nodes = build(&["ant", "an"]);
        assert!(nodes[walk(&nodes, "an")].terminal);
        assert!(nodes[walk(&nodes, "ant")].terminal);
    }

    #[test]
    fn first_level_children_fail_to_root() {
        let nodes = build(&["ab"]);
        assert_eq!(nodes[walk(&nodes, "a")].failure, Some(ROOT));
        assert!(nodes[walk(&nodes, "ab")].failure.is_none()); // not yet linked
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut nodes = vec![Node::root()];
        let err = insert_words(&mut nodes, [""]).unwrap_err();
        assert!(matches!(err, AutomatonError::EmptyWord));
    }
}
