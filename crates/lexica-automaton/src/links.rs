// Failure- and suffix-link construction over a finished trie.
//
// Both passes are breadth-first with an explicit queue: a node's failure
// link can only be computed once its parent's is final, and the queue
// guarantees parents are processed before children. Suffix links in turn
// depend on completed failure links, so the passes must run in order.

use std::collections::VecDeque;

use crate::node::{Node, ROOT};

/// Compute the failure link of every node that does not have one yet.
///
/// The root (linked to itself) and the first-level children (linked to the
/// root) are already wired before this pass runs. For every other node the
/// link answers: if matching breaks at this node's symbol, what is the
/// longest suffix of the path so far that is still a live trie prefix?
pub(crate) fn build_failure_links(nodes: &mut [Node]) {
    let mut queue = VecDeque::from([ROOT]);
    while let Some(curr) = queue.pop_front() {
        if nodes[curr].failure.is_none() {
            let symbol = nodes[curr].symbol;
            let parent = nodes[curr].parent.unwrap_or(ROOT);
            let mut candidate = nodes[parent].failure.unwrap_or(ROOT);
            while nodes[candidate].child(symbol).is_none() && candidate != ROOT {
                candidate = nodes[candidate].failure.unwrap_or(ROOT);
            }
            nodes[curr].failure = match nodes[candidate].child(symbol) {
                Some(target) => Some(target),
                None => Some(ROOT),
            };
        }
        queue.extend(nodes[curr].children.values().copied());
    }
}

/// Compute the suffix link of every node of depth two or more.
///
/// The link points to the nearest terminal node reachable by following the
/// failure chain, letting the matcher surface dictionary words that are
/// suffixes of a longer recognized path ("ebullient" also contains "bull").
/// Depth-one nodes are skipped: a single symbol has no proper suffix other
/// than the empty path, and the root is never terminal.
pub(crate) fn build_suffix_links(nodes: &mut [Node]) {
    let mut queue = VecDeque::from([ROOT]);
    while let Some(curr) = queue.pop_front() {
        let depth_two_or_more = nodes[curr]
            .parent
            .is_some_and(|p| nodes[p].parent.is_some());
        if depth_two_or_more {
            let mut candidate = nodes[curr].failure.unwrap_or(ROOT);
            while !nodes[candidate].terminal && candidate != ROOT {
                candidate = nodes[candidate].failure.unwrap_or(ROOT);
            }
            if nodes[candidate].terminal {
                nodes[curr].suffix = Some(candidate);
            }
        }
        queue.extend(nodes[curr].children.values().copied());
    }
}
