//! Human-readable trie dump for debugging.
//!
//! Walks every node reachable from the root and prints one line per node:
//!
//! ```text
//! 0  dict[2]  'A' -> 5  'b' -> 6
//! 5  value "a"
//! 6  jump[1]  'c' -> 5
//! ```

use std::collections::BTreeSet;
use std::fmt::Write as _;

use entitrie_core::Colors;

use crate::branch::{branch_targets, node_value};
use crate::flags::{BranchLayout, NodeWord};

pub fn dump(tree: &[u16], colors: Colors) -> String {
    let mut out = String::new();
    let c = &colors;
    let nodes = reachable_nodes(tree);
    let w = width_for_count(tree.len());

    writeln!(out, "{}[trie]{}", c.key, c.reset).unwrap();
    writeln!(out, "words = {}", tree.len()).unwrap();
    writeln!(out, "nodes = {}", nodes.len()).unwrap();
    out.push('\n');

    writeln!(out, "{}[nodes]{}", c.key, c.reset).unwrap();
    for idx in nodes {
        dump_node(&mut out, tree, idx, w, c);
    }

    out
}

/// Digits needed to print indices below `count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}

/// Leading indices of every node reachable from the root, ascending.
fn reachable_nodes(tree: &[u16]) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    let mut stack = vec![0];

    while let Some(idx) = stack.pop() {
        if idx >= tree.len() || !seen.insert(idx) {
            continue;
        }
        stack.extend(branch_targets(tree, idx).into_iter().map(|(_, target)| target));
    }

    seen
}

fn dump_node(out: &mut String, tree: &[u16], idx: usize, w: usize, c: &Colors) {
    let word = NodeWord(tree[idx]);
    write!(out, "{}{idx:0w$}{}", c.dim, c.reset).unwrap();

    if let Some(value) = node_value(tree, idx) {
        write!(out, "  value {}{:?}{}", c.value, value.to_string(), c.reset).unwrap();
    }

    let edges = branch_targets(tree, idx);
    match word.branches() {
        BranchLayout::None => {
            if !word.has_value() {
                out.push_str("  empty");
            }
        }
        BranchLayout::Single(_) => out.push_str("  next"),
        BranchLayout::JumpTable { len, .. } => write!(out, "  jump[{len}]").unwrap(),
        BranchLayout::Dictionary { len } => write!(out, "  dict[{len}]").unwrap(),
    }

    for (key, target) in edges {
        write!(
            out,
            "  {}{}{} -> {target:0w$}",
            c.key,
            format_key(key),
            c.reset
        )
        .unwrap();
    }

    out.push('\n');
}

fn format_key(key: u16) -> String {
    char::from_u32(u32::from(key))
        .map(|ch| format!("{ch:?}"))
        .unwrap_or_else(|| format!("U+{key:04X}"))
}
