//! Branch resolution over an encoded word array.
//!
//! All functions take the raw `&[u16]` and trust it to be well formed:
//! indices past the end of the array panic.

use std::fmt;

use crate::flags::{BranchLayout, NodeWord, ValueLayout};

/// Index of the first branch word of the node at `node_idx`, past its value.
#[inline]
pub fn branch_start(tree: &[u16], node_idx: usize) -> usize {
    node_idx + 1 + NodeWord(tree[node_idx]).value_layout().trailing_words()
}

/// Resolve `ch` against the node whose leading word is `current`.
///
/// `branch_idx` is [`branch_start`] of that node. Returns the leading index
/// of the child, or `None` when `ch` has no edge.
///
/// - implicit single child: the child is the word at `branch_idx`
/// - jump table: O(1) slot lookup, slots hold `target + 1`
/// - dictionary: binary search over the sorted keys, targets stored verbatim
#[inline]
pub fn determine_branch(tree: &[u16], current: u16, branch_idx: usize, ch: u16) -> Option<usize> {
    match NodeWord(current).branches() {
        BranchLayout::None => None,
        BranchLayout::Single(key) => (key == ch).then_some(branch_idx),
        BranchLayout::JumpTable { min, len } => {
            let offset = usize::from(ch.checked_sub(min)?);
            if offset >= len {
                return None;
            }
            usize::from(tree[branch_idx + offset]).checked_sub(1)
        }
        BranchLayout::Dictionary { len } => {
            let keys = &tree[branch_idx..branch_idx + len];
            let pos = keys.binary_search(&ch).ok()?;
            Some(usize::from(tree[branch_idx + len + pos]))
        }
    }
}

/// Every `(key, target)` edge of the node at `node_idx`, in key order.
pub fn branch_targets(tree: &[u16], node_idx: usize) -> Vec<(u16, usize)> {
    let start = branch_start(tree, node_idx);
    match NodeWord(tree[node_idx]).branches() {
        BranchLayout::None => Vec::new(),
        BranchLayout::Single(key) => vec![(key, start)],
        BranchLayout::JumpTable { min, len } => tree[start..start + len]
            .iter()
            .enumerate()
            .filter(|&(_, &slot)| slot != 0)
            .map(|(i, &slot)| (min + i as u16, usize::from(slot) - 1))
            .collect(),
        BranchLayout::Dictionary { len } => (0..len)
            .map(|i| (tree[start + i], usize::from(tree[start + len + i])))
            .collect(),
    }
}

/// Replacement text stored on a node, as 1-2 UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeValue {
    units: [u16; 2],
    len: u8,
}

impl NodeValue {
    pub fn single(unit: u16) -> Self {
        Self {
            units: [unit, 0],
            len: 1,
        }
    }

    pub fn pair(first: u16, second: u16) -> Self {
        Self {
            units: [first, second],
            len: 2,
        }
    }

    pub fn units(&self) -> &[u16] {
        &self.units[..usize::from(self.len)]
    }
}

/// Lone surrogates render as U+FFFD.
impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.units().iter().copied()) {
            fmt::Write::write_char(f, ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

/// Value of the node at `node_idx`, if it carries one.
pub fn node_value(tree: &[u16], node_idx: usize) -> Option<NodeValue> {
    let word = NodeWord(tree[node_idx]);
    match word.value_layout() {
        ValueLayout::None => None,
        ValueLayout::Inline => Some(NodeValue::single(word.inline_value())),
        ValueLayout::Single => Some(NodeValue::single(tree[node_idx + 1])),
        ValueLayout::Pair => Some(NodeValue::pair(tree[node_idx + 1], tree[node_idx + 2])),
    }
}
