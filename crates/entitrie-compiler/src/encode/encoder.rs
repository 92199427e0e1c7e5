//! Core encoding logic.

use std::collections::{BTreeMap, HashMap};

use entitrie_bytecode::{BranchLayout, MAX_BRANCHES, MAX_INLINE_VALUE, MAX_JUMP_KEY, ValueLayout};
use entitrie_core::{Node, NodeGraph, NodeId};

use super::EncodeError;
use super::cost::{BranchCost, BranchForm, BranchShape, MinWords};

/// Encode a graph with the default [`MinWords`] branch cost.
pub fn encode(graph: &NodeGraph) -> Result<Vec<u16>, EncodeError> {
    encode_with(graph, MinWords)
}

pub fn encode_with(graph: &NodeGraph, cost: impl BranchCost) -> Result<Vec<u16>, EncodeError> {
    TrieEncoder::new(graph, cost).encode()
}

/// State for one encoding run.
///
/// The cache maps a node to its start index (its first postfix word, or its
/// leading word when it has no postfix). It lives only as long as the run.
pub struct TrieEncoder<'g, C> {
    graph: &'g NodeGraph,
    cost: C,
    words: Vec<u16>,
    cache: HashMap<NodeId, usize>,
}

impl<'g, C: BranchCost> TrieEncoder<'g, C> {
    pub fn new(graph: &'g NodeGraph, cost: C) -> Self {
        Self {
            graph,
            cost,
            words: Vec::new(),
            cache: HashMap::new(),
        }
    }

    pub fn encode(mut self) -> Result<Vec<u16>, EncodeError> {
        let root = self.graph.root();
        self.encode_node(root)?;

        tracing::debug!(
            words = self.words.len(),
            nodes = self.cache.len(),
            "encoded trie"
        );
        Ok(self.words)
    }

    /// Encode `id` unless it already has an index, and return its start.
    fn encode_node(&mut self, id: NodeId) -> Result<usize, EncodeError> {
        if let Some(&start) = self.cache.get(&id) {
            tracing::trace!(node = %id, start, "reusing encoded node");
            return Ok(start);
        }

        let graph = self.graph;
        let node = graph.get(id).ok_or(EncodeError::UnknownNode(id))?;
        let start = self.words.len();
        self.cache.insert(id, start);

        if let Some(postfix) = &node.postfix {
            for unit in postfix.encode_utf16() {
                if !(1..=MAX_JUMP_KEY).contains(&unit) {
                    return Err(EncodeError::PostfixCharOutOfRange { node: id, unit });
                }
                self.words.push(BranchLayout::Single(unit).to_word());
            }
        }

        let lead = self.words.len();
        self.words.push(0);
        self.encode_value(id, node, lead)?;
        self.encode_branches(id, &node.children, lead)?;

        Ok(start)
    }

    fn encode_value(&mut self, id: NodeId, node: &Node, lead: usize) -> Result<(), EncodeError> {
        let Some(value) = &node.value else {
            return Ok(());
        };

        // The root is never landed on, so its low bits always belong to branches.
        let inline_ok = node.is_leaf() && id != self.graph.root();

        let mut units = value.encode_utf16();
        match (units.next(), units.next(), units.next()) {
            (Some(unit), None, _) if inline_ok && unit <= MAX_INLINE_VALUE => {
                self.words[lead] = ValueLayout::Inline.to_word() | unit;
            }
            (Some(unit), None, _) => {
                self.words[lead] |= ValueLayout::Single.to_word();
                self.words.push(unit);
            }
            (Some(first), Some(second), None) => {
                self.words[lead] |= ValueLayout::Pair.to_word();
                self.words.extend([first, second]);
            }
            _ => {
                return Err(EncodeError::ValueLength {
                    node: id,
                    len: value.encode_utf16().count(),
                });
            }
        }

        Ok(())
    }

    fn encode_branches(
        &mut self,
        id: NodeId,
        children: &BTreeMap<u16, NodeId>,
        lead: usize,
    ) -> Result<(), EncodeError> {
        let Some(shape) = BranchShape::of(children) else {
            return Ok(());
        };
        if shape.count > MAX_BRANCHES {
            return Err(EncodeError::TooManyBranches {
                node: id,
                count: shape.count,
            });
        }

        // A fresh only child is laid out right here, so no pointer is needed.
        if shape.count == 1
            && (1..=MAX_JUMP_KEY).contains(&shape.min)
            && let Some(&child) = children.get(&shape.min)
            && !self.cache.contains_key(&child)
        {
            tracing::trace!(node = %id, key = shape.min, "implicit child");
            self.words[lead] |= BranchLayout::Single(shape.min).to_word();
            self.encode_node(child)?;
            return Ok(());
        }

        let form = match self.cost.select(&shape) {
            BranchForm::JumpTable if shape.fits_jump_table() => BranchForm::JumpTable,
            _ => BranchForm::Dictionary,
        };
        tracing::debug!(
            node = %id,
            ?form,
            count = shape.count,
            span = shape.span(),
            "encoding branches"
        );

        match form {
            BranchForm::JumpTable => self.encode_jump_table(children, &shape, lead),
            BranchForm::Dictionary => self.encode_dictionary(children, lead),
        }
    }

    fn encode_jump_table(
        &mut self,
        children: &BTreeMap<u16, NodeId>,
        shape: &BranchShape,
        lead: usize,
    ) -> Result<(), EncodeError> {
        let len = shape.span();
        self.words[lead] |= BranchLayout::JumpTable {
            min: shape.min,
            len,
        }
        .to_word();

        let base = self.words.len();
        self.words.resize(base + len, 0);

        for (&key, &child) in children {
            let target = self.encode_node(child)?;
            self.words[base + usize::from(key - shape.min)] = pointer(target + 1)?;
        }

        Ok(())
    }

    fn encode_dictionary(
        &mut self,
        children: &BTreeMap<u16, NodeId>,
        lead: usize,
    ) -> Result<(), EncodeError> {
        let len = children.len();
        self.words[lead] |= BranchLayout::Dictionary { len }.to_word();

        let base = self.words.len();
        self.words.extend(children.keys().copied());
        self.words.resize(base + len * 2, 0);

        for (i, &child) in children.values().enumerate() {
            let target = self.encode_node(child)?;
            self.words[base + len + i] = pointer(target)?;
        }

        Ok(())
    }
}

fn pointer(index: usize) -> Result<u16, EncodeError> {
    u16::try_from(index).map_err(|_| EncodeError::IndexOverflow(index))
}
