//! Arena-backed node graph.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`]. Two
//! parents holding the same id share one child, and an id pointing back to
//! an ancestor forms a cycle. Identity is the id, never the node contents.

use std::collections::BTreeMap;
use std::fmt;

/// Index of a node inside the [`NodeGraph`] that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One vertex of the entity dictionary.
///
/// Children are keyed by UTF-16 code unit. The `BTreeMap` keeps them in
/// ascending order, which the compiler relies on for deterministic output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// Decoded replacement text, 1-2 UTF-16 code units.
    pub value: Option<String>,
    /// Collapsed chain of single-child ancestors, matched before this node.
    pub postfix: Option<String>,
    pub children: BTreeMap<u16, NodeId>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Entity dictionary as an arena of nodes with a designated root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeGraph {
    pub(crate) nodes: Vec<Node>,
    root: NodeId,
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeGraph {
    /// Create a graph holding a single empty root.
    pub fn new() -> Self {
        Self::with_root(Node::new())
    }

    pub fn with_root(root: Node) -> Self {
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root.index() < nodes.len());
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Borrow a node. Panics if `id` was not issued by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.ensure_node_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    /// Add (or replace) the edge `parent --ch--> child`.
    ///
    /// Keys are single UTF-16 code units, so `ch` must be in the BMP.
    pub fn link(&mut self, parent: NodeId, ch: char, child: NodeId) {
        let code = u32::from(ch);
        assert!(code <= 0xFFFF, "branch key {ch:?} is outside the BMP");
        self.ensure_node(child);
        self.node_mut(parent).children.insert(code as u16, child);
    }

    /// Walk `name` from the root, creating missing nodes, and set the value
    /// of the node it ends on.
    ///
    /// Follows existing edges only; postfixes are not split.
    pub fn insert(&mut self, name: &str, value: &str) -> NodeId {
        let mut current = self.root;
        for ch in name.chars() {
            let code = u32::from(ch);
            assert!(code <= 0xFFFF, "entity name character {ch:?} is outside the BMP");
            let existing = self.node(current).children.get(&(code as u16)).copied();
            current = match existing {
                Some(next) => next,
                None => {
                    let next = self.add_node(Node::new());
                    self.link(current, ch, next);
                    next
                }
            };
        }
        self.node_mut(current).value = Some(value.to_owned());
        current
    }

    /// Every `(name, value)` pair reachable from the root.
    ///
    /// A name is the edge characters along the path, each followed by the
    /// target's postfix. Paths never revisit a node already on the path, so
    /// cyclic graphs yield a finite list. The root's own value is skipped
    /// because no entity name is empty.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut on_path = vec![false; self.nodes.len()];
        let mut name = String::new();
        self.collect_entries(self.root, &mut name, &mut on_path, &mut out);
        out
    }

    fn collect_entries(
        &self,
        id: NodeId,
        name: &mut String,
        on_path: &mut [bool],
        out: &mut Vec<(String, String)>,
    ) {
        if on_path[id.index()] {
            return;
        }
        on_path[id.index()] = true;

        let mark = name.len();
        let node = self.node(id);
        if let Some(postfix) = &node.postfix {
            name.push_str(postfix);
        }
        if id != self.root
            && let Some(value) = &node.value
        {
            out.push((name.clone(), value.clone()));
        }

        for (&key, &child) in &node.children {
            let Some(ch) = char::from_u32(u32::from(key)) else {
                continue;
            };
            let len = name.len();
            name.push(ch);
            self.collect_entries(child, name, on_path, out);
            name.truncate(len);
        }

        name.truncate(mark);
        on_path[id.index()] = false;
    }
}
