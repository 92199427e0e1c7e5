//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Node, NodeGraph, NodeId};

impl NodeGraph {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "NodeGraph: node {id} not found \
                 (ids are only valid for the graph that issued them)"
            )
        })
    }

    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.len();
        self.nodes.get_mut(id.index()).unwrap_or_else(|| {
            panic!("NodeGraph: node {id} not found (graph has {len} nodes)")
        })
    }
}
