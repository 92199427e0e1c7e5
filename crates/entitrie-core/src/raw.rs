//! JSON interchange form of a node graph.
//!
//! ```json
//! { "root": 0,
//!   "nodes": [
//!     { "children": { "a": 1 } },
//!     { "postfix": "mp", "value": "&", "children": { ";": 2 } },
//!     { "value": "&" } ] }
//! ```
//!
//! Node references are indices into `nodes`, so shared and cyclic graphs
//! round-trip without duplication.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Node, NodeGraph, NodeId};

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("graph has no nodes")]
    Empty,
    #[error("root {root} is out of range ({count} nodes)")]
    InvalidRoot { root: usize, count: usize },
    #[error("node {node}: child {key:?} refers to missing node {target}")]
    DanglingRef {
        node: usize,
        key: String,
        target: usize,
    },
    #[error("node {node}: child key {key:?} must be a single UTF-16 code unit")]
    InvalidKey { node: usize, key: String },
    #[error("node {node}: value {value:?} must be 1 or 2 UTF-16 code units")]
    InvalidValue { node: usize, value: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGraph {
    #[serde(default)]
    pub root: usize,
    pub nodes: Vec<RawNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, usize>,
}

impl RawGraph {
    pub fn parse(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate references and build the arena.
    pub fn into_graph(self) -> Result<NodeGraph, GraphError> {
        let count = self.nodes.len();
        if count == 0 {
            return Err(GraphError::Empty);
        }
        if self.root >= count {
            return Err(GraphError::InvalidRoot {
                root: self.root,
                count,
            });
        }

        let mut nodes = Vec::with_capacity(count);
        for (idx, raw) in self.nodes.into_iter().enumerate() {
            if let Some(value) = &raw.value {
                let units = value.encode_utf16().count();
                if !(1..=2).contains(&units) {
                    return Err(GraphError::InvalidValue {
                        node: idx,
                        value: value.clone(),
                    });
                }
            }

            let mut children = BTreeMap::new();
            for (key, target) in raw.children {
                let mut units = key.encode_utf16();
                let (Some(unit), None) = (units.next(), units.next()) else {
                    return Err(GraphError::InvalidKey { node: idx, key });
                };
                if target >= count {
                    return Err(GraphError::DanglingRef {
                        node: idx,
                        key,
                        target,
                    });
                }
                children.insert(unit, NodeId::from_index(target));
            }

            nodes.push(Node {
                value: raw.value,
                postfix: raw.postfix,
                children,
            });
        }

        Ok(NodeGraph::from_parts(nodes, NodeId::from_index(self.root)))
    }
}

impl NodeGraph {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        RawGraph::parse(json)?.into_graph()
    }

    pub fn to_raw(&self) -> RawGraph {
        let nodes = self
            .iter()
            .map(|(_, node)| RawNode {
                value: node.value.clone(),
                postfix: node.postfix.clone(),
                children: node
                    .children
                    .iter()
                    .map(|(&key, &child)| (String::from_utf16_lossy(&[key]), child.index()))
                    .collect(),
            })
            .collect();

        RawGraph {
            root: self.root().index(),
            nodes,
        }
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(&self.to_raw())?)
    }
}
