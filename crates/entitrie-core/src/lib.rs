#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for entity trie compilation.
//!
//! Two layers:
//! - **Interchange layer** (`raw`): 1:1 serde mapping of the graph JSON that
//!   an external dictionary builder hands over
//! - **Arena layer** (`graph`): id-indexed nodes the compiler walks, with
//!   sharing and cycles expressed through [`NodeId`] references

mod colors;
mod graph;
mod invariants;
mod raw;


pub use colors::Colors;
pub use graph::{Node, NodeGraph, NodeId};
pub use raw::{GraphError, RawGraph, RawNode};
