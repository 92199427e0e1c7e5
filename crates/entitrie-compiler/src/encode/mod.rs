//! Word array construction from a node graph.
//!
//! Nodes are laid out depth-first in child key order. Each node gets its
//! leading index before any of its children are encoded, so shared children
//! and back edges resolve through the cache instead of being emitted again.

mod cost;
mod encoder;
mod error;


pub use cost::{BranchCost, BranchForm, BranchShape, MinWords};
pub use encoder::{TrieEncoder, encode, encode_with};
pub use error::EncodeError;
