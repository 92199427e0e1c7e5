use entitrie_bytecode::MAX_BRANCHES;
use entitrie_core::NodeId;

/// Field-width violations found while encoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    #[error("node {node}: {count} children exceed the branch limit of {MAX_BRANCHES}")]
    TooManyBranches { node: NodeId, count: usize },

    #[error("node {node}: postfix character U+{unit:04X} does not fit the 7-bit jump field")]
    PostfixCharOutOfRange { node: NodeId, unit: u16 },

    #[error("node {node}: value has {len} UTF-16 code units (expected 1 or 2)")]
    ValueLength { node: NodeId, len: usize },

    #[error("target index {0} does not fit in a 16-bit word")]
    IndexOverflow(usize),
}
