//! Encoded entity trie format.
//!
//! This crate contains:
//! - Word layout definitions (`flags`: value/branch/jump fields)
//! - The branch resolver shared by the compiler and the decoder
//! - The persisted file format (`Header`, `Module`)
//! - A human-readable dump for debugging

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod branch;
pub mod dump;
pub mod flags;
pub mod header;
pub mod module;


pub use branch::{NodeValue, branch_start, branch_targets, determine_branch, node_value};
pub use dump::{dump, width_for_count};
pub use flags::{
    BRANCH_LENGTH, BRANCH_SHIFT, BranchLayout, JUMP_TABLE, MAX_BRANCHES, MAX_INLINE_VALUE,
    MAX_JUMP_KEY, NodeWord, VALUE_LENGTH, VALUE_SHIFT, ValueLayout,
};
pub use header::{HEADER_SIZE, Header, MAGIC, VERSION};
pub use module::{Module, ModuleError};
