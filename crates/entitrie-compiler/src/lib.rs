//! Entity trie compiler.
//!
//! This crate turns a node graph into the flat word array the decoder walks:
//! - `encode` - word array construction, node deduplication, branch form selection
//! - `emit` - persisted module bytes (header, checksum, payload)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod encode;

#[cfg(test)]
pub mod test_utils;

pub use emit::{emit, emit_with, emit_words};
pub use encode::{
    BranchCost, BranchForm, BranchShape, EncodeError, MinWords, TrieEncoder, encode, encode_with,
};
