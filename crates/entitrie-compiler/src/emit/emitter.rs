//! Core emission logic.

use entitrie_bytecode::{HEADER_SIZE, Header};
use entitrie_core::NodeGraph;

use crate::encode::{BranchCost, EncodeError, MinWords, encode_with};

/// Encode a graph and emit module bytes.
pub fn emit(graph: &NodeGraph) -> Result<Vec<u8>, EncodeError> {
    emit_with(graph, MinWords)
}

pub fn emit_with(graph: &NodeGraph, cost: impl BranchCost) -> Result<Vec<u8>, EncodeError> {
    let words = encode_with(graph, cost)?;
    Ok(emit_words(&words))
}

/// Emit module bytes for an already encoded word array.
pub fn emit_words(words: &[u16]) -> Vec<u8> {
    let mut output = vec![0u8; HEADER_SIZE]; // Reserve header space
    output.reserve(words.len() * 2);
    for word in words {
        output.extend_from_slice(&word.to_le_bytes());
    }

    let header = Header {
        checksum: crc32fast::hash(&output[HEADER_SIZE..]),
        word_count: words.len() as u32,
        ..Default::default()
    };
    output[..HEADER_SIZE].copy_from_slice(&header.to_bytes());

    tracing::debug!(bytes = output.len(), "emitted module");
    output
}
