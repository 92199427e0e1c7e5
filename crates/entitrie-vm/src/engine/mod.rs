//! Entity decoding engine.
//!
//! The decoder resolves one entity occurrence at a time. Named references
//! walk the trie through the branch resolver; numeric references accumulate
//! digits and go through a code point converter.

mod codepoint;
mod decoder;
mod trace;

#[cfg(test)]
mod engine_tests;

pub use codepoint::decode_codepoint;
pub use decoder::{DecoderBuilder, DecoderState, EntityDecoder, Progress};
pub use trace::{NoopTracer, PrintTracer, Tracer};
