//! Module emission from node graphs.
//!
//! Wraps the encoded words in the persisted layout: a 16-byte header carrying
//! the word count and a CRC32 of the payload, then the words little-endian.

mod emitter;


pub use emitter::{emit, emit_with, emit_words};
