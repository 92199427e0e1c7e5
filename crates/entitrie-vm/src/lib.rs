//! Resumable entity decoder.
//!
//! This crate walks an encoded entity trie against live text. The caller
//! finds the `&` and feeds the decoder what follows, in as many fragments
//! as the text arrives in.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    DecoderBuilder, DecoderState, EntityDecoder, NoopTracer, PrintTracer, Progress, Tracer,
    decode_codepoint,
};
