//! Resumable decoder for a single entity occurrence.
//!
//! The caller strips the `&` and writes the text after it, possibly in
//! several fragments. Each write either completes the entity or reports
//! [`Progress::Incomplete`], keeping every accumulator for the next write.

use std::fmt;

use entitrie_bytecode::{NodeWord, branch_start, determine_branch, node_value};

use super::codepoint::decode_codepoint;
use super::trace::{NoopTracer, Tracer};

/// Numeric accumulation saturates here, one past the last scalar value.
const CODEPOINT_LIMIT: u32 = 0x11_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoderState {
    EntityStart,
    NumericStart,
    NumericDecimal,
    NumericHex,
    NamedEntity,
}

impl fmt::Display for DecoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EntityStart => "entity-start",
            Self::NumericStart => "numeric-start",
            Self::NumericDecimal => "numeric-decimal",
            Self::NumericHex => "numeric-hex",
            Self::NamedEntity => "named-entity",
        };
        f.write_str(name)
    }
}

/// Outcome of [`EntityDecoder::write`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The entity is finished. Holds the bytes it spans after the `&`,
    /// summed over every write. Zero means nothing was emitted.
    Consumed(usize),
    /// The text ran out mid-entity. Write more, or call [`EntityDecoder::end`].
    Incomplete,
}

impl Progress {
    pub fn consumed(self) -> Option<usize> {
        match self {
            Self::Consumed(n) => Some(n),
            Self::Incomplete => None,
        }
    }
}

/// Builder for [`EntityDecoder`].
pub struct DecoderBuilder<'t, T> {
    tree: &'t [u16],
    tracer: T,
    codepoints: fn(u32) -> String,
}

impl<'t> DecoderBuilder<'t, NoopTracer> {
    pub fn new(tree: &'t [u16]) -> Self {
        Self {
            tree,
            tracer: NoopTracer,
            codepoints: decode_codepoint,
        }
    }
}

impl<'t, T: Tracer> DecoderBuilder<'t, T> {
    /// Replace the numeric reference converter.
    pub fn codepoints(mut self, codepoints: fn(u32) -> String) -> Self {
        self.codepoints = codepoints;
        self
    }

    pub fn tracer<U: Tracer>(self, tracer: U) -> DecoderBuilder<'t, U> {
        DecoderBuilder {
            tree: self.tree,
            tracer,
            codepoints: self.codepoints,
        }
    }

    pub fn build<F: FnMut(&str)>(self, sink: F) -> EntityDecoder<'t, F, T> {
        EntityDecoder {
            tree: self.tree,
            sink,
            tracer: self.tracer,
            codepoints: self.codepoints,
            state: DecoderState::EntityStart,
            consumed: 0,
            codepoint: 0,
            digits: 0,
            node_idx: 0,
            result_idx: None,
            excess: 0,
        }
    }
}

/// Entity decoder over an encoded trie.
///
/// The trie must be well formed (compiler output or a validated module);
/// malformed indices panic. Decoded values go to `sink`.
pub struct EntityDecoder<'t, F, T = NoopTracer> {
    tree: &'t [u16],
    sink: F,
    tracer: T,
    codepoints: fn(u32) -> String,
    state: DecoderState,
    /// Bytes consumed for the current entity, across writes.
    consumed: usize,
    codepoint: u32,
    digits: usize,
    /// Trie position of the named walk.
    node_idx: usize,
    /// Node of the best match recorded so far.
    result_idx: Option<usize>,
    /// Bytes walked since `result_idx` was recorded.
    excess: usize,
}

impl<'t> EntityDecoder<'t, fn(&str)> {
    pub fn builder(tree: &'t [u16]) -> DecoderBuilder<'t, NoopTracer> {
        DecoderBuilder::new(tree)
    }
}

impl<'t, F: FnMut(&str)> EntityDecoder<'t, F> {
    pub fn new(tree: &'t [u16], sink: F) -> Self {
        DecoderBuilder::new(tree).build(sink)
    }
}

impl<'t, F: FnMut(&str), T: Tracer> EntityDecoder<'t, F, T> {
    /// Feed `text[offset..]` to the decoder.
    ///
    /// `strict` only records named matches whose last character is `;`.
    /// Numeric references are accepted either way.
    ///
    /// # Panics
    ///
    /// If `offset` is past the end of `text` or not on a char boundary.
    pub fn write(&mut self, text: &str, offset: usize, strict: bool) -> Progress {
        let mut input = &text[offset..];

        loop {
            match self.state {
                DecoderState::EntityStart => match input.strip_prefix('#') {
                    Some(rest) => {
                        self.consumed += 1;
                        input = rest;
                        self.enter(DecoderState::NumericStart);
                    }
                    None if input.is_empty() => return self.suspend(),
                    None => self.enter(DecoderState::NamedEntity),
                },
                DecoderState::NumericStart => match input.strip_prefix(['x', 'X']) {
                    Some(rest) => {
                        self.consumed += 1;
                        input = rest;
                        self.enter(DecoderState::NumericHex);
                    }
                    None if input.is_empty() => return self.suspend(),
                    None => self.enter(DecoderState::NumericDecimal),
                },
                DecoderState::NumericDecimal => return self.write_numeric(input, 10),
                DecoderState::NumericHex => return self.write_numeric(input, 16),
                DecoderState::NamedEntity => return self.write_named(input, strict),
            }
        }
    }

    /// Finish the entity when no more text will arrive.
    ///
    /// Flushes the best named match, or a numeric reference with at least
    /// one digit. Returns the consumed length, 0 when nothing was emitted.
    pub fn end(&mut self) -> usize {
        let progress = match self.state {
            DecoderState::NamedEntity => self.emit_named(),
            DecoderState::NumericDecimal | DecoderState::NumericHex => self.emit_numeric(),
            DecoderState::EntityStart | DecoderState::NumericStart => {
                self.reset();
                Progress::Consumed(0)
            }
        };
        progress.consumed().unwrap_or(0)
    }

    /// Return to [`DecoderState::EntityStart`] with every accumulator cleared.
    ///
    /// Finishing an entity resets implicitly.
    pub fn reset(&mut self) {
        self.state = DecoderState::EntityStart;
        self.consumed = 0;
        self.codepoint = 0;
        self.digits = 0;
        self.node_idx = 0;
        self.result_idx = None;
        self.excess = 0;
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    fn enter(&mut self, state: DecoderState) {
        self.state = state;
        self.tracer.trace_state(state);
    }

    fn suspend(&mut self) -> Progress {
        self.tracer.trace_suspend(self.consumed);
        Progress::Incomplete
    }

    fn write_numeric(&mut self, input: &str, radix: u32) -> Progress {
        for ch in input.chars() {
            let Some(digit) = ch.to_digit(radix) else {
                if ch == ';' && self.digits > 0 {
                    self.consumed += 1;
                }
                return self.emit_numeric();
            };

            self.codepoint = self
                .codepoint
                .saturating_mul(radix)
                .saturating_add(digit)
                .min(CODEPOINT_LIMIT);
            self.digits += 1;
            self.consumed += 1;
            self.tracer.trace_digit(ch, self.codepoint);
        }

        self.suspend()
    }

    fn write_named(&mut self, input: &str, strict: bool) -> Progress {
        let tree = self.tree;

        for ch in input.chars() {
            let node = self.node_idx;
            let target = u16::try_from(u32::from(ch))
                .ok()
                .and_then(|unit| determine_branch(tree, tree[node], branch_start(tree, node), unit));
            self.tracer.trace_branch(node, ch, target);

            let Some(next) = target else {
                return self.emit_named();
            };

            self.node_idx = next;
            self.consumed += ch.len_utf8();
            self.excess += ch.len_utf8();

            let word = NodeWord(tree[next]);
            if word.has_value() {
                let recorded = !strict || ch == ';';
                self.tracer.trace_value(next, recorded);
                if recorded {
                    self.result_idx = Some(next);
                    self.excess = 0;
                }
            }

            // Nothing can extend the match past a node without edges.
            if word.is_terminal() {
                return self.emit_named();
            }
        }

        self.suspend()
    }

    fn emit_named(&mut self) -> Progress {
        let Some(value) = self.result_idx.and_then(|idx| node_value(self.tree, idx)) else {
            self.reset();
            return Progress::Consumed(0);
        };
        let consumed = self.consumed - self.excess;
        self.emit(&value.to_string(), consumed)
    }

    fn emit_numeric(&mut self) -> Progress {
        if self.digits == 0 {
            self.reset();
            return Progress::Consumed(0);
        }
        let value = (self.codepoints)(self.codepoint);
        self.emit(&value, self.consumed)
    }

    fn emit(&mut self, value: &str, consumed: usize) -> Progress {
        (self.sink)(value);
        self.tracer.trace_emit(value, consumed);
        tracing::trace!(value, consumed, "emitted entity");
        self.reset();
        Progress::Consumed(consumed)
    }
}
