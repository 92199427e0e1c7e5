//! Tracing infrastructure for debugging decoder execution.
//!
//! The decoder is generic over its tracer. With `NoopTracer` every hook is an
//! `#[inline(always)]` empty function, so the calls and their arguments
//! compile away. `PrintTracer` collects one line per event for the CLI.

use entitrie_bytecode::{node_value, width_for_count};
use entitrie_core::Colors;

use super::decoder::DecoderState;

/// Hooks called at fixed points while decoding.
///
/// - `trace_state` - when the decoder enters a state
/// - `trace_branch` - after resolving one character against a node
/// - `trace_value` - when a step lands on a node carrying a value
/// - `trace_digit` - after accumulating one numeric digit
/// - `trace_emit` - after the sink received a value
/// - `trace_suspend` - when a write runs out of input
pub trait Tracer {
    fn trace_state(&mut self, state: DecoderState);

    /// `target` is `None` when `ch` has no edge out of `node`.
    fn trace_branch(&mut self, node: usize, ch: char, target: Option<usize>);

    /// `recorded` is false when strict mode skipped the match.
    fn trace_value(&mut self, node: usize, recorded: bool);

    fn trace_digit(&mut self, digit: char, codepoint: u32);

    fn trace_emit(&mut self, value: &str, consumed: usize);

    fn trace_suspend(&mut self, consumed: usize);
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_state(&mut self, _state: DecoderState) {}

    #[inline(always)]
    fn trace_branch(&mut self, _node: usize, _ch: char, _target: Option<usize>) {}

    #[inline(always)]
    fn trace_value(&mut self, _node: usize, _recorded: bool) {}

    #[inline(always)]
    fn trace_digit(&mut self, _digit: char, _codepoint: u32) {}

    #[inline(always)]
    fn trace_emit(&mut self, _value: &str, _consumed: usize) {}

    #[inline(always)]
    fn trace_suspend(&mut self, _consumed: usize) {}
}

/// Tracer that collects a readable execution log.
pub struct PrintTracer<'t> {
    /// Trie being walked, for value lookups.
    tree: &'t [u16],
    /// Collected trace lines.
    lines: Vec<String>,
    /// Index width, matching the dump output.
    width: usize,
    colors: Colors,
}

impl<'t> PrintTracer<'t> {
    pub fn new(tree: &'t [u16], colors: Colors) -> Self {
        Self {
            tree,
            lines: Vec::new(),
            width: width_for_count(tree.len()),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn index(&self, idx: usize) -> String {
        let c = self.colors;
        format!("{}{:0w$}{}", c.dim, idx, c.reset, w = self.width)
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_state(&mut self, state: DecoderState) {
        let c = self.colors;
        self.lines.push(format!("{}{state}{}", c.key, c.reset));
    }

    fn trace_branch(&mut self, node: usize, ch: char, target: Option<usize>) {
        let target = match target {
            Some(idx) => self.index(idx),
            None => "miss".to_string(),
        };
        let line = format!("  {}  {ch:?} -> {target}", self.index(node));
        self.lines.push(line);
    }

    fn trace_value(&mut self, node: usize, recorded: bool) {
        let c = self.colors;
        let value = node_value(self.tree, node)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let suffix = if recorded { "" } else { "  (skipped)" };
        let line = format!(
            "  {}  value {}{value:?}{}{suffix}",
            self.index(node),
            c.value,
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_digit(&mut self, digit: char, codepoint: u32) {
        self.lines
            .push(format!("  digit {digit:?}  codepoint {codepoint:#X}"));
    }

    fn trace_emit(&mut self, value: &str, consumed: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "emit {}{value:?}{}  consumed {consumed}",
            c.value, c.reset
        ));
    }

    fn trace_suspend(&mut self, consumed: usize) {
        self.lines.push(format!("suspend  consumed {consumed}"));
    }
}
