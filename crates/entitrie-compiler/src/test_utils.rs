//! Test utilities shared by the encoder and emitter tests.

use entitrie_bytecode::{branch_start, determine_branch, node_value};
use entitrie_core::NodeGraph;

/// A slice of the HTML entity table covering every value layout and
/// branch form: legacy names without `;`, astral and two-unit values,
/// wide and narrow fan-out.
pub const ENTITIES: &[(&str, &str)] = &[
    ("AElig", "Æ"),
    ("AElig;", "Æ"),
    ("AMP", "&"),
    ("AMP;", "&"),
    ("Aacute", "Á"),
    ("Aacute;", "Á"),
    ("Abreve;", "Ă"),
    ("Acirc", "Â"),
    ("Acirc;", "Â"),
    ("Acy;", "А"),
    ("Afr;", "\u{1D504}"),
    ("aacute;", "á"),
    ("ac;", "∾"),
    ("acE;", "\u{223E}\u{333}"),
    ("acd;", "∿"),
    ("amp", "&"),
    ("amp;", "&"),
    ("copy", "©"),
    ("copy;", "©"),
    ("ffilig;", "ﬃ"),
    ("fjlig;", "fj"),
    ("gt", ">"),
    ("gt;", ">"),
    ("lt", "<"),
    ("lt;", "<"),
    ("nbsp", "\u{A0}"),
    ("nbsp;", "\u{A0}"),
    ("ngE;", "\u{2267}\u{338}"),
    ("not", "¬"),
    ("not;", "¬"),
    ("notin;", "∉"),
    ("notinE;", "\u{22F9}\u{338}"),
    ("quot", "\""),
    ("quot;", "\""),
    ("zwj;", "\u{200D}"),
];

pub fn graph_of(entries: &[(&str, &str)]) -> NodeGraph {
    let mut graph = NodeGraph::new();
    for (name, value) in entries {
        graph.insert(name, value);
    }
    graph
}

/// Follow `name` from the root and read the value of the node it ends on.
pub fn lookup(tree: &[u16], name: &str) -> Option<String> {
    let mut idx = 0;
    for ch in name.chars() {
        let unit = u16::try_from(u32::from(ch)).ok()?;
        idx = determine_branch(tree, tree[idx], branch_start(tree, idx), unit)?;
    }
    node_value(tree, idx).map(|value| value.to_string())
}
