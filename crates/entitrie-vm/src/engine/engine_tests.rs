//! Decoder tests against tries built by the compiler.

use entitrie_compiler::encode;
use entitrie_core::{Colors, Node, NodeGraph};
use indoc::indoc;

use super::{DecoderState, EntityDecoder, PrintTracer, Progress};

const ENTITIES: &[(&str, &str)] = &[
    ("AMP", "&"),
    ("AMP;", "&"),
    ("Afr;", "\u{1D504}"),
    ("amp", "&"),
    ("amp;", "&"),
    ("copy;", "©"),
    ("ffilig;", "ﬃ"),
    ("fjlig;", "fj"),
    ("gt;", ">"),
    ("lt", "<"),
    ("lt;", "<"),
    ("ngE;", "\u{2267}\u{338}"),
    ("not", "¬"),
    ("not;", "¬"),
    ("notin;", "∉"),
];

fn graph_of(entries: &[(&str, &str)]) -> NodeGraph {
    let mut graph = NodeGraph::new();
    for (name, value) in entries {
        graph.insert(name, value);
    }
    graph
}

fn html() -> Vec<u16> {
    encode(&graph_of(ENTITIES)).unwrap()
}

/// Write `chunks` in order, then `end` if the entity is still open.
fn decode(tree: &[u16], chunks: &[&str], strict: bool) -> (String, usize) {
    let mut out = String::new();
    let mut decoder = EntityDecoder::new(tree, |value: &str| out.push_str(value));

    let mut consumed = None;
    for chunk in chunks {
        if let Progress::Consumed(n) = decoder.write(chunk, 0, strict) {
            consumed = Some(n);
            break;
        }
    }
    let consumed = consumed.unwrap_or_else(|| decoder.end());
    drop(decoder);

    (out, consumed)
}

fn decode_one(tree: &[u16], text: &str, strict: bool) -> (String, usize) {
    decode(tree, &[text], strict)
}

#[test]
fn named_with_semicolon() {
    let tree = html();
    assert_eq!(decode_one(&tree, "amp;", false), ("&".into(), 4));
    assert_eq!(decode_one(&tree, "amp; tail", false), ("&".into(), 4));
    assert_eq!(decode_one(&tree, "amp;", true), ("&".into(), 4));
}

#[test]
fn legacy_name_without_semicolon() {
    let tree = html();
    assert_eq!(decode_one(&tree, "amp tail", false), ("&".into(), 3));
    assert_eq!(decode_one(&tree, "ampere", false), ("&".into(), 3));
    assert_eq!(decode_one(&tree, "amp tail", true), (String::new(), 0));
}

#[test]
fn longest_match_wins() {
    let tree = html();
    assert_eq!(decode_one(&tree, "notin;", false), ("∉".into(), 6));
    assert_eq!(decode_one(&tree, "not;", false), ("¬".into(), 4));
    assert_eq!(decode_one(&tree, "notit", false), ("¬".into(), 3));
    assert_eq!(decode_one(&tree, "noti", false), ("¬".into(), 3));
}

#[test]
fn longer_name_beats_legacy_prefix() {
    let tree = encode(&graph_of(&[("amp", "&"), ("amplitude", "A")])).unwrap();
    assert_eq!(decode_one(&tree, "amplitude;", false), ("A".into(), 9));
    assert_eq!(decode_one(&tree, "amp ", false), ("&".into(), 3));
    assert_eq!(decode_one(&tree, "amplit ", false), ("&".into(), 3));
}

#[test]
fn strict_mode_drops_partial_legacy_match() {
    let tree = html();
    assert_eq!(decode_one(&tree, "notit", true), (String::new(), 0));
    assert_eq!(decode_one(&tree, "notin;", true), ("∉".into(), 6));
}

#[test]
fn unknown_name() {
    let tree = html();
    assert_eq!(decode_one(&tree, "zz;", false), (String::new(), 0));
    assert_eq!(decode_one(&tree, "am;", false), (String::new(), 0));
}

#[test]
fn value_layouts() {
    let tree = html();
    assert_eq!(decode_one(&tree, "copy;", false), ("©".into(), 5));
    assert_eq!(decode_one(&tree, "ffilig;", false), ("ﬃ".into(), 7));
    assert_eq!(decode_one(&tree, "fjlig;", false), ("fj".into(), 6));
    assert_eq!(
        decode_one(&tree, "ngE;", false),
        ("\u{2267}\u{338}".into(), 4)
    );
    assert_eq!(decode_one(&tree, "Afr;", false), ("\u{1D504}".into(), 4));
}

#[test]
fn leaf_finishes_without_more_input() {
    let tree = html();
    let mut out = String::new();
    let mut decoder = EntityDecoder::new(&tree, |value: &str| out.push_str(value));

    assert_eq!(decoder.write("gt;", 0, false), Progress::Consumed(3));
    assert_eq!(decoder.state(), DecoderState::EntityStart);
    drop(decoder);
    assert_eq!(out, ">");
}

/// Every two-way split of `text` decodes like the whole text.
fn assert_splits(tree: &[u16], text: &str, strict: bool, expected: (String, usize)) {
    for split in (0..=text.len()).filter(|&i| text.is_char_boundary(i)) {
        let (head, tail) = text.split_at(split);
        assert_eq!(
            decode(tree, &[head, tail], strict),
            expected,
            "{head}|{tail} strict={strict}"
        );
    }

    let chars: Vec<&str> = text.split_inclusive(|_: char| true).collect();
    assert_eq!(
        decode(tree, &chars, strict),
        expected,
        "{text} by char strict={strict}"
    );
}

#[test]
fn every_split_point() {
    let tree = html();

    for (name, value) in ENTITIES {
        let expected = (value.to_string(), name.len());
        assert_splits(&tree, name, false, expected.clone());
        if name.ends_with(';') {
            assert_splits(&tree, name, true, expected);
        } else {
            assert_splits(&tree, name, true, (String::new(), 0));
        }
    }
}

#[test]
fn split_points_in_trailing_text() {
    let tree = html();

    assert_splits(&tree, "notit", false, ("¬".into(), 3));
    assert_splits(&tree, "notit", true, (String::new(), 0));
    assert_splits(&tree, "amp tail", false, ("&".into(), 3));
    assert_splits(&tree, "amp tail", true, (String::new(), 0));
    assert_splits(&tree, "amp; tail", true, ("&".into(), 4));
    assert_splits(&tree, "#38 tail", true, ("&".into(), 3));
}

#[test]
fn numeric_split_points() {
    let tree = html();
    let text = "#x26;";

    for split in 0..=text.len() {
        let (head, tail) = text.split_at(split);
        assert_eq!(decode(&tree, &[head, tail], false), ("&".into(), 5));
    }
    assert_eq!(
        decode(&tree, &["", "#", "x", "2", "6", ";"], false),
        ("&".into(), 5)
    );
}

#[test]
fn incomplete_then_end() {
    let tree = html();
    let mut out = String::new();
    let mut decoder = EntityDecoder::new(&tree, |value: &str| out.push_str(value));

    assert_eq!(decoder.write("no", 0, false), Progress::Incomplete);
    assert_eq!(decoder.write("ti", 0, false), Progress::Incomplete);
    assert_eq!(decoder.end(), 3);
    assert_eq!(decoder.end(), 0);
    drop(decoder);
    assert_eq!(out, "¬");
}

#[test]
fn end_without_match() {
    let tree = html();
    assert_eq!(decode(&tree, &["am"], false), (String::new(), 0));
    assert_eq!(decode(&tree, &[""], false), (String::new(), 0));
    assert_eq!(decode(&tree, &["#"], false), (String::new(), 0));
    assert_eq!(decode(&tree, &["#x"], false), (String::new(), 0));
}

#[test]
fn numeric_decimal() {
    let tree = html();
    assert_eq!(decode_one(&tree, "#38;", false), ("&".into(), 4));
    assert_eq!(decode_one(&tree, "#38 tail", false), ("&".into(), 3));
    assert_eq!(decode_one(&tree, "#0038;", false), ("&".into(), 6));
    assert_eq!(decode(&tree, &["#3", "8"], false), ("&".into(), 3));
}

#[test]
fn numeric_hex() {
    let tree = html();
    assert_eq!(decode_one(&tree, "#x26;", false), ("&".into(), 5));
    assert_eq!(decode_one(&tree, "#X26;", false), ("&".into(), 5));
    assert_eq!(decode_one(&tree, "#x1d504;", false), ("\u{1D504}".into(), 8));
    assert_eq!(decode_one(&tree, "#xE9g", false), ("é".into(), 4));
}

#[test]
fn numeric_without_digits() {
    let tree = html();
    assert_eq!(decode_one(&tree, "#;", false), (String::new(), 0));
    assert_eq!(decode_one(&tree, "#xg;", false), (String::new(), 0));
    assert_eq!(decode_one(&tree, "#a", false), (String::new(), 0));
}

#[test]
fn numeric_replacements() {
    let tree = html();
    assert_eq!(decode_one(&tree, "#0;", false), ("\u{FFFD}".into(), 3));
    assert_eq!(decode_one(&tree, "#128;", false), ("€".into(), 5));
    assert_eq!(decode_one(&tree, "#xD800;", false), ("\u{FFFD}".into(), 7));
    assert_eq!(
        decode_one(&tree, "#99999999999;", false),
        ("\u{FFFD}".into(), 13)
    );
}

#[test]
fn numeric_ignores_strict_mode() {
    let tree = html();
    assert_eq!(decode_one(&tree, "#38 tail", true), ("&".into(), 3));
}

#[test]
fn custom_codepoint_converter() {
    let tree = html();
    let mut out = String::new();
    let mut decoder = EntityDecoder::builder(&tree)
        .codepoints(|codepoint| format!("<{codepoint}>"))
        .build(|value: &str| out.push_str(value));

    assert_eq!(decoder.write("#65;", 0, false), Progress::Consumed(4));
    drop(decoder);
    assert_eq!(out, "<65>");
}

#[test]
fn reuse_after_reset() {
    let tree = html();
    let mut out = String::new();
    let mut decoder = EntityDecoder::new(&tree, |value: &str| out.push_str(value));

    assert_eq!(decoder.write("am", 0, false), Progress::Incomplete);
    decoder.reset();
    assert_eq!(decoder.write("lt;", 0, false), Progress::Consumed(3));
    assert_eq!(decoder.write("#62;", 0, false), Progress::Consumed(4));
    assert_eq!(decoder.write("amp;", 0, false), Progress::Consumed(4));
    drop(decoder);
    assert_eq!(out, "<>&");
}

#[test]
fn write_from_offset() {
    let tree = html();
    let mut out = String::new();
    let mut decoder = EntityDecoder::new(&tree, |value: &str| out.push_str(value));

    assert_eq!(decoder.write("a &lt; b", 3, false), Progress::Consumed(3));
    assert_eq!(decoder.write("é&gt;", 3, false), Progress::Consumed(3));
    assert_eq!(decoder.write("&no", 1, false), Progress::Incomplete);
    assert_eq!(decoder.write("xt", 1, false), Progress::Incomplete);
    assert_eq!(decoder.write("t", 1, false), Progress::Incomplete);
    assert_eq!(decoder.end(), 3);
    drop(decoder);
    assert_eq!(out, "<>¬");
}

#[test]
#[should_panic]
fn offset_past_end_panics() {
    let tree = html();
    let mut decoder = EntityDecoder::new(&tree, |_: &str| {});
    decoder.write("amp;", 99, false);
}

#[test]
#[should_panic]
fn offset_inside_char_panics() {
    let tree = html();
    let mut decoder = EntityDecoder::new(&tree, |_: &str| {});
    decoder.write("éamp;", 1, false);
}

#[test]
fn astral_input_never_matches() {
    let tree = html();
    assert_eq!(decode_one(&tree, "am\u{1F600}", false), (String::new(), 0));
    assert_eq!(decode_one(&tree, "amp\u{1F600}", false), ("&".into(), 3));
}

#[test]
fn multibyte_excess_is_bytes() {
    let tree = encode(&graph_of(&[("a", "1"), ("aé", "3"), ("aéé;", "2")])).unwrap();

    assert_eq!(decode_one(&tree, "aéé;", false), ("2".into(), 6));
    assert_eq!(decode_one(&tree, "aéx", false), ("3".into(), 3));
    assert_eq!(decode_one(&tree, "aééx", true), (String::new(), 0));
}

#[test]
fn single_branch_leaf() {
    let tree = encode(&graph_of(&[("a", "a")])).unwrap();
    assert_eq!(tree, vec![0x61, 0x4061]);
    assert_eq!(decode_one(&tree, "a", true), (String::new(), 0));
    assert_eq!(decode_one(&tree, "a", false), ("a".into(), 1));
}

#[test]
fn recursive_trie() {
    let mut graph = NodeGraph::new();
    let leaf = graph.add_node(Node::new().with_value("a"));
    let root = graph.root();
    graph.link(root, '0', root);
    graph.link(root, 'a', leaf);
    let tree = encode(&graph).unwrap();

    assert_eq!(decode_one(&tree, "a", false), ("a".into(), 1));
    assert_eq!(decode_one(&tree, "000a", false), ("a".into(), 4));
    assert_eq!(decode(&tree, &["00", "0", "a"], false), ("a".into(), 4));
    assert_eq!(decode_one(&tree, "00b", false), (String::new(), 0));
}

#[test]
fn shared_node() {
    let mut graph = NodeGraph::new();
    let shared = graph.add_node(Node::new().with_value("a"));
    let c = graph.add_node(Node::new());
    let root = graph.root();
    graph.link(root, 'A', shared);
    graph.link(root, 'b', c);
    graph.link(c, 'c', shared);
    let tree = encode(&graph).unwrap();

    assert_eq!(decode_one(&tree, "A", false), ("a".into(), 1));
    assert_eq!(decode_one(&tree, "bc", false), ("a".into(), 2));
    assert_eq!(decode_one(&tree, "b", false), (String::new(), 0));
}

#[test]
fn postfix_node() {
    let mut graph = NodeGraph::new();
    let semi = graph.add_node(Node::new().with_value("&"));
    let amp = graph.add_node(Node::new().with_postfix("mp").with_value("&"));
    graph.link(amp, ';', semi);
    graph.link(graph.root(), 'a', amp);
    let tree = encode(&graph).unwrap();

    assert_eq!(decode_one(&tree, "amp;", false), ("&".into(), 4));
    assert_eq!(decode_one(&tree, "amp", false), ("&".into(), 3));
    assert_eq!(decode_one(&tree, "am", false), (String::new(), 0));
}

#[test]
fn every_entry_of_json_graph() {
    let json = indoc! {r#"
        {
          "nodes": [
            { "children": { "a": 1, "n": 3, "x": 5 } },
            { "postfix": "mp", "value": "&", "children": { ";": 2 } },
            { "value": "&" },
            { "postfix": "ot", "value": "¬", "children": { ";": 4, "i": 6 } },
            { "value": "¬" },
            { "children": { "x": 5, ";": 4 } },
            { "postfix": "n", "children": { ";": 7 } },
            { "value": "∉" }
          ]
        }
    "#};
    let graph = NodeGraph::from_json(json).unwrap();
    let tree = encode(&graph).unwrap();

    let entries = graph.entries();
    assert_eq!(entries.len(), 6);
    for (name, value) in entries {
        assert_splits(&tree, &name, false, (value.clone(), name.len()));
        if name.ends_with(';') {
            assert_splits(&tree, &name, true, (value, name.len()));
        }
    }

    // The cycle on 'x' accepts any run before the shared ';' leaf.
    assert_eq!(decode_one(&tree, "xxxx;", true), ("¬".into(), 5));
    assert_eq!(decode_one(&tree, "xx", false), (String::new(), 0));
}

#[test]
fn trace_named_entity() {
    let tree = encode(&graph_of(&[("amp", "&"), ("amp;", "&")])).unwrap();
    let mut decoder = EntityDecoder::builder(&tree)
        .tracer(PrintTracer::new(&tree, Colors::OFF))
        .build(|_: &str| {});

    assert_eq!(decoder.write("am", 0, true), Progress::Incomplete);
    assert_eq!(decoder.write("p;", 0, true), Progress::Consumed(4));

    let trace = decoder.into_tracer().lines().join("\n");
    insta::assert_snapshot!(trace, @r#"
    named-entity
      0  'a' -> 1
      1  'm' -> 2
    suspend  consumed 2
      2  'p' -> 3
      3  value "&"  (skipped)
      3  ';' -> 5
      5  value "&"
    emit "&"  consumed 4
    "#);
}

#[test]
fn trace_numeric_entity() {
    let tree = html();
    let mut decoder = EntityDecoder::builder(&tree)
        .tracer(PrintTracer::new(&tree, Colors::OFF))
        .build(|_: &str| {});

    assert_eq!(decoder.write("#x26;", 0, false), Progress::Consumed(5));

    let trace = decoder.tracer().lines().join("\n");
    insta::assert_snapshot!(trace, @r#"
    numeric-start
    numeric-hex
      digit '2'  codepoint 0x2
      digit '6'  codepoint 0x26
    emit "&"  consumed 5
    "#);
}

#[test]
fn trace_miss() {
    let tree = encode(&graph_of(&[("lt", "<")])).unwrap();
    let mut decoder = EntityDecoder::builder(&tree)
        .tracer(PrintTracer::new(&tree, Colors::OFF))
        .build(|_: &str| {});

    assert_eq!(decoder.write("lx", 0, false), Progress::Consumed(0));

    let trace = decoder.tracer().lines().join("\n");
    insta::assert_snapshot!(trace, @r#"
    named-entity
      0  'l' -> 1
      1  'x' -> miss
    "#);
}
