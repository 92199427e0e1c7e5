//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Node graph JSON file (positional).
pub fn graph_path_arg() -> Arg {
    Arg::new("graph_path")
        .value_name("GRAPH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Node graph JSON file (- for stdin)")
}

/// Compiled module or graph JSON (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Compiled trie module, or a .json graph to compile on the fly")
}

/// Entity text after the `&` (positional).
pub fn entity_text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .allow_hyphen_values(true)
        .help("Entity text following the '&'")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the compiled module to file")
}

/// Branch encoding (--form).
pub fn form_arg() -> Arg {
    Arg::new("form")
        .long("form")
        .value_name("FORM")
        .default_value("auto")
        .value_parser(["auto", "jump", "dict"])
        .help("Branch encoding: fewest words, or force jump tables / dictionaries")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Require a terminating semicolon (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Only accept named entities terminated by ';'")
}

/// Print the decoder trace (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Print every decoder step")
}
