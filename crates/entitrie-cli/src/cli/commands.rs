//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("entitrie")
        .about("Compile, inspect and query HTML/XML entity tries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(dump_command())
        .subcommand(resolve_command())
}

/// Encode a node graph into a trie module.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile a node graph into a trie module")
        .after_help(
            r#"EXAMPLES:
  entitrie compile entities.json                  # print a summary
  entitrie compile entities.json -o html.etri     # write the module
  entitrie compile entities.json --form dict      # dictionaries only"#,
        )
        .arg(graph_path_arg())
        .arg(output_file_arg())
        .arg(form_arg())
}

/// Show the nodes of a compiled trie.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the nodes of a compiled trie")
        .after_help(
            r#"EXAMPLES:
  entitrie dump html.etri             # compiled module
  entitrie dump entities.json         # compile on the fly"#,
        )
        .arg(input_path_arg())
        .arg(color_arg())
}

/// Decode one entity against a trie.
pub fn resolve_command() -> Command {
    Command::new("resolve")
        .about("Decode one entity against a trie")
        .after_help(
            r#"EXAMPLES:
  entitrie resolve html.etri 'amp;'            # named reference
  entitrie resolve html.etri 'notit' -v        # legacy prefix, with trace
  entitrie resolve html.etri '#x26;'           # numeric reference
  entitrie resolve html.etri 'amp ' --strict   # no match without ';'"#,
        )
        .arg(input_path_arg())
        .arg(entity_text_arg())
        .arg(strict_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}
