//! Decode one entity span for debugging.

use std::path::PathBuf;

use entitrie_core::Colors;
use entitrie_vm::{EntityDecoder, PrintTracer, Progress};

use super::trie_loader::load_trie;

pub struct ResolveArgs {
    pub input_path: PathBuf,
    pub text: String,
    pub strict: bool,
    pub verbose: bool,
    pub color: bool,
}

pub fn run(args: ResolveArgs) {
    let words = match load_trie(&args.input_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Accept the text with or without its leading '&'.
    let text = args.text.strip_prefix('&').unwrap_or(&args.text);
    let colors = Colors::new(args.color);

    let mut emitted = String::new();
    let mut decoder = EntityDecoder::builder(&words)
        .tracer(PrintTracer::new(&words, colors))
        .build(|value: &str| emitted.push_str(value));

    let consumed = match decoder.write(text, 0, args.strict) {
        Progress::Consumed(n) => n,
        Progress::Incomplete => decoder.end(),
    };
    let tracer = decoder.into_tracer();

    if args.verbose {
        tracer.print();
        println!("{}---{}", colors.dim, colors.reset);
    }

    if consumed == 0 {
        println!("no match");
        std::process::exit(1);
    }

    println!(
        "{}{:?}{}  consumed {} of {:?}",
        colors.value,
        emitted,
        colors.reset,
        consumed,
        text
    );
}
