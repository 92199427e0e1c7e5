use std::path::PathBuf;

use entitrie_bytecode::dump;
use entitrie_core::Colors;

use super::trie_loader::load_trie;

pub struct DumpArgs {
    pub input_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let words = match load_trie(&args.input_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let colors = Colors::new(args.color);
    print!("{}", dump(&words, colors));
}
