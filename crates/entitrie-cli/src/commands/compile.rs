use std::fs;
use std::path::PathBuf;

use entitrie_compiler::{BranchForm, emit_words};

use super::trie_loader::{encode_graph, load_graph};

pub struct CompileArgs {
    pub graph_path: PathBuf,
    pub output: Option<PathBuf>,
    pub form: Option<BranchForm>,
}

pub fn run(args: CompileArgs) {
    let graph = match load_graph(&args.graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let words = match encode_graph(&graph, args.form) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let bytes = emit_words(&words);

    let Some(output) = &args.output else {
        println!(
            "{} nodes -> {} words ({} bytes)",
            graph.len(),
            words.len(),
            bytes.len()
        );
        return;
    };

    if let Err(e) = fs::write(output, &bytes) {
        eprintln!("error: failed to write '{}': {}", output.display(), e);
        std::process::exit(1);
    }
    tracing::info!(path = %output.display(), bytes = bytes.len(), "wrote module");
}
