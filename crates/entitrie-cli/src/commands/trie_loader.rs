//! Input loading shared by the commands.
//!
//! Graphs are JSON. Anything else is read as a compiled module.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use entitrie_bytecode::{Module, ModuleError};
use entitrie_compiler::{BranchForm, EncodeError, encode, encode_with};
use entitrie_core::{GraphError, NodeGraph};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),

    #[error("cannot encode graph: {0}")]
    Encode(#[from] EncodeError),

    #[error("invalid module: {0}")]
    Module(#[from] ModuleError),
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<Vec<u8>, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read(path).map_err(read_err)
}

pub fn load_graph(path: &Path) -> Result<NodeGraph, LoadError> {
    let bytes = read_input(path)?;
    let json = String::from_utf8_lossy(&bytes);
    Ok(NodeGraph::from_json(&json)?)
}

/// `None` selects the fewest-words encoding.
pub fn encode_graph(graph: &NodeGraph, form: Option<BranchForm>) -> Result<Vec<u16>, EncodeError> {
    match form {
        Some(form) => encode_with(graph, form),
        None => encode(graph),
    }
}

/// Load trie words from a module, or compile a `.json` graph.
pub fn load_trie(path: &Path) -> Result<Vec<u16>, LoadError> {
    if is_graph(path) {
        let graph = load_graph(path)?;
        return Ok(encode(&graph)?);
    }

    let bytes = read_input(path)?;
    Ok(Module::from_bytes(&bytes)?.into_words())
}

fn is_graph(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
