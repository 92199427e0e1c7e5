pub mod compile;
pub mod dump;
pub mod resolve;
pub mod trie_loader;
