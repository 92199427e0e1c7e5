//! Loaded trie module.
//!
//! A [`Module`] owns the decoded word array of a persisted trie. Loading
//! validates the header and checksum once; afterwards the words are plain
//! immutable data and can be shared between any number of decoders.

use std::io;
use std::ops::Deref;
use std::path::Path;

use crate::header::{HEADER_SIZE, Header, VERSION};

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("invalid magic: expected ETRI")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u32),
    #[error("file too small: {0} bytes (minimum {HEADER_SIZE})")]
    FileTooSmall(usize),
    #[error("size mismatch: header says {header} bytes, got {actual}")]
    SizeMismatch { header: usize, actual: usize },
    #[error("checksum mismatch: header says {header:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { header: u32, actual: u32 },
    #[error("trie has no root word")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    header: Header,
    words: Vec<u16>,
}

impl Module {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModuleError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ModuleError::FileTooSmall(bytes.len()));
        }

        let header = Header::from_bytes(&bytes[..HEADER_SIZE]);

        if !header.validate_magic() {
            return Err(ModuleError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ModuleError::UnsupportedVersion(header.version));
        }
        if header.total_size() != bytes.len() {
            return Err(ModuleError::SizeMismatch {
                header: header.total_size(),
                actual: bytes.len(),
            });
        }
        if header.word_count == 0 {
            return Err(ModuleError::Empty);
        }

        let payload = &bytes[HEADER_SIZE..];
        let actual = crc32fast::hash(payload);
        if actual != header.checksum {
            return Err(ModuleError::ChecksumMismatch {
                header: header.checksum,
                actual,
            });
        }

        let words = payload
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self { header, words })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModuleError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    pub fn into_words(self) -> Vec<u16> {
        self.words
    }
}

impl Deref for Module {
    type Target = [u16];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
