//! Virtual File System Types
//!
//! Content and error types shared by the archive loader and the path map.

use thiserror::Error;

/// Errors raised while materializing the VFS from an archive.
#[derive(Error, Debug, Clone)]
pub enum VfsError {
    #[error("cannot open archive '{path}': {message}")]
    Open { path: String, message: String },

    #[error("cannot read archive member: {message}")]
    Enumerate { message: String },
}

/// A member whose bytes are not valid UTF-8 and were kept as binary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Warning: Unable to decode {member}. Storing as binary.")]
pub struct DecodeWarning {
    pub member: String,
}

/// File content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    /// Decode raw member bytes, falling back to binary when they are not UTF-8.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, Vec<u8>> {
        String::from_utf8(bytes)
            .map(FileContent::Text)
            .map_err(|e| e.into_bytes())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }

    pub fn len(&self) -> usize {
        match self {
            FileContent::Text(s) => s.len(),
            FileContent::Binary(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for FileContent {
    fn from(s: String) -> Self {
        FileContent::Text(s)
    }
}

impl From<&str> for FileContent {
    fn from(s: &str) -> Self {
        FileContent::Text(s.to_string())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(v: Vec<u8>) -> Self {
        FileContent::Binary(v)
    }
}
