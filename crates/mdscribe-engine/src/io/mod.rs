use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Document;
use crate::parsing::{ParseOptions, parse};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// The resource the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            IoError::NotFound(path) | IoError::Read { path, .. } => path,
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            IoError::NotFound(_) => std::io::ErrorKind::NotFound,
            IoError::Read { source, .. } => source.kind(),
        }
    }
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a markdown file.
pub fn load_and_parse(path: &Path, options: &ParseOptions) -> Result<Document, IoError> {
    let text = read_file(path)?;
    log::debug!("loaded {} ({} bytes)", path.display(), text.len());
    Ok(parse(&text, options))
}
