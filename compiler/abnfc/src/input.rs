//! Grammar file loading.

use std::io;
use std::path::{Path, PathBuf};

/// Why a grammar file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    /// Nothing to recognize: an empty buffer has no rule list.
    #[error("not reading empty file '{}'", path.display())]
    Empty { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    /// The file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::PermissionDenied { path }
            | LoadError::Empty { path }
            | LoadError::Io { path, .. } => path,
        }
    }
}

/// Read a whole grammar file into memory.
///
/// Grammars are bytes, not text: no UTF-8 validation happens here. Empty
/// files are refused.
pub fn load_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| {
        let path = path.to_path_buf();
        match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source: e },
        }
    })?;

    if bytes.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded grammar");
    Ok(bytes)
}
