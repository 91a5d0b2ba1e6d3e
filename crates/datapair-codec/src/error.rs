//! Error types for batch file operations.

use std::io;
use std::path::PathBuf;

/// Errors produced by the codec.
///
/// Malformed lines never surface here; batch readers drop them. Only I/O
/// on the backing file aborts an operation.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be created, written or moved into place.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CodecError {
    /// The path of the file involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Convenience alias used throughout the codec crate.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
