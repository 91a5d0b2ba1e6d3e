use std::io;

/// Errors produced by the binary holder.
#[derive(Debug, thiserror::Error)]
pub enum HolderError {
    /// Nothing has been serialized into the holder.
    #[error("holder is empty: no type recorded")]
    EmptyType,

    /// The requested type differs from the one the bytes were produced from.
    #[error("type mismatch: requested {requested}, stored {stored}")]
    TypeMismatch { requested: String, stored: String },

    /// bincode could not encode or decode the value.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while saving or loading a holder file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with the holder magic bytes.
    #[error("not a holder file: bad magic {0:02x?}")]
    BadMagic([u8; 4]),

    /// The file was written by an unknown format version.
    #[error("unsupported holder format version {0}")]
    UnsupportedVersion(u8),

    /// The file ends before the declared lengths.
    #[error("truncated holder file: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The stored type name is not valid UTF-8.
    #[error("invalid type name: {0}")]
    InvalidTypeName(String),

    /// The payload checksum does not match.
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },
}

/// Result alias for holder operations.
pub type HolderResult<T> = Result<T, HolderError>;
