//! Error types for single-pair encoding and decoding.

use thiserror::Error;

/// Errors that can occur while decoding a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    /// The line did not contain a key/value separator.
    #[error("malformed line: expected at least two '{separator}'-delimited segments, found {segments}")]
    MalformedLine { separator: char, segments: usize },
}

/// Convenience type alias for pair operations.
pub type PairResult<T> = std::result::Result<T, PairError>;
