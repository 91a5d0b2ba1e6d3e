//! Batch operations over datapair lines.
//!
//! Converts collections of [`DataPair`] to and from newline-joined text,
//! line-oriented files and insertion-ordered maps. Reading is best-effort:
//! lines that do not decode are dropped, and only I/O on the backing file
//! can fail an operation.
//!
//! # Key Types
//!
//! - [`DataPairCodec`] -- Configured front for all batch operations
//! - [`PairFile`] -- A pair file on disk
//! - [`PairMap`] -- Insertion-ordered `String -> String` map
//! - [`CodecError`] -- File-level failures

pub mod codec;
pub mod error;
pub mod file;
pub mod mapping;
pub mod text;

pub use codec::DataPairCodec;
pub use datapair_types::{CodecConfig, DataPair, LineEnding};
pub use error::{CodecError, CodecResult};
pub use file::{read_map, read_pairs, write_map, write_pairs, PairFile};
pub use mapping::{from_entries, from_map, to_entries, to_map, PairMap};
pub use text::{from_lines, from_text, to_text};
