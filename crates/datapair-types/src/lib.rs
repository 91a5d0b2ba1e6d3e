//! Foundation types for the datapair text format.
//!
//! A [`DataPair`] is a flat string key/value entry that encodes to exactly one
//! line of text:
//!
//! ```text
//! <escaped-key>=<escaped-value>
//! "<escaped-key>"="<escaped-value>"
//! ```
//!
//! Separators, quotation marks and line terminators inside either field are
//! replaced by placeholder tokens (see [`escape`]), so decoding a line gives
//! back the original pair.
//!
//! # Modules
//!
//! - [`pair`] — [`DataPair`] and its line encode/decode
//! - [`escape`] — Reserved characters and placeholder substitution
//! - [`config`] — [`CodecConfig`] and [`LineEnding`]
//! - [`persist`] — Whole-file replacement used by the file writers
//! - [`error`] — [`PairError`] for malformed lines

pub mod config;
pub mod error;
pub mod escape;
pub mod pair;
pub mod persist;

pub use config::{CodecConfig, LineEnding};
pub use error::{PairError, PairResult};
pub use escape::{EQUAL_SYMBOL, NEW_LINE_SYMBOL, QUOTATION_MARK, QUOTATION_MARK_SYMBOL, SEPARATOR};
pub use pair::DataPair;
pub use persist::replace_file;
