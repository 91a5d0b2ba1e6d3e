use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::error::{PairError, PairResult};
use crate::escape::{escape_field, unescape_field, QUOTATION_MARK, SEPARATOR};

/// A single key/value text entry with a reversible one-line encoding.
///
/// The key is fixed once the pair exists; only the value can be replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPair {
    key: String,
    value: String,
}

impl DataPair {
    /// Create a pair from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a pair from a map entry.
    pub fn from_entry<K, V>((key, value): (K, V)) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(key, value)
    }

    /// The key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, keeping the key.
    pub fn edit_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Borrowed `(key, value)` entry.
    pub fn to_entry(&self) -> (String, String) {
        (self.key.clone(), self.value.clone())
    }

    /// Consume the pair into a `(key, value)` entry.
    pub fn into_entry(self) -> (String, String) {
        (self.key, self.value)
    }

    // ---------------------------------------------------------------
    // Encoding
    // ---------------------------------------------------------------

    /// Encode as `key=value` with reserved characters escaped.
    pub fn to_line(&self) -> String {
        self.write_line(false, false)
    }

    /// Encode as `"key"="value"` with reserved characters escaped.
    pub fn to_line_with_quotations(&self) -> String {
        self.write_line(true, false)
    }

    /// Encode using the variant and empty-field behaviour of `config`.
    pub fn to_line_with(&self, config: &CodecConfig) -> String {
        self.write_line(config.quoted, config.empty_field_marker)
    }

    fn write_line(&self, quoted: bool, empty_field_marker: bool) -> String {
        let key = escape_field(&self.key, empty_field_marker);
        let value = escape_field(&self.value, empty_field_marker);
        if quoted {
            format!("{QUOTATION_MARK}{key}{QUOTATION_MARK}{SEPARATOR}{QUOTATION_MARK}{value}{QUOTATION_MARK}")
        } else {
            format!("{key}{SEPARATOR}{value}")
        }
    }

    // ---------------------------------------------------------------
    // Decoding
    // ---------------------------------------------------------------

    /// Decode one line, restoring `<NewLine>` as the platform terminator.
    ///
    /// The line is split on every separator and the first two segments are
    /// used as key and value; any further segments are ignored. Quoted and
    /// unquoted lines are both accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use datapair_types::DataPair;
    ///
    /// let pair = DataPair::parse("\"greeting\"=\"hello\"").unwrap();
    /// assert_eq!(pair.key(), "greeting");
    /// assert_eq!(pair.value(), "hello");
    /// assert!(DataPair::parse("no separator").is_err());
    /// ```
    pub fn parse(line: &str) -> PairResult<Self> {
        Self::parse_with(line, &CodecConfig::default())
    }

    /// Decode one line, restoring `<NewLine>` as `config`'s line ending.
    pub fn parse_with(line: &str, config: &CodecConfig) -> PairResult<Self> {
        let mut segments = line.split(SEPARATOR);
        let (key, value) = match (segments.next(), segments.next()) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                return Err(PairError::MalformedLine {
                    separator: SEPARATOR,
                    segments: 1,
                })
            }
        };

        let newline = config.newline();
        Ok(Self {
            key: unescape_field(key, newline),
            value: unescape_field(value, newline),
        })
    }

    /// Decode one line, returning `None` when it is malformed.
    pub fn try_parse(line: &str) -> Option<Self> {
        Self::parse(line).ok()
    }

    /// [`try_parse`](Self::try_parse) with an explicit configuration.
    pub fn try_parse_with(line: &str, config: &CodecConfig) -> Option<Self> {
        Self::parse_with(line, config).ok()
    }
}

impl fmt::Display for DataPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

impl FromStr for DataPair {
    type Err = PairError;

    fn from_str(s: &str) -> PairResult<Self> {
        Self::parse(s)
    }
}
