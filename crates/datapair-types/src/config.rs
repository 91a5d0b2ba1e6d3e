use serde::{Deserialize, Serialize};

/// Line terminator used when joining lines and when restoring `<NewLine>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// The platform terminator: `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    /// Always `\n`.
    Lf,
    /// Always `\r\n`.
    CrLf,
}

impl LineEnding {
    /// The terminator as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => NATIVE_LINE_ENDING,
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Lf => write!(f, "lf"),
            Self::CrLf => write!(f, "crlf"),
        }
    }
}

#[cfg(windows)]
const NATIVE_LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const NATIVE_LINE_ENDING: &str = "\n";

/// Configuration for encoding and decoding pair lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Terminator for joined text and written files, and the newline
    /// restored when decoding `<NewLine>`.
    pub line_ending: LineEnding,
    /// Emit the quoted `"key"="value"` variant in batch output.
    pub quoted: bool,
    /// Encode a wholly-empty key or value as `<NewLine>`.
    ///
    /// Such a field decodes back to a newline rather than an empty string,
    /// so this only exists for producing files older readers expect.
    pub empty_field_marker: bool,
}

impl CodecConfig {
    /// Configuration that always uses `\n`, regardless of platform.
    pub fn unix() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            ..Default::default()
        }
    }

    /// Shorthand for `self.line_ending.as_str()`.
    pub fn newline(&self) -> &'static str {
        self.line_ending.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_native_unquoted() {
        let config = CodecConfig::default();
        assert_eq!(config.line_ending, LineEnding::Native);
        assert!(!config.quoted);
        assert!(!config.empty_field_marker);
    }

    #[test]
    fn explicit_line_endings() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        assert_eq!(CodecConfig::unix().newline(), "\n");
    }

    #[test]
    fn deserialize_partial_toml() {
        let config: CodecConfig = toml::from_str("line_ending = \"crlf\"\nquoted = true\n").unwrap();
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert!(config.quoted);
        assert!(!config.empty_field_marker);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: CodecConfig = toml::from_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn display_names_match_serde() {
        assert_eq!(LineEnding::Native.to_string(), "native");
        assert_eq!(LineEnding::CrLf.to_string(), "crlf");
    }
}
