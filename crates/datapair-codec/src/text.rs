//! Conversion between pair sequences and newline-joined text.

use datapair_types::escape::replace_newlines;
use datapair_types::{CodecConfig, DataPair};
use tracing::debug;

/// Token every newline sequence is folded into before text is split.
const TEMPORARY_NEW_LINE_TOKEN: &str = "<T_NL>";

/// Join the encoded lines of `pairs` with the platform line ending.
///
/// An empty slice gives an empty string. There is no trailing terminator.
pub fn to_text(pairs: &[DataPair]) -> String {
    to_text_with(pairs, &CodecConfig::default())
}

/// [`to_text`] with an explicit configuration.
pub fn to_text_with(pairs: &[DataPair], config: &CodecConfig) -> String {
    pairs
        .iter()
        .map(|pair| pair.to_line_with(config))
        .collect::<Vec<_>>()
        .join(config.newline())
}

/// Parse every line of `text`, keeping the pairs that decode.
///
/// Any newline style is accepted. Blank and malformed lines are dropped,
/// so this never fails; unparseable input yields an empty vector.
pub fn from_text(text: &str) -> Vec<DataPair> {
    from_text_with(text, &CodecConfig::default())
}

/// [`from_text`] with an explicit configuration.
pub fn from_text_with(text: &str, config: &CodecConfig) -> Vec<DataPair> {
    let normalized = replace_newlines(text, TEMPORARY_NEW_LINE_TOKEN);
    from_lines_with(
        normalized
            .split(TEMPORARY_NEW_LINE_TOKEN)
            .filter(|segment| !segment.is_empty()),
        config,
    )
}

/// Parse already-split lines, keeping the pairs that decode.
pub fn from_lines<I, S>(lines: I) -> Vec<DataPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    from_lines_with(lines, &CodecConfig::default())
}

/// [`from_lines`] with an explicit configuration.
pub fn from_lines_with<I, S>(lines: I, config: &CodecConfig) -> Vec<DataPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        match DataPair::parse_with(line.as_ref(), config) {
            Ok(pair) => pairs.push(pair),
            Err(e) => debug!(line = index, error = %e, "skipping malformed line"),
        }
    }
    pairs
}
