//! Placeholder escaping for the reserved characters of the line format.
//!
//! | literal            | placeholder       |
//! |--------------------|-------------------|
//! | `=`                | `<EqualSymbol>`   |
//! | `"`                | `<QuotationMark>` |
//! | `\r\n`, `\n`, `\r` | `<NewLine>`       |
//!
//! Placeholders are not escaped themselves: a field that literally contains
//! one of the tokens decodes to the reserved character instead.

/// Separator between the key and the value of a line.
pub const SEPARATOR: char = '=';

/// Quotation mark wrapped around fields in the quoted variant.
pub const QUOTATION_MARK: char = '"';

/// Placeholder for [`SEPARATOR`].
pub const EQUAL_SYMBOL: &str = "<EqualSymbol>";

/// Placeholder for [`QUOTATION_MARK`].
pub const QUOTATION_MARK_SYMBOL: &str = "<QuotationMark>";

/// Placeholder for a line terminator.
pub const NEW_LINE_SYMBOL: &str = "<NewLine>";

/// Returns `true` if `text` contains any placeholder token.
///
/// Such text does not survive an encode/decode round trip unchanged.
pub fn contains_placeholder(text: &str) -> bool {
    [EQUAL_SYMBOL, QUOTATION_MARK_SYMBOL, NEW_LINE_SYMBOL]
        .iter()
        .any(|token| text.contains(token))
}

/// Escape one field for emission.
///
/// Substitutes the separator, then the quotation mark, then (with
/// `empty_field_marker`) a wholly-empty field, then every line terminator.
pub fn escape_field(field: &str, empty_field_marker: bool) -> String {
    if field.is_empty() {
        return if empty_field_marker {
            NEW_LINE_SYMBOL.to_string()
        } else {
            String::new()
        };
    }

    let escaped = field
        .replace(SEPARATOR, EQUAL_SYMBOL)
        .replace(QUOTATION_MARK, QUOTATION_MARK_SYMBOL);
    replace_newlines(&escaped, NEW_LINE_SYMBOL)
}

/// Reverse [`escape_field`] for one raw segment of a line.
///
/// One leading and one trailing quotation mark are stripped first, if
/// present. `<NewLine>` is restored as `newline`.
pub fn unescape_field(segment: &str, newline: &str) -> String {
    let segment = segment.strip_prefix(QUOTATION_MARK).unwrap_or(segment);
    let segment = segment.strip_suffix(QUOTATION_MARK).unwrap_or(segment);

    segment
        .replace(EQUAL_SYMBOL, &SEPARATOR.to_string())
        .replace(QUOTATION_MARK_SYMBOL, &QUOTATION_MARK.to_string())
        .replace(NEW_LINE_SYMBOL, newline)
}

/// Replace every line terminator in `text` with `replacement`.
///
/// `\r\n` counts as a single terminator; lone `\r` and `\n` are each one.
pub fn replace_newlines(text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str(replacement);
            }
            '\n' => out.push_str(replacement),
            other => out.push(other),
        }
    }
    out
}
