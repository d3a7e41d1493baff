use super::span_to_string;
use crate::error::{ParseError, ParseErrorKind};
use crate::runes::{is_name_rune, is_value_rune};

/// Scan one `key="value"` (or `key='value'`) pair starting at `start`.
///
/// Returns the key, the verbatim value and the offset just past the closing
/// quote.
pub(super) fn scan_attribute(document: &[char], start: usize) -> Result<(String, String, usize), ParseError> {
    let (key, equals) = scan_attribute_key(document, start)?;
    let (value, exit) = scan_attribute_value(document, equals + 1)?;
    Ok((key, value, exit))
}

/// Scan a key up to (not including) its `=`. Returns the key and the offset
/// of the `=`.
pub(super) fn scan_attribute_key(document: &[char], start: usize) -> Result<(String, usize), ParseError> {
    let mut index = start;
    loop {
        let Some(&c) = document.get(index) else {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedAttributeName,
                start,
                index,
                "reached the end of the input without completing attribute name",
            ));
        };

        if c == '=' {
            return Ok((span_to_string(document, start, index), index));
        }

        if !is_name_rune(c) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAttributeNameRune,
                index,
                index + 1,
                format!("unexpected rune in attribute name: {c:?}"),
            ));
        }

        index += 1;
    }
}

/// Scan a quoted value whose opening quote sits at `start`. Returns the
/// content between the quotes and the offset just past the closing quote.
pub(super) fn scan_attribute_value(document: &[char], start: usize) -> Result<(String, usize), ParseError> {
    let quote = match document.get(start).copied() {
        Some(quote @ ('"' | '\'')) => quote,
        Some(other) => {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAttributeQuote,
                start,
                start + 1,
                format!("attribute values must be quoted with \" or ' - got {other:?}"),
            ));
        }
        None => {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedAttributeValue,
                start,
                start,
                "reached the end of the input before an attribute value",
            ));
        }
    };

    let value_start = start + 1;
    let mut index = value_start;
    loop {
        let Some(&c) = document.get(index) else {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedAttributeValue,
                value_start,
                index,
                format!("reached the end of the input without finding closing {quote}"),
            ));
        };

        if c == quote {
            return Ok((span_to_string(document, value_start, index), index + 1));
        }

        if !is_value_rune(c) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAttributeValueRune,
                index,
                index + 1,
                format!("unexpected rune in attribute value: {c:?}"),
            ));
        }

        index += 1;
    }
}
