use tagdoc_dom::Tag;

use super::span_to_string;
use crate::error::{ParseError, ParseErrorKind};
use crate::runes::is_name_rune;

/// Scan a closing tag, `</name>`, starting at the `<` at `start`, and
/// finalize `open` with the offset just past its `>`.
///
/// Returns the exit offset.
pub(super) fn scan_closing_tag(document: &[char], start: usize, open: &mut Tag) -> Result<usize, ParseError> {
    debug_assert_eq!(document.get(start), Some(&'<'));

    if document.get(start + 1).copied() != Some('/') {
        return Err(ParseError::new(
            ParseErrorKind::MissingSlash,
            start + 1,
            start + 1,
            "no '/' at start of closing tag",
        ));
    }

    let name_start = start + 2;
    let mut index = name_start;
    while let Some(&c) = document.get(index) {
        if matches!(c, ' ' | '>') {
            let name = span_to_string(document, name_start, index);
            if name != open.name {
                return Err(ParseError::new(
                    ParseErrorKind::TagNameMismatch,
                    start,
                    index,
                    format!("expected closing tag for {:?} - got {name:?}", open.name),
                ));
            }
            break;
        }

        if !is_name_rune(c) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidNameRune,
                index,
                index + 1,
                format!("invalid rune in closing tag name: {c:?}"),
            ));
        }

        index += 1;
    }

    while let Some(&c) = document.get(index) {
        match c {
            ' ' => index += 1,
            '>' => {
                open.end = index + 1;
                return Ok(index + 1);
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidClosingTagRune,
                    index,
                    index + 1,
                    format!("invalid rune in closing tag: {other:?}, expected '>'"),
                ));
            }
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnterminatedTag,
        start,
        document.len(),
        "reached the end of the input without finding a closing '>'",
    ))
}
