use tagdoc_dom::Tag;

use super::attribute::scan_attribute;
use super::span_to_string;
use crate::error::{ParseError, ParseErrorKind};
use crate::runes::is_name_rune;

/// Scan an opening tag, `<name attr="value" ...>`, or its self-closing form
/// `<name .../>`, starting at the `<` at `start`.
///
/// Returns the new tag and the offset just past its `>`. A self-closing tag
/// comes back with `end` already set; an open tag has `end == 0` and is
/// finalized later by the matching closing tag.
pub(super) fn scan_opening_tag(document: &[char], start: usize, depth: usize) -> Result<(Tag, usize), ParseError> {
    debug_assert_eq!(document.get(start), Some(&'<'));

    let name_start = start + 1;
    let mut index = name_start;
    while let Some(&c) = document.get(index) {
        if matches!(c, ' ' | '/' | '>') {
            break;
        }

        if !is_name_rune(c) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidNameRune,
                index,
                index + 1,
                format!("invalid rune in tag name: {c:?}"),
            ));
        }

        index += 1;
    }

    let mut tag = Tag::new(span_to_string(document, name_start, index), start, depth);

    while let Some(&c) = document.get(index) {
        match c {
            ' ' => index += 1,
            '/' => {
                return match document.get(index + 1).copied() {
                    Some('>') => {
                        tag.end = index + 2;
                        Ok((tag, index + 2))
                    }
                    Some(other) => Err(ParseError::new(
                        ParseErrorKind::ExpectedSelfClose,
                        index,
                        index + 2,
                        format!("expected '>' after '/' - got {other:?}"),
                    )),
                    None => Err(ParseError::new(
                        ParseErrorKind::ExpectedSelfClose,
                        index,
                        index + 1,
                        "expected '>' after '/' - got end of input",
                    )),
                };
            }
            '>' => return Ok((tag, index + 1)),
            // Stray control runes between attributes are stepped over.
            c if c.is_control() => index += 1,
            _ => {
                if tag.name.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::NamelessTagWithAttributes,
                        start,
                        index + 1,
                        "nameless tags cannot contain attributes",
                    ));
                }

                let (key, value, exit) = scan_attribute(document, index)?;
                let _ = tag.set_attribute(key, value);
                index = exit;

                if let Some(&next) = document.get(index)
                    && !matches!(next, ' ' | '/' | '>')
                {
                    return Err(ParseError::new(
                        ParseErrorKind::AttributesMustBeSeparated,
                        index,
                        index + 1,
                        "attributes must be separated by a space",
                    ));
                }
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
