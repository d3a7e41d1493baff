use super::span_to_string;
use crate::runes::is_content_rune;

/// Consume raw text from `start` up to (not including) the next `<`.
///
/// Whitespace at either edge is dropped, inner whitespace is kept verbatim.
/// Returns the captured text (empty when there is no real content) and the
/// offset of the next `<`, or the end of the document.
pub(super) fn scan_raw_content(document: &[char], start: usize) -> (String, usize) {
    let mut first_content = None;
    let mut last_content = start;
    let mut index = start;

    while let Some(&c) = document.get(index) {
        if c == '<' {
            break;
        }

        if is_content_rune(c) {
            if first_content.is_none() {
                first_content = Some(index);
            }
            last_content = index;
        }

        index += 1;
    }

    let content = first_content
        .map(|first| span_to_string(document, first, last_content + 1))
        .unwrap_or_default();
    (content, index)
}
