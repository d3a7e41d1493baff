//! Parse errors with character-offset ranges.

use std::ops::Range;

use strum_macros::Display;
use thiserror::Error;

/// The kind of structural violation that aborted a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParseErrorKind {
    /// The input was empty, or contained only whitespace.
    EmptyInput,
    /// A tag name contained a rune that is not valid in names.
    InvalidNameRune,
    /// A tag with an empty name carried an attribute.
    NamelessTagWithAttributes,
    /// A `/` inside an opening tag was not immediately followed by `>`.
    ExpectedSelfClose,
    /// Two attributes followed each other without a separating space.
    AttributesMustBeSeparated,
    /// The input ended before a tag was closed.
    UnterminatedTag,
    /// A closing tag did not start with `</`.
    MissingSlash,
    /// A closing tag named a different tag than the one currently open.
    TagNameMismatch,
    /// Something other than spaces or `>` followed a closing tag's name.
    InvalidClosingTagRune,
    /// An attribute name contained a rune that is not valid in names.
    InvalidAttributeNameRune,
    /// The input ended before an attribute name reached its `=`.
    UnterminatedAttributeName,
    /// An attribute value did not open with `"` or `'`.
    InvalidAttributeQuote,
    /// An attribute value contained a rune that is not allowed in values.
    InvalidAttributeValueRune,
    /// The input ended before an attribute value's closing quote.
    UnterminatedAttributeValue,
    /// A closing tag appeared while no tag was open.
    DanglingCloseTag,
    /// Raw content appeared outside of any tag.
    ContentWithoutParent,
    /// Input continued after the root tag was complete.
    TrailingContentAfterRoot,
}

/// A fatal parse error.
///
/// `start` and `end` are character offsets into the whitespace-trimmed
/// document. They are best effort: some errors point at a single offset
/// (`start == end`) rather than a full range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{start},{end}] {reason}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// First offset of the offending span.
    pub start: usize,
    /// Offset just past the offending span.
    pub end: usize,
    /// Human-readable diagnostic.
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, start: usize, end: usize, reason: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            reason: reason.into(),
        }
    }

    /// The offending `[start, end)` range.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}
