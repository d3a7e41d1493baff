//! Single-pass tag document parser.
//!
//! The `TreeBuilder` walks the trimmed document once and dispatches on the
//! current character to the scanners:
//!
//! - `<` not followed by `/` goes to the opening-tag scanner,
//! - `</` goes to the closing-tag scanner,
//! - anything else is raw content for the innermost open tag.
//!
//! Scanners never call back into the driver. The tags that are still waiting
//! for their closing counterpart live on the open-tag stack, which owns them;
//! a tag is moved into its parent's children once it is complete, so there are
//! never references into a sibling list that is still growing.

mod attribute;
mod closing;
mod content;
mod opening;
mod preprocess;

pub use preprocess::trim;

use tagdoc_dom::Tag;

use crate::error::{ParseError, ParseErrorKind};
use closing::scan_closing_tag;
use content::scan_raw_content;
use opening::scan_opening_tag;

/// A successfully parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// The single root tag.
    pub root: Tag,
    /// The whitespace-trimmed input; every tag offset indexes into it.
    pub document: Vec<char>,
}

impl ParseResult {
    /// The source markup of `tag`, sliced out of the document.
    #[must_use]
    pub fn render(&self, tag: &Tag) -> String {
        tag.render(&self.document)
    }

    /// The trimmed document as a string.
    #[must_use]
    pub fn document_text(&self) -> String {
        self.document.iter().collect()
    }
}

/// Parse a tag document.
///
/// Leading and trailing whitespace is stripped first; all offsets in the
/// result (and in any error) are character offsets into the trimmed text.
///
/// # Errors
///
/// Returns the first structural violation found. There is no partial result.
pub fn parse(input: &str) -> Result<ParseResult, ParseError> {
    let runes: Vec<char> = input.chars().collect();
    parse_runes(&runes)
}

/// Parse a tag document that has already been split into characters.
///
/// # Errors
///
/// Returns the first structural violation found. There is no partial result.
pub fn parse_runes(input: &[char]) -> Result<ParseResult, ParseError> {
    let document = trim(input)?;
    tracing::debug!(characters = document.len(), "parsing tag document");

    let root = TreeBuilder::new(document).run()?;
    tracing::debug!(root = %root.name, tags = root.count(), "parsed tag document");

    Ok(ParseResult {
        root,
        document: document.to_vec(),
    })
}

/// Collect `document[start..end]` into a `String`.
fn span_to_string(document: &[char], start: usize, end: usize) -> String {
    document[start..end].iter().collect()
}

/// The document driver: owns the open-tag stack and the finished root.
struct TreeBuilder<'a> {
    document: &'a [char],
    position: usize,
    /// Tags awaiting their closing tag, innermost last.
    open_tags: Vec<Tag>,
    root: Option<Tag>,
}

impl<'a> TreeBuilder<'a> {
    const fn new(document: &'a [char]) -> Self {
        Self {
            document,
            position: 0,
            open_tags: Vec::new(),
            root: None,
        }
    }

    fn run(mut self) -> Result<Tag, ParseError> {
        while let Some(&c) = self.document.get(self.position) {
            if c != '<' {
                self.consume_content(c)?;
            } else if self.document.get(self.position + 1).copied() == Some('/') {
                self.close_tag()?;
            } else {
                self.open_tag()?;
            }
        }

        if let Some(open) = self.open_tags.last() {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedTag,
                open.start,
                self.document.len(),
                format!("reached the end of the input while {:?} was still open", open.name),
            ));
        }

        self.root.ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::EmptyInput,
                0,
                self.document.len(),
                "document does not contain a tag",
            )
        })
    }

    fn open_tag(&mut self) -> Result<(), ParseError> {
        let start = self.position;
        if self.open_tags.is_empty() && self.root.is_some() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingContentAfterRoot,
                start,
                start + 1,
                "the document must have a single root tag",
            ));
        }

        let (tag, exit) = scan_opening_tag(self.document, start, self.open_tags.len())?;
        self.position = exit;

        if tag.is_closed() {
            tracing::trace!(name = %tag.name, start = tag.start, end = tag.end, "self-closing tag");
            self.attach(tag);
        } else {
            tracing::trace!(name = %tag.name, start = tag.start, "opened tag");
            self.open_tags.push(tag);
        }
        Ok(())
    }

    fn close_tag(&mut self) -> Result<(), ParseError> {
        let start = self.position;
        let Some(mut open) = self.open_tags.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::DanglingCloseTag,
                start,
                start + 2,
                "found a closing tag with no open tag to close",
            ));
        };

        self.position = scan_closing_tag(self.document, start, &mut open)?;
        tracing::trace!(name = %open.name, start = open.start, end = open.end, "closed tag");
        self.attach(open);

        if self.open_tags.is_empty() && self.position < self.document.len() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingContentAfterRoot,
                self.position,
                self.document.len(),
                "closed the root tag while there was still content to parse",
            ));
        }
        Ok(())
    }

    fn consume_content(&mut self, c: char) -> Result<(), ParseError> {
        let start = self.position;
        let depth = self.open_tags.len() + 1;
        let Some(parent) = self.open_tags.last_mut() else {
            return Err(ParseError::new(
                ParseErrorKind::ContentWithoutParent,
                start,
                start + 1,
                "raw content must be inside a tag",
            ));
        };

        if c.is_whitespace() {
            self.position += 1;
            return Ok(());
        }

        let (content, exit) = scan_raw_content(self.document, start);
        parent.children.push(Tag::new_text(content, start, exit, depth));
        self.position = exit;
        Ok(())
    }

    /// Hand a finished tag to the innermost open tag, or make it the root.
    fn attach(&mut self, tag: Tag) {
        match self.open_tags.last_mut() {
            Some(parent) => parent.children.push(tag),
            None => self.root = Some(tag),
        }
    }
}
