//! Tag tree for parsed tag documents.
//!
//! # Design
//!
//! The tree is a plain owned hierarchy: every [`Tag`] owns its children and
//! nothing points back up. Once the parser hands a tree out it is never
//! mutated again, so there is no need for parent links, sibling links or an
//! arena.
//!
//! Raw text between tags is represented as a synthetic leaf named
//! [`TEXT_TAG_NAME`] whose only attribute, [`TEXT_ATTRIBUTE_KEY`], holds the
//! captured content.

use std::collections::HashMap;
use std::fmt::Write as _;

/// Name given to the synthetic leaf that holds raw text content.
pub const TEXT_TAG_NAME: &str = "<text>";

/// Attribute key under which a text leaf stores its content.
pub const TEXT_ATTRIBUTE_KEY: &str = "text";

/// Map of attribute names to values for a tag.
pub type AttributesMap = HashMap<String, String>;

/// A node in the parsed document tree, either structural or text.
///
/// Offsets are character offsets (not bytes) into the whitespace-trimmed
/// document, forming the half-open range `[start, end)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// The tag name. Empty for nameless tags, [`TEXT_TAG_NAME`] for text.
    pub name: String,
    /// Offset of the opening `<` (or of the first text character).
    pub start: usize,
    /// Offset just past the closing `>`. Zero while the tag is still open.
    pub end: usize,
    /// 0-indexed nesting depth, the open-tag stack depth at creation time.
    pub depth: usize,
    /// Children in document order.
    pub children: Vec<Tag>,
    /// Attributes, or `None` when the tag was written without any.
    pub attributes: Option<AttributesMap>,
}

impl Tag {
    /// Create an open structural tag with no children or attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, start: usize, depth: usize) -> Self {
        Self {
            name: name.into(),
            start,
            depth,
            ..Self::default()
        }
    }

    /// Create a finalized text leaf holding `content`.
    #[must_use]
    pub fn new_text(content: impl Into<String>, start: usize, end: usize, depth: usize) -> Self {
        let mut attributes = AttributesMap::with_capacity(1);
        let _ = attributes.insert(TEXT_ATTRIBUTE_KEY.to_string(), content.into());
        Self {
            name: TEXT_TAG_NAME.to_string(),
            start,
            end,
            depth,
            children: Vec::new(),
            attributes: Some(attributes),
        }
    }

    /// Whether this is a synthetic text leaf.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.name == TEXT_TAG_NAME
    }

    /// The captured content of a text leaf, or `None` for structural tags.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        if self.is_text() {
            self.attribute(TEXT_ATTRIBUTE_KEY)
        } else {
            None
        }
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(key))
            .map(String::as_str)
    }

    /// Set an attribute, creating the attribute map on first use.
    ///
    /// Returns the previous value when the key was already present, so a
    /// repeated key keeps only its last value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attributes
            .get_or_insert_with(AttributesMap::new)
            .insert(key.into(), value.into())
    }

    /// Whether the tag's end offset has been finalized.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.end > 0
    }

    /// Slice this tag's `[start, end)` span out of `document`.
    ///
    /// Returns an empty string when the span is not (yet) valid for the
    /// given document.
    #[must_use]
    pub fn render(&self, document: &[char]) -> String {
        document
            .get(self.start..self.end)
            .map(|span| span.iter().collect())
            .unwrap_or_default()
    }

    /// Iterate over this tag and everything below it, in document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of tags in this subtree, including this one and text leaves.
    #[must_use]
    pub fn count(&self) -> usize {
        self.descendants().count()
    }
}

/// Pre-order iterator over a tag subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Tag>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Tag;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.stack.pop()?;
        self.stack.extend(tag.children.iter().rev());
        Some(tag)
    }
}

/// Render an indented outline of the tree rooted at `tag`.
///
/// When `document` is given, every line also carries the tag's `[start,end)`
/// range and its rendered source.
#[must_use]
pub fn format_tree(tag: &Tag, document: Option<&[char]>) -> String {
    let mut out = String::new();
    write_tree(&mut out, tag, document, 0);
    out
}

/// Print the outline produced by [`format_tree`] to stdout.
pub fn print_tree(tag: &Tag, document: Option<&[char]>) {
    print!("{}", format_tree(tag, document));
}

fn write_tree(out: &mut String, tag: &Tag, document: Option<&[char]>, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(text) = tag.text() {
        let display = text.replace('\n', "\\n").replace(' ', "\u{00B7}");
        let _ = write!(out, "{prefix}\"{display}\"");
    } else {
        match &tag.attributes {
            Some(attrs) if !attrs.is_empty() => {
                let mut pairs: Vec<_> = attrs.iter().collect();
                pairs.sort_unstable();
                let attrs: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}=\"{v}\"")).collect();
                let _ = write!(out, "{prefix}<{} {}>", tag.name, attrs.join(" "));
            }
            _ => {
                let _ = write!(out, "{prefix}<{}>", tag.name);
            }
        }
    }

    if let Some(document) = document {
        let source = tag.render(document).replace('\n', "\\n");
        let _ = write!(out, "  [{},{}) {source}", tag.start, tag.end);
    }
    out.push('\n');

    for child in &tag.children {
        write_tree(out, child, document, indent + 1);
    }
}
