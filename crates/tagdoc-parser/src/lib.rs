//! Strict parser for tag documents.
//!
//! # Scope
//!
//! A tag document is a single root tag written in a small HTML-like syntax:
//!
//! - `<name key="value" other='value'>...</name>` container tags,
//! - `<name .../>` self-closing tags,
//! - nameless tags (`<>...</>`), which may not carry attributes,
//! - raw text between tags, captured as synthetic `<text>` leaves with the
//!   surrounding whitespace trimmed.
//!
//! Names may use letters, digits, `_ - : .` and most non-punctuation Unicode
//! (emoji included). Attribute values must be quoted and are kept verbatim, so
//! `&lt;` stays `&lt;`.
//!
//! The parser either accepts the whole document or fails with the first
//! [`ParseError`]; there is no recovery mode.
//!
//! # Example
//!
//! ```
//! let result = tagdoc_parser::parse("<p class='greeting'>Hello, World!</p>").unwrap();
//! assert_eq!(result.root.name, "p");
//! assert_eq!(result.root.attribute("class"), Some("greeting"));
//! assert_eq!(result.root.children[0].text(), Some("Hello, World!"));
//! assert_eq!(result.render(&result.root), "<p class='greeting'>Hello, World!</p>");
//! ```

/// Parse errors and their kinds.
pub mod error;
/// Document driver and scanners.
pub mod parser;
/// Rune classes shared by the scanners.
pub mod runes;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{ParseResult, parse, parse_runes, trim};
pub use tagdoc_dom::{TEXT_ATTRIBUTE_KEY, TEXT_TAG_NAME, Tag};
