//! JSON export of tag trees.
//!
//! Text leaves become bare strings. Every other tag becomes an object with
//! `"_name"` first, then its attributes in sorted key order, then
//! `"_children"` when it has any children:
//!
//! ```json
//! {
//!     "_name": "p",
//!     "class": "greeting",
//!     "_children": [
//!         "Hello, World!"
//!     ]
//! }
//! ```

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use tagdoc_dom::Tag;
use thiserror::Error;

/// Object field holding the tag name.
pub const NAME_FIELD: &str = "_name";

/// Object field holding the children array.
pub const CHILDREN_FIELD: &str = "_children";

/// Formatting options for [`to_json_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Errors raised while exporting a tree.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A `<text>` leaf had no `text` attribute to render.
    #[error("text tag at offset {start} is missing its text attribute")]
    MissingText {
        /// Start offset of the offending leaf.
        start: usize,
    },
    /// The JSON writer failed.
    #[error("failed to write JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The JSON writer produced bytes that are not UTF-8.
    #[error("JSON output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Convert the tree rooted at `tag` into a JSON value.
///
/// Attributes named [`NAME_FIELD`] or [`CHILDREN_FIELD`] are left out so they
/// cannot shadow the reserved fields.
///
/// # Errors
///
/// Returns [`ExportError::MissingText`] when a text leaf has no content.
pub fn to_json_value(tag: &Tag) -> Result<Value, ExportError> {
    if tag.is_text() {
        let text = tag.text().ok_or(ExportError::MissingText { start: tag.start })?;
        return Ok(Value::String(text.to_string()));
    }

    let mut object = Map::new();
    let _ = object.insert(NAME_FIELD.to_string(), Value::String(tag.name.clone()));

    if let Some(attributes) = &tag.attributes {
        let mut pairs: Vec<_> = attributes
            .iter()
            .filter(|(key, _)| key.as_str() != NAME_FIELD && key.as_str() != CHILDREN_FIELD)
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in pairs {
            let _ = object.insert(key.clone(), Value::String(value.clone()));
        }
    }

    if !tag.children.is_empty() {
        let children = tag
            .children
            .iter()
            .map(to_json_value)
            .collect::<Result<Vec<_>, _>>()?;
        let _ = object.insert(CHILDREN_FIELD.to_string(), Value::Array(children));
    }

    Ok(Value::Object(object))
}

/// Convert the tree rooted at `tag` into pretty-printed JSON text.
///
/// # Errors
///
/// Returns an error when a text leaf has no content or the writer fails.
pub fn to_json_string(tag: &Tag, options: &ExportOptions) -> Result<String, ExportError> {
    let value = to_json_value(tag)?;
    let indent = " ".repeat(options.indent);

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}
