//! Read-only consumers of parsed tag trees.
//!
//! # Scope
//!
//! - **Statistics** - tag, text and attribute frequency counts
//! - **JSON export** - nested objects with stable attribute ordering
//!
//! Both only look at tag names, attributes, children and the text leaf
//! sentinel; offsets and the source document are never consulted.

pub mod json;
pub mod stats;

pub use json::{ExportError, ExportOptions, to_json_string, to_json_value};
pub use stats::{Stats, calculate_stats};
