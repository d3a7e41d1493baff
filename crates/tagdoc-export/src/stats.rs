//! Tag and attribute frequency counting.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use tagdoc_dom::Tag;

/// Frequency counts gathered from a tag tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of structural (non-text) tags.
    pub total_tags: usize,
    /// Number of text leaves.
    pub total_text_contents: usize,
    /// Number of attributes across all structural tags.
    pub total_attributes: usize,
    /// Structural tag name to occurrence count.
    pub tag_histogram: BTreeMap<String, usize>,
    /// Attribute key to occurrence count.
    pub attribute_histogram: BTreeMap<String, usize>,
}

impl Stats {
    /// Render a human-readable report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Tag Document Statistics:");
        let _ = writeln!(out, "------------------------");
        let _ = writeln!(out, "Total Tags: {}", self.total_tags);
        let _ = writeln!(out, "Total Text Contents: {}", self.total_text_contents);
        let _ = writeln!(out, "Total Attributes: {}", self.total_attributes);

        let _ = writeln!(out, "\nTag Histogram:");
        write_histogram(&mut out, &self.tag_histogram);

        let _ = writeln!(out, "\nAttribute Histogram:");
        write_histogram(&mut out, &self.attribute_histogram);

        out
    }

    fn visit(&mut self, tag: &Tag) {
        self.total_tags += 1;
        *self.tag_histogram.entry(tag.name.clone()).or_insert(0) += 1;

        if let Some(attributes) = &tag.attributes {
            for key in attributes.keys() {
                self.total_attributes += 1;
                *self.attribute_histogram.entry(key.clone()).or_insert(0) += 1;
            }
        }

        for child in &tag.children {
            if child.is_text() {
                self.total_text_contents += 1;
            } else {
                self.visit(child);
            }
        }
    }
}

fn write_histogram(out: &mut String, histogram: &BTreeMap<String, usize>) {
    for (key, count) in histogram {
        let key = if key.is_empty() { "(nameless)" } else { key.as_str() };
        let _ = writeln!(out, "\t{key}\t{count}");
    }
}

/// Count tags, text leaves and attributes in the tree rooted at `root`.
///
/// Text leaves are counted as content; their reserved attribute is not
/// counted and they are never descended into.
#[must_use]
pub fn calculate_stats(root: &Tag) -> Stats {
    let mut stats = Stats::default();
    if root.is_text() {
        stats.total_text_contents = 1;
    } else {
        stats.visit(root);
    }
    stats
}
