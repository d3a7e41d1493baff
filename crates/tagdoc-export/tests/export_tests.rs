//! Tests for statistics and JSON export.

use serde_json::json;
use tagdoc_dom::Tag;
use tagdoc_export::{ExportError, ExportOptions, calculate_stats, to_json_string, to_json_value};

/// Helper to build a structural tag with attributes and children
fn tag(name: &str, attributes: &[(&str, &str)], children: Vec<Tag>) -> Tag {
    let mut node = Tag::new(name, 0, 0);
    for (key, value) in attributes {
        let _ = node.set_attribute(*key, *value);
    }
    node.children = children;
    node
}

/// Helper to build a text leaf
fn text(content: &str) -> Tag {
    Tag::new_text(content, 0, 0, 1)
}

fn to_json(tag: &Tag) -> String {
    to_json_string(tag, &ExportOptions::default()).unwrap()
}

// ========== statistics ==========

#[test]
fn test_stats_single_tag() {
    let stats = calculate_stats(&tag("p", &[], vec![text("Hello")]));

    assert_eq!(stats.total_tags, 1);
    assert_eq!(stats.total_text_contents, 1);
    assert_eq!(stats.total_attributes, 0);
    assert_eq!(stats.tag_histogram.get("p"), Some(&1));
    assert!(stats.attribute_histogram.is_empty());
}

#[test]
fn test_stats_nested_tree() {
    let root = tag(
        "Cool",
        &[("A", "B")],
        vec![
            tag("Cool", &[("A", "C")], vec![text("Beans!")]),
            tag("Beans", &[("B", "C")], vec![]),
        ],
    );
    let stats = calculate_stats(&root);

    assert_eq!(stats.total_tags, 3);
    assert_eq!(stats.total_text_contents, 1);
    assert_eq!(stats.total_attributes, 3);

    let tags: Vec<_> = stats.tag_histogram.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(tags, vec![("Beans", 1), ("Cool", 2)]);
    let attributes: Vec<_> = stats.attribute_histogram.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(attributes, vec![("A", 2), ("B", 1)]);
}

#[test]
fn test_stats_text_attribute_is_not_counted() {
    let stats = calculate_stats(&tag("a", &[], vec![text("x"), text("y")]));
    assert_eq!(stats.total_text_contents, 2);
    assert_eq!(stats.total_attributes, 0);
    assert!(!stats.tag_histogram.contains_key(tagdoc_dom::TEXT_TAG_NAME));
}

#[test]
fn test_stats_text_root() {
    let stats = calculate_stats(&text("alone"));
    assert_eq!(stats.total_tags, 0);
    assert_eq!(stats.total_text_contents, 1);
}

#[test]
fn test_stats_render() {
    let root = tag("a", &[("x", "1")], vec![text("hi"), tag("b", &[], vec![])]);
    let expected = concat!(
        "Tag Document Statistics:\n",
        "------------------------\n",
        "Total Tags: 2\n",
        "Total Text Contents: 1\n",
        "Total Attributes: 1\n",
        "\n",
        "Tag Histogram:\n",
        "\ta\t1\n",
        "\tb\t1\n",
        "\n",
        "Attribute Histogram:\n",
        "\tx\t1\n",
    );
    assert_eq!(calculate_stats(&root).render(), expected);
}

#[test]
fn test_stats_render_nameless_tag() {
    let rendered = calculate_stats(&tag("", &[], vec![])).render();
    assert!(rendered.contains("\t(nameless)\t1\n"));
}

#[test]
fn test_stats_serialize() {
    let stats = calculate_stats(&tag("a", &[("k", "v")], vec![]));
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(
        value,
        json!({
            "total_tags": 1,
            "total_text_contents": 0,
            "total_attributes": 1,
            "tag_histogram": { "a": 1 },
            "attribute_histogram": { "k": 1 },
        })
    );
}

// ========== JSON ==========

#[test]
fn test_json_text_leaf() {
    assert_eq!(to_json(&text("Hello")), "\"Hello\"");
}

#[test]
fn test_json_empty_tag() {
    assert_eq!(to_json(&tag("🐹", &[], vec![])), "{\n    \"_name\": \"🐹\"\n}");
}

#[test]
fn test_json_attributes_are_sorted() {
    let root = tag("🐹", &[("🦊", "🐶"), ("🥳", "😭")], vec![]);
    let expected = "{\n    \"_name\": \"🐹\",\n    \"🥳\": \"😭\",\n    \"🦊\": \"🐶\"\n}";
    assert_eq!(to_json(&root), expected);
}

#[test]
fn test_json_single_child() {
    let root = tag("Cool", &[], vec![text("Beans!")]);
    let expected = concat!(
        "{\n",
        "    \"_name\": \"Cool\",\n",
        "    \"_children\": [\n",
        "        \"Beans!\"\n",
        "    ]\n",
        "}",
    );
    assert_eq!(to_json(&root), expected);
}

#[test]
fn test_json_all_features() {
    let root = tag(
        "Cool",
        &[("Neat", "Attribute!")],
        vec![text("Beans!"), tag("🦊", &[("🔥", "💧")], vec![])],
    );
    let expected = concat!(
        "{\n",
        "    \"_name\": \"Cool\",\n",
        "    \"Neat\": \"Attribute!\",\n",
        "    \"_children\": [\n",
        "        \"Beans!\",\n",
        "        {\n",
        "            \"_name\": \"🦊\",\n",
        "            \"🔥\": \"💧\"\n",
        "        }\n",
        "    ]\n",
        "}",
    );
    assert_eq!(to_json(&root), expected);
}

#[test]
fn test_json_escapes_strings() {
    let root = tag("q", &[("say", "\"hi\"")], vec![text("a\\b")]);
    let value = to_json_value(&root).unwrap();
    assert_eq!(value, json!({ "_name": "q", "say": "\"hi\"", "_children": ["a\\b"] }));
    assert!(to_json(&root).contains(r#""say": "\"hi\"""#));
}

#[test]
fn test_json_reserved_attribute_names_are_skipped() {
    let root = tag("a", &[("_name", "spoof"), ("_children", "spoof"), ("ok", "1")], vec![]);
    let value = to_json_value(&root).unwrap();
    assert_eq!(value, json!({ "_name": "a", "ok": "1" }));
}

#[test]
fn test_json_custom_indent() {
    let root = tag("a", &[], vec![text("x")]);
    let compact = to_json_string(&root, &ExportOptions { indent: 2 }).unwrap();
    assert_eq!(compact, "{\n  \"_name\": \"a\",\n  \"_children\": [\n    \"x\"\n  ]\n}");
}

#[test]
fn test_json_text_leaf_without_content() {
    let mut broken = Tag::new(tagdoc_dom::TEXT_TAG_NAME, 5, 1);
    broken.end = 6;
    let root = tag("a", &[], vec![broken]);
    assert!(matches!(to_json_value(&root), Err(ExportError::MissingText { start: 5 })));
}

// ========== parsed documents ==========

#[test]
fn test_parse_then_export() {
    let result = tagdoc_parser::parse("<html lang='en'><head/><body><p>Hi</p><p>there</p></body></html>").unwrap();

    let stats = calculate_stats(&result.root);
    assert_eq!(stats.total_tags, 5);
    assert_eq!(stats.total_text_contents, 2);
    assert_eq!(stats.tag_histogram.get("p"), Some(&2));
    assert_eq!(stats.attribute_histogram.get("lang"), Some(&1));

    let value = to_json_value(&result.root).unwrap();
    assert_eq!(
        value,
        json!({
            "_name": "html",
            "lang": "en",
            "_children": [
                { "_name": "head" },
                {
                    "_name": "body",
                    "_children": [
                        { "_name": "p", "_children": ["Hi"] },
                        { "_name": "p", "_children": ["there"] },
                    ],
                },
            ],
        })
    );
}
