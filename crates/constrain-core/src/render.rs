//! # Canonical Rendering — Mirror Document Byte Production
//!
//! This module defines [`render_canonical`], the sole construction path for
//! the text of checked-in JSON mirror documents.
//!
//! ## Canonical Form
//!
//! The rendering style is fixed by two constants and is not configurable:
//!
//! - [`INDENT`] — two spaces per nesting level.
//! - [`KEY_VALUE_SEPARATOR`] — `": "` between an object key and its value,
//!   with no space before the colon.
//!
//! Every array element and object member sits on its own line. Empty
//! containers render as `{}` and `[]`. Object keys keep the insertion order
//! of the tree (the `preserve_order` feature of `serde_json` is enabled
//! workspace-wide). The returned string ends with exactly one trailing
//! newline.
//!
//! The formatter is implemented directly against `serde_json`'s
//! [`Formatter`] trait rather than by reconfiguring a stock pretty-printer,
//! so the separator and indent bytes above are the single source of truth
//! for the canonical form.
//!
//! ## Invariants
//!
//! - Rendering is deterministic: equal trees render to equal bytes.
//! - The output parses back to a tree equal to the input.
//! - Parse-then-render is idempotent on canonical text.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;

use crate::error::RenderError;

/// Indentation emitted per nesting level.
pub const INDENT: &[u8] = b"  ";

/// Separator emitted between an object key and its value.
pub const KEY_VALUE_SEPARATOR: &[u8] = b": ";

/// Render a JSON value tree in the canonical mirror-document form.
///
/// # Errors
///
/// Returns [`RenderError::SerializationFailed`] if serialization fails.
pub fn render_canonical(tree: &Value) -> Result<String, RenderError> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, MirrorFormatter::new());
    tree.serialize(&mut ser)?;
    let mut text = String::from_utf8(buf)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// The canonical pretty-printer.
///
/// Tracks the current nesting depth and whether the innermost open container
/// has emitted at least one value, which decides whether its closing bracket
/// gets its own line.
struct MirrorFormatter {
    depth: usize,
    has_value: bool,
}

impl MirrorFormatter {
    fn new() -> Self {
        Self {
            depth: 0,
            has_value: false,
        }
    }
}

fn write_indent<W>(writer: &mut W, depth: usize) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    for _ in 0..depth {
        writer.write_all(INDENT)?;
    }
    Ok(())
}

impl Formatter for MirrorFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            write_indent(writer, self.depth)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            writer.write_all(b"\n")?;
        } else {
            writer.write_all(b",\n")?;
        }
        write_indent(writer, self.depth)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            write_indent(writer, self.depth)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            writer.write_all(b"\n")?;
        } else {
            writer.write_all(b",\n")?;
        }
        write_indent(writer, self.depth)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(KEY_VALUE_SEPARATOR)
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object() {
        let tree = json!({"a": {"b": 1}});
        let rendered = render_canonical(&tree).unwrap();
        assert_eq!(rendered, "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n");
    }

    #[test]
    fn test_yaml_source_example() {
        // The canonical rendering of the document `a:\n  b: 1\n`.
        let yaml: serde_yaml::Value = serde_yaml::from_str("a:\n  b: 1\n").unwrap();
        let tree = crate::tree::yaml_to_tree(&yaml).unwrap();
        let rendered = render_canonical(&tree).unwrap();
        assert_eq!(rendered, "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n");
    }

    #[test]
    fn test_empty_object() {
        let rendered = render_canonical(&json!({})).unwrap();
        assert_eq!(rendered, "{}\n");
    }

    #[test]
    fn test_empty_array() {
        let rendered = render_canonical(&json!([])).unwrap();
        assert_eq!(rendered, "[]\n");
    }

    #[test]
    fn test_array_of_scalars() {
        let rendered = render_canonical(&json!([1, "two", true, null])).unwrap();
        assert_eq!(rendered, "[\n  1,\n  \"two\",\n  true,\n  null\n]\n");
    }

    #[test]
    fn test_array_of_objects() {
        let rendered = render_canonical(&json!([{"a": 1}, {"b": 2}])).unwrap();
        assert_eq!(
            rendered,
            "[\n  {\n    \"a\": 1\n  },\n  {\n    \"b\": 2\n  }\n]\n"
        );
    }

    #[test]
    fn test_top_level_scalar() {
        assert_eq!(render_canonical(&json!(42)).unwrap(), "42\n");
        assert_eq!(render_canonical(&json!("x")).unwrap(), "\"x\"\n");
    }

    #[test]
    fn test_string_escaping() {
        let tree = json!({"text": "line\nbreak \"quoted\" back\\slash"});
        let rendered = render_canonical(&tree).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"text\": \"line\\nbreak \\\"quoted\\\" back\\\\slash\"\n}\n"
        );
    }

    #[test]
    fn test_key_insertion_order_preserved() {
        let tree = json!({"zebra": 1, "apple": 2, "mango": 3});
        let rendered = render_canonical(&tree).unwrap();
        let z = rendered.find("zebra").unwrap();
        let a = rendered.find("apple").unwrap();
        let m = rendered.find("mango").unwrap();
        assert!(z < a && a < m, "keys reordered in: {rendered}");
    }

    #[test]
    fn test_exactly_one_trailing_newline() {
        let rendered = render_canonical(&json!({"a": [1, 2]})).unwrap();
        assert!(rendered.ends_with('\n'));
        assert!(!rendered.ends_with("\n\n"));
    }

    #[test]
    fn test_separator_has_no_leading_space() {
        let rendered = render_canonical(&json!({"key": "value"})).unwrap();
        assert!(rendered.contains("\"key\": \"value\""));
        assert!(!rendered.contains("\"key\" :"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    /// Strategy for float-free JSON trees. Floats are excluded because their
    /// text form is not guaranteed to round-trip to an equal value.
    fn json_tree() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ \\\\\"\n]{0,30}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..8).prop_map(|m| {
                    let map: serde_json::Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        /// Rendering never fails for float-free trees.
        #[test]
        fn render_never_fails(tree in json_tree()) {
            prop_assert!(render_canonical(&tree).is_ok());
        }

        /// Rendering is deterministic.
        #[test]
        fn render_deterministic(tree in json_tree()) {
            let a = render_canonical(&tree).unwrap();
            let b = render_canonical(&tree).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Output ends with exactly one newline.
        #[test]
        fn render_single_trailing_newline(tree in json_tree()) {
            let rendered = render_canonical(&tree).unwrap();
            prop_assert!(rendered.ends_with('\n'));
            prop_assert!(!rendered.ends_with("\n\n"));
        }

        /// Output parses back to a tree equal to the input.
        #[test]
        fn render_parses_back(tree in json_tree()) {
            let rendered = render_canonical(&tree).unwrap();
            let parsed: Value = serde_json::from_str(&rendered).unwrap();
            prop_assert_eq!(parsed, tree);
        }

        /// Parse-then-render of canonical text is the identity.
        #[test]
        fn render_idempotent(tree in json_tree()) {
            let first = render_canonical(&tree).unwrap();
            let parsed: Value = serde_json::from_str(&first).unwrap();
            let second = render_canonical(&parsed).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
