//! # JSON Output Module / JSON 输出模块
//!
//! Renders values as JSON text with `", "` and `": "` separators on a single
//! line, or indented when requested. Non-ASCII characters are escaped as
//! `\uXXXX` unless the style says otherwise.
//!
//! 将值渲染为 JSON 文本：默认单行并使用 `", "` 和 `": "` 分隔符，
//! 也可按需缩进。除非样式另有说明，非 ASCII 字符会被转义为 `\uXXXX`。

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io::{self, Write};

use crate::core::config::JsonStyle;

/// A `serde_json` formatter implementing [`JsonStyle`].
struct StyledFormatter {
    indent: Option<usize>,
    ensure_ascii: bool,
    current_indent: usize,
    has_value: bool,
}

impl StyledFormatter {
    fn new(style: &JsonStyle) -> Self {
        Self {
            indent: style.indent,
            ensure_ascii: style.ensure_ascii,
            current_indent: 0,
            has_value: false,
        }
    }

    fn write_indent<W: ?Sized + Write>(&self, writer: &mut W) -> io::Result<()> {
        if let Some(width) = self.indent {
            for _ in 0..self.current_indent * width {
                writer.write_all(b" ")?;
            }
        }
        Ok(())
    }

    fn begin_collection<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        open: &[u8],
    ) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(open)
    }

    fn end_collection<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        close: &[u8],
    ) -> io::Result<()> {
        self.current_indent -= 1;
        if self.indent.is_some() && self.has_value {
            writer.write_all(b"\n")?;
            self.write_indent(writer)?;
        }
        writer.write_all(close)
    }

    fn begin_item<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if self.indent.is_some() {
            let separator: &[u8] = if first { b"\n" } else { b",\n" };
            writer.write_all(separator)?;
            self.write_indent(writer)
        } else if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

impl Formatter for StyledFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.begin_collection(writer, b"[")
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.end_collection(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.begin_item(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.begin_collection(writer, b"{")
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.end_collection(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.begin_item(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.ensure_ascii || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Recursively rebuilds every object with its keys in sorted order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Renders `value` as JSON text in the given style.
///
/// # Examples
/// ```
/// use langcodex::core::config::JsonStyle;
/// use langcodex::reporting::json::render;
/// use serde_json::json;
///
/// let value = json!({"b": 2, "a": ["ت", "ツ", "😊"]});
/// assert_eq!(
///     render(&value, &JsonStyle::raw_unicode()).unwrap(),
///     r#"{"b": 2, "a": ["ت", "ツ", "😊"]}"#
/// );
/// ```
pub fn render<T: Serialize + ?Sized>(value: &T, style: &JsonStyle) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, StyledFormatter::new(style));

    if style.sort_keys {
        sort_keys(serde_json::to_value(value)?).serialize(&mut serializer)?;
    } else {
        value.serialize(&mut serializer)?;
    }

    // The formatter only ever writes ASCII or fragments of valid UTF-8 input.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_astral_characters_as_surrogate_pairs() {
        let rendered = render("😊", &JsonStyle::default()).unwrap();
        assert_eq!(rendered, r#""\ud83d\ude0a""#);
    }

    #[test]
    fn empty_collections_stay_compact_when_indented() {
        let style = JsonStyle {
            indent: Some(4),
            ..JsonStyle::default()
        };
        assert_eq!(
            render(&json!({"a": {}, "b": []}), &style).unwrap(),
            "{\n    \"a\": {},\n    \"b\": []\n}"
        );
    }
}
