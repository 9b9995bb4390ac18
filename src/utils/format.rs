//! Tab-indented JSON output in the layout Postman exports are kept in.
//!
//! Wraps `serde_json`'s `PrettyFormatter` and optionally writes every
//! character outside printable ASCII as a lowercase `\uXXXX` escape.

use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

pub struct CollectionFormatter {
    inner: PrettyFormatter<'static>,
    escape_non_ascii: bool,
}

impl CollectionFormatter {
    pub fn new(escape_non_ascii: bool) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"\t"),
            escape_non_ascii,
        }
    }
}

impl Formatter for CollectionFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    // 引號、反斜線與控制字元已由 serde_json 轉義，這裡只會看到其餘字元
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.escape_non_ascii || fragment.bytes().all(|b| (b' '..=b'~').contains(&b)) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
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

/// Render `value` as tab-indented JSON without a trailing newline.
pub fn to_collection_bytes<T: Serialize + ?Sized>(value: &T, escape_non_ascii: bool) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, CollectionFormatter::new(escape_non_ascii));
    value.serialize(&mut serializer)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &serde_json::Value, escape: bool) -> String {
        String::from_utf8(to_collection_bytes(value, escape).unwrap()).unwrap()
    }

    #[test]
    fn test_tab_indentation() {
        let value = json!({"name": "API", "item": [{"name": "a", "response": []}]});
        let expected = "{\n\t\"name\": \"API\",\n\t\"item\": [\n\t\t{\n\t\t\t\"name\": \"a\",\n\t\t\t\"response\": []\n\t\t}\n\t]\n}";
        assert_eq!(render(&value, true), expected);
    }

    #[test]
    fn test_escapes_non_ascii() {
        let value = json!({"name": "Café ☕ 😀"});
        assert_eq!(
            render(&value, true),
            "{\n\t\"name\": \"Caf\\u00e9 \\u2615 \\ud83d\\ude00\"\n}"
        );
        assert_eq!(render(&value, false), "{\n\t\"name\": \"Café ☕ 😀\"\n}");
    }

    #[test]
    fn test_escapes_delete_character() {
        let value = json!("a\u{7f}b");
        assert_eq!(render(&value, true), "\"a\\u007fb\"");
    }

    #[test]
    fn test_control_characters_keep_standard_escapes() {
        let value = json!("line\n\"quoted\"\ttab");
        assert_eq!(render(&value, true), "\"line\\n\\\"quoted\\\"\\ttab\"");
    }
}
