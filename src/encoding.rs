// file: src/encoding.rs
// version: 1.0.0
// guid: 6ffd96f7-70af-4047-9adb-56f97731a5a4

//! Decoding of captured command output

use encoding_rs::{Encoding, UTF_8};
use std::fmt;

/// Text encoding applied to captured standard output
#[derive(Clone, Copy)]
pub struct OutputEncoding(&'static Encoding);

impl OutputEncoding {
    /// Resolve a WHATWG encoding label such as `utf-8`, `latin1` or `shift_jis`
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self)
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode `bytes` and split the text into lines.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Returns `None` when the
    /// bytes are malformed for this encoding.
    pub fn decode_lines(&self, bytes: &[u8]) -> Option<Vec<String>> {
        let text = self
            .0
            .decode_without_bom_handling_and_without_replacement(bytes)?;
        Some(split_lines(&text))
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

impl Default for OutputEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl PartialEq for OutputEncoding {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for OutputEncoding {}

impl fmt::Debug for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
