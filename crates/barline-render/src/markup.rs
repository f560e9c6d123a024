//! Pango markup escaping for substituted values.
//!
//! When markup is enabled the consumer parses block text as Pango markup, so
//! any value that comes from the outside world (a title, a path, a formatted
//! date) must be escaped before it lands in the text. Literal template text is
//! the user's own markup and is never passed through here.
//!
//! The entity table follows GLib's `g_markup_escape_text`:
//!
//! | Input | Output |
//! |-------|--------|
//! | `&` | `&amp;` |
//! | `<` | `&lt;` |
//! | `>` | `&gt;` |
//! | `'` | `&apos;` |
//! | `"` | `&quot;` |
//! | `0x01..=0x08`, `0x0B..=0x0C`, `0x0E..=0x1F` | `&#x<hex>;` |
//!
//! Tab, newline and carriage return pass through, as does everything else.
//!
//! # Example
//!
//! ```rust
//! use barline_render::{escape, MarkupMode};
//!
//! assert_eq!(escape("a < b", MarkupMode::Pango), "a &lt; b");
//! assert_eq!(escape("a < b", MarkupMode::None), "a < b");
//! ```

use std::fmt::Write;

use crate::output::MarkupMode;

/// Returns the named entity for a reserved character.
fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\'' => Some("&apos;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// True for the C0 controls that Pango rejects unless they are numeric
/// references (everything below 0x20 except NUL, tab, newline and CR).
fn is_restricted_control(ch: char) -> bool {
    matches!(ch, '\u{01}'..='\u{08}' | '\u{0B}'..='\u{0C}' | '\u{0E}'..='\u{1F}')
}

/// Appends `source` to `out`, escaped according to `mode`.
///
/// Returns the number of bytes appended. The input is processed one
/// character at a time, so the output is never shorter than the input.
pub fn escape_append(source: &str, out: &mut String, mode: MarkupMode) -> usize {
    let start = out.len();

    if mode == MarkupMode::None {
        out.push_str(source);
        return out.len() - start;
    }

    for ch in source.chars() {
        if let Some(entity) = entity(ch) {
            out.push_str(entity);
        } else if is_restricted_control(ch) {
            // Writing to a String cannot fail.
            let _ = write!(out, "&#x{:x};", ch as u32);
        } else {
            out.push(ch);
        }
    }

    out.len() - start
}

/// Returns an escaped copy of `source`.
pub fn escape(source: &str, mode: MarkupMode) -> String {
    let mut out = String::with_capacity(source.len());
    escape_append(source, &mut out, mode);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_table() {
        assert_eq!(escape("&", MarkupMode::Pango), "&amp;");
        assert_eq!(escape("<", MarkupMode::Pango), "&lt;");
        assert_eq!(escape(">", MarkupMode::Pango), "&gt;");
        assert_eq!(escape("'", MarkupMode::Pango), "&apos;");
        assert_eq!(escape("\"", MarkupMode::Pango), "&quot;");
    }

    #[test]
    fn test_control_characters_become_numeric_references() {
        assert_eq!(escape("\u{01}", MarkupMode::Pango), "&#x1;");
        assert_eq!(escape("\u{08}", MarkupMode::Pango), "&#x8;");
        assert_eq!(escape("\u{0B}\u{0C}", MarkupMode::Pango), "&#xb;&#xc;");
        assert_eq!(escape("\u{1B}", MarkupMode::Pango), "&#x1b;");
        assert_eq!(escape("\u{1F}", MarkupMode::Pango), "&#x1f;");
    }

    #[test]
    fn test_whitespace_controls_pass_through() {
        assert_eq!(escape("a\tb\nc\rd", MarkupMode::Pango), "a\tb\nc\rd");
    }

    #[test]
    fn test_none_mode_is_verbatim() {
        let input = "<b>bold & \"quoted\"</b>\u{01}";
        assert_eq!(escape(input, MarkupMode::None), input);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape("Zürich → 東京", MarkupMode::Pango), "Zürich → 東京");
    }

    #[test]
    fn test_append_reports_bytes_written() {
        let mut out = String::from("prefix:");
        let written = escape_append("a&b", &mut out, MarkupMode::Pango);
        assert_eq!(out, "prefix:a&amp;b");
        assert_eq!(written, "a&amp;b".len());
    }

    #[test]
    fn test_append_empty_source() {
        let mut out = String::from("x");
        assert_eq!(escape_append("", &mut out, MarkupMode::Pango), 0);
        assert_eq!(out, "x");
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(
            escape("Tom & Jerry's <show>", MarkupMode::Pango),
            "Tom &amp; Jerry&apos;s &lt;show&gt;"
        );
    }
}
