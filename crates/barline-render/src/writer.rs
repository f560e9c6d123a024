//! Framing finished lines for the output stream.
//!
//! [`BarWriter`] owns the stream the bar consumer reads. It writes whatever
//! preamble the format needs once, then one framed line per call:
//!
//! - i3bar: `{"version":1}` header, then an endless JSON array with one
//!   array of blocks per line (`,` before every line but the first)
//! - term: saves the cursor and hides it once; every line restores the
//!   cursor, clears the line and ends with the color reset
//! - everything else: the text line as is
//!
//! Every line ends with a newline and a flush.
//!
//! The cursor stays hidden for the whole terminal session. Keep a
//! [`CursorGuard`] alive for as long as the bar runs so it is shown again on
//! exit.

use std::io::Write;

use crate::block::EmittedLine;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::style::end_color;

/// Saves the cursor position and hides the cursor.
pub const TERM_SESSION_START: &str = "\x1b[s\x1b[?25l";
/// Restores the saved cursor position and clears the line.
pub const TERM_LINE_START: &str = "\x1b[u\x1b[K";
/// Shows the cursor again.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Writes framed bar lines to a stream.
#[derive(Debug)]
pub struct BarWriter<W: Write> {
    out: W,
    format: OutputFormat,
    lines: usize,
}

impl<W: Write> BarWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            lines: 0,
        }
    }

    /// Writes the per-session preamble for the format.
    pub fn start(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::StatusProtocol => {
                self.out.write_all(b"{\"version\":1}\n[\n")?;
            }
            OutputFormat::Terminal => {
                self.out.write_all(TERM_SESSION_START.as_bytes())?;
            }
            _ => {}
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes one complete line and flushes.
    pub fn write_line(&mut self, line: &EmittedLine) -> Result<()> {
        match line {
            EmittedLine::Blocks(blocks) => {
                if self.lines > 0 {
                    self.out.write_all(b",")?;
                }
                serde_json::to_writer(&mut self.out, blocks)?;
            }
            EmittedLine::Text(text) => {
                if self.format == OutputFormat::Terminal {
                    self.out.write_all(TERM_LINE_START.as_bytes())?;
                }
                self.out.write_all(text.as_bytes())?;
                if self.format == OutputFormat::Terminal {
                    self.out.write_all(end_color(self.format).as_bytes())?;
                }
            }
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;

        self.lines += 1;
        tracing::trace!(lines = self.lines, "wrote bar line");
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes the show-cursor sequence.
pub fn reset_cursor<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.write_all(SHOW_CURSOR.as_bytes())?;
    out.flush()
}

/// Shows the cursor again when dropped, if the format hid it.
#[derive(Debug)]
pub struct CursorGuard {
    active: bool,
}

impl CursorGuard {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            active: format == OutputFormat::Terminal,
        }
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = reset_cursor(&mut std::io::stdout()) {
                tracing::warn!(%err, "could not restore the cursor");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::RenderedBlock;

    fn written(writer: BarWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_status_protocol_framing() {
        let mut writer = BarWriter::new(Vec::new(), OutputFormat::StatusProtocol);
        writer.start().unwrap();
        let line = EmittedLine::Blocks(vec![RenderedBlock {
            full_text: "a".to_string(),
            ..Default::default()
        }]);
        writer.write_line(&line).unwrap();
        writer.write_line(&line).unwrap();

        assert_eq!(
            written(writer),
            "{\"version\":1}\n[\n[{\"full_text\":\"a\"}]\n,[{\"full_text\":\"a\"}]\n"
        );
    }

    #[test]
    fn test_terminal_framing() {
        let mut writer = BarWriter::new(Vec::new(), OutputFormat::Terminal);
        writer.start().unwrap();
        writer.write_line(&EmittedLine::Text("x".to_string())).unwrap();

        assert_eq!(written(writer), "\x1b[s\x1b[?25l\x1b[u\x1b[Kx\x1b[0m\n");
    }

    #[test]
    fn test_plain_framing() {
        let mut writer = BarWriter::new(Vec::new(), OutputFormat::Dzen2);
        writer.start().unwrap();
        writer.write_line(&EmittedLine::Text("x | y".to_string())).unwrap();
        assert_eq!(writer.lines_written(), 1);
        assert_eq!(written(writer), "x | y\n");
    }

    #[test]
    fn test_reset_cursor() {
        let mut out = Vec::new();
        reset_cursor(&mut out).unwrap();
        assert_eq!(out, b"\x1b[?25h");
    }

    #[test]
    fn test_cursor_guard_only_for_terminal() {
        let term = CursorGuard::new(OutputFormat::Terminal);
        assert!(term.active);
        // Dropping it would write to the test's stdout.
        std::mem::forget(term);

        let guard = CursorGuard::new(OutputFormat::Lemonbar);
        assert!(!guard.active);
    }
}
