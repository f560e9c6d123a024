//! # Barline Render - Status Bar Block Formatting
//!
//! `barline-render` turns a format template plus named values into the text of
//! one status bar block, colored in whatever syntax the bar consumer speaks:
//! the i3bar JSON protocol, dzen2, xmobar, lemonbar or a plain terminal.
//!
//! ## Core Concepts
//!
//! - [`OutputFormat`]: the consumer, chosen once at startup
//! - [`MarkupMode`]: whether substituted values are Pango-escaped
//! - [`RenderContext`]: process-wide settings (format, markup, switches, colors)
//! - [`ColorRole`]: semantic block color (good, bad, degraded, ...)
//! - [`Placeholders`] / [`render`]: `%name` template substitution
//! - [`progress_percent`]: elapsed share of an hour, day, week, ...
//! - [`BlockEmitter`]: the single exit point every module uses
//! - [`BarWriter`]: frames finished lines on the output stream
//!
//! ## Pipeline
//!
//! ```text
//! module values ──► render(template) ──► BlockEmitter::emit ──► BarWriter
//!                      │ escape values        │ resolve color
//!                      ▼                      ▼
//!                   markup.rs              style/color.rs
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use barline_render::{
//!     render, BarWriter, BlockEmitter, BlockSpec, ColorRole, MarkupMode, OutputFormat,
//!     Placeholders, RenderContext, Section,
//! };
//!
//! let ctx = RenderContext::new(OutputFormat::Lemonbar)
//!     .with_general(Section::new().with("color_good", "#00FF00"));
//!
//! let text = render(
//!     "%title: %status",
//!     &Placeholders::new().add("title", "VPN").add("status", "yes"),
//!     ctx.markup(),
//! );
//!
//! let mut emitter = BlockEmitter::new(&ctx);
//! emitter.emit(None, BlockSpec::new(&text).role(ColorRole::Good));
//!
//! let mut writer = BarWriter::new(Vec::new(), ctx.format());
//! writer.start().unwrap();
//! writer.write_line(&emitter.finish()).unwrap();
//!
//! assert_eq!(writer.into_inner(), b"%{F#00FF00}VPN: yes\n");
//! ```

pub mod block;
pub mod context;
mod error;
pub mod markup;
pub mod output;
pub mod prelude;
pub mod progress;
pub mod style;
pub mod template;
pub mod writer;

// Error type
pub use error::{RenderError, Result};

// Output selection
pub use context::RenderContext;
pub use output::{MarkupMode, OutputFormat};

// Colors
pub use style::{
    begin_color, end_color, terminal_color_code, ColorResolver, ColorRole, ColorSource, Section,
    PROGRESS_DEFAULT_BG_KEY,
};

// Text
pub use markup::{escape, escape_append};
pub use template::{render, Placeholder, Placeholders};

// Progress
pub use progress::{progress_percent, BrokenDownTime, ProgressUnit};

// Blocks and lines
pub use block::{BlockEmitter, BlockSpec, EmittedLine, RenderedBlock};
pub use writer::{reset_cursor, BarWriter, CursorGuard, SHOW_CURSOR};
