//! Block emission: the exit point every status module goes through.
//!
//! A module renders its text, picks a [`ColorRole`] and hands both to
//! [`BlockEmitter::emit`]. The emitter resolves the color for the active
//! format and builds a [`RenderedBlock`]:
//!
//! - i3bar: the color, instance tag and progress stay separate fields of the
//!   record, serialized later as one JSON object.
//! - text formats: the color syntax is embedded in `full_text`. Only xmobar
//!   closes the colored region per block (`</fc>`); the terminal reset is
//!   written once at the end of the line by [`BarWriter`](crate::BarWriter).
//!
//! When the line is complete, [`BlockEmitter::finish`] joins text blocks with
//! the separator (itself colored with the `Separator` role, module overrides
//! never apply to it) or hands back the records for the structured protocol.
//!
//! # Example
//!
//! ```rust
//! use barline_render::{BlockEmitter, BlockSpec, ColorRole, EmittedLine, OutputFormat, RenderContext, Section};
//!
//! let ctx = RenderContext::new(OutputFormat::Xmobar)
//!     .with_general(Section::new().with("color_good", "#00FF00"))
//!     .with_separator(" | ");
//!
//! let mut emitter = BlockEmitter::new(&ctx);
//! emitter.emit(None, BlockSpec::new("VPN: yes").role(ColorRole::Good));
//! emitter.emit(None, BlockSpec::new("12:00"));
//!
//! match emitter.finish() {
//!     EmittedLine::Text(line) => assert_eq!(line, "<fc=#00FF00>VPN: yes</fc> | 12:00"),
//!     EmittedLine::Blocks(_) => unreachable!(),
//! }
//! ```

use serde::Serialize;

use crate::context::RenderContext;
use crate::output::OutputFormat;
use crate::style::{end_color, ColorRole, ColorSource};

/// One output record, created per module invocation and written once.
///
/// For text formats only `full_text` is meaningful and already contains any
/// color syntax. For the structured protocol every populated field becomes a
/// JSON key; `None` fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub full_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_colors: Option<String>,
}

/// What a module asks the emitter to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec<'a> {
    pub text: &'a str,
    pub role: ColorRole,
    pub name: Option<&'a str>,
    pub instance: Option<&'a str>,
    pub progress: Option<u8>,
}

impl<'a> BlockSpec<'a> {
    /// A block with the `Default` color role and no metadata.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            role: ColorRole::Default,
            name: None,
            instance: None,
            progress: None,
        }
    }

    pub fn role(mut self, role: ColorRole) -> Self {
        self.role = role;
        self
    }

    /// Module name reported in the `name` field (click events).
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Instance tag reported in the `instance` field (click events).
    pub fn instance(mut self, instance: &'a str) -> Self {
        self.instance = Some(instance);
        self
    }

    /// Progress percentage, 0-100.
    pub fn progress(mut self, percent: u8) -> Self {
        self.progress = Some(percent.min(100));
        self
    }
}

/// A finished bar line, ready for [`BarWriter`](crate::BarWriter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmittedLine {
    /// Records for the structured protocol.
    Blocks(Vec<RenderedBlock>),
    /// Separator-joined text for every other format.
    Text(String),
}

/// Collects the blocks of one bar line in module order.
#[derive(Debug)]
pub struct BlockEmitter<'a> {
    ctx: &'a RenderContext,
    blocks: Vec<RenderedBlock>,
}

impl<'a> BlockEmitter<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self {
            ctx,
            blocks: Vec::new(),
        }
    }

    /// Emits one block. `module` is the module's color override section.
    pub fn emit(&mut self, module: Option<&dyn ColorSource>, spec: BlockSpec<'_>) -> &RenderedBlock {
        let block = self.build(module, spec);
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    fn build(&self, module: Option<&dyn ColorSource>, spec: BlockSpec<'_>) -> RenderedBlock {
        let resolver = self.ctx.resolver(module);
        let color = resolver.resolve_color(spec.role, true);

        if !self.ctx.format().is_structured() {
            return RenderedBlock {
                full_text: wrap_color(self.ctx.format(), color.as_deref(), spec.text),
                ..Default::default()
            };
        }

        let (progress, progress_colors) = match spec.progress {
            Some(percent) if self.ctx.progress_enabled() => (
                Some(percent),
                resolver.resolve_progress_color(spec.role, color.as_deref(), true),
            ),
            _ => (None, None),
        };

        RenderedBlock {
            name: spec.name.map(str::to_string),
            instance: spec.instance.map(str::to_string),
            full_text: spec.text.to_string(),
            color,
            markup: self.ctx.markup().protocol_name(),
            progress,
            progress_colors,
        }
    }

    /// The context blocks are rendered for.
    pub fn context(&self) -> &'a RenderContext {
        self.ctx
    }

    /// Blocks emitted so far.
    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Completes the line.
    pub fn finish(self) -> EmittedLine {
        if self.ctx.format().is_structured() {
            return EmittedLine::Blocks(self.blocks);
        }

        let separator = self.colored_separator();
        let mut line = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                line.push_str(&separator);
            }
            line.push_str(&block.full_text);
        }
        EmittedLine::Text(line)
    }

    /// The separator with its own color applied.
    ///
    /// Unlike blocks, a colored separator is always closed with the format's
    /// end sequence, which for terminals is the reset.
    fn colored_separator(&self) -> String {
        let separator = self.ctx.separator();
        if separator.is_empty() {
            return String::new();
        }

        match self.ctx.resolver(None).resolve_color(ColorRole::Separator, false) {
            Some(begin) => format!("{}{}{}", begin, separator, end_color(self.ctx.format())),
            None => separator.to_string(),
        }
    }
}

/// Embeds a begin sequence (and the xmobar terminator) around `text`.
fn wrap_color(format: OutputFormat, begin: Option<&str>, text: &str) -> String {
    match begin {
        None => text.to_string(),
        Some(begin) => {
            let end = if format == OutputFormat::Xmobar {
                end_color(format)
            } else {
                ""
            };
            let mut out = String::with_capacity(begin.len() + text.len() + end.len());
            out.push_str(begin);
            out.push_str(text);
            out.push_str(end);
            out
        }
    }
}
