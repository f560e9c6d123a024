//! Process-wide render settings.
//!
//! [`RenderContext`] bundles everything that is fixed at startup: the output
//! format, the markup mode, the two global switches (colors, progress bars),
//! the general color section and the block separator. It is built once and
//! shared by reference with every module for the lifetime of the process.
//!
//! # Example
//!
//! ```rust
//! use barline_render::{MarkupMode, OutputFormat, RenderContext, Section};
//!
//! let ctx = RenderContext::new(OutputFormat::Xmobar)
//!     .with_markup(MarkupMode::None)
//!     .with_general(Section::new().with("color_good", "#00FF00"));
//!
//! assert!(ctx.colors_enabled());
//! assert_eq!(ctx.separator(), "<fc=#333333> | </fc>");
//! ```

use crate::output::{MarkupMode, OutputFormat};
use crate::style::{ColorResolver, ColorSource, Section};

/// Settings shared by every render call.
#[derive(Debug, Clone)]
pub struct RenderContext {
    format: OutputFormat,
    markup: MarkupMode,
    colors: bool,
    progress_bars: bool,
    general: Section,
    separator: Option<String>,
}

impl RenderContext {
    /// Creates a context for `format` with colors on, progress bars off, no
    /// markup and an empty general section.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            markup: MarkupMode::None,
            colors: true,
            progress_bars: false,
            general: Section::new(),
            separator: None,
        }
    }

    /// Sets the markup mode.
    pub fn with_markup(mut self, markup: MarkupMode) -> Self {
        self.markup = markup;
        self
    }

    /// Enables or disables color output globally.
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Enables or disables progress bar metadata globally.
    pub fn with_progress_bars(mut self, enabled: bool) -> Self {
        self.progress_bars = enabled;
        self
    }

    /// Sets the general color section.
    pub fn with_general(mut self, general: Section) -> Self {
        self.general = general;
        self
    }

    /// Overrides the block separator. An empty string disables separators.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn markup(&self) -> MarkupMode {
        self.markup
    }

    /// True when colors are switched on and the format can carry them.
    pub fn colors_enabled(&self) -> bool {
        self.colors && self.format != OutputFormat::None
    }

    /// True when progress metadata is switched on and the format can carry it.
    pub fn progress_enabled(&self) -> bool {
        self.progress_bars && self.format == OutputFormat::StatusProtocol
    }

    /// The raw color switch, regardless of format.
    pub fn colors_switch(&self) -> bool {
        self.colors
    }

    /// The general configuration section.
    pub fn general(&self) -> &Section {
        &self.general
    }

    /// The separator placed between blocks in text formats.
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| self.format.default_separator())
    }

    /// Returns a color resolver for a module with the given override section.
    pub fn resolver<'a>(&'a self, module: Option<&'a dyn ColorSource>) -> ColorResolver<'a> {
        ColorResolver::new(self, module)
    }
}
