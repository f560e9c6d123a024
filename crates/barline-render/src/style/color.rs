//! Color resolution per output format.
//!
//! A color is found by role in the module section (when overrides are
//! allowed and the module has one) and then in the general section. The
//! found value is then translated into the consumer's own syntax:
//!
//! | Format | Begin | End (per block) |
//! |--------|-------|-----------------|
//! | i3bar | raw value, sent as the `color` field | - |
//! | dzen2 | `^fg(<color>)` | - |
//! | xmobar | `<fc=<color>>` | `</fc>` |
//! | lemonbar | `%{F<color>}` | - |
//! | term | `ESC[3<code>;1m` | - (reset once per line) |
//! | none | - | - |
//!
//! # Example
//!
//! ```rust
//! use barline_render::{ColorRole, OutputFormat, RenderContext, Section};
//!
//! let ctx = RenderContext::new(OutputFormat::Lemonbar)
//!     .with_general(Section::new().with("color_bad", "#FF0000"));
//!
//! let resolver = ctx.resolver(None);
//! assert_eq!(resolver.resolve_color(ColorRole::Bad, true).as_deref(), Some("%{F#FF0000}"));
//! assert_eq!(resolver.resolve_color(ColorRole::Good, true), None);
//! ```

use crate::context::RenderContext;
use crate::output::OutputFormat;

use super::role::{ColorRole, PROGRESS_DEFAULT_BG_KEY};
use super::source::ColorSource;

/// Resolves role colors for one module against the process-wide context.
#[derive(Clone, Copy)]
pub struct ColorResolver<'a> {
    ctx: &'a RenderContext,
    module: Option<&'a dyn ColorSource>,
}

impl std::fmt::Debug for ColorResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorResolver")
            .field("format", &self.ctx.format())
            .field("has_module_section", &self.module.is_some())
            .finish()
    }
}

impl<'a> ColorResolver<'a> {
    /// Creates a resolver. `module` is the module's own override section.
    pub fn new(ctx: &'a RenderContext, module: Option<&'a dyn ColorSource>) -> Self {
        Self { ctx, module }
    }

    /// Two-tier lookup: module section first (if allowed), then general.
    ///
    /// A value present in the module section wins even when it is empty.
    fn lookup(&self, key: &str, allow_module_override: bool) -> Option<&'a str> {
        let module = if allow_module_override {
            self.module.and_then(|section| section.lookup(key))
        } else {
            None
        };
        module.or_else(|| self.ctx.general().lookup(key))
    }

    /// Returns the bytes that start colored text for `role`, or `None` if no
    /// color applies.
    ///
    /// For the structured protocol the raw configured value is returned; the
    /// consumer interprets it itself.
    pub fn resolve_color(&self, role: ColorRole, allow_module_override: bool) -> Option<String> {
        if !self.ctx.colors_enabled() {
            return None;
        }

        let color = self.lookup(role.text_key(), allow_module_override)?;
        if color.is_empty() {
            return None;
        }

        begin_color(self.ctx.format(), color)
    }

    /// Returns the progress bar colors for `role`.
    ///
    /// Only produces a value when colors and progress bars are both on and
    /// the format is the structured protocol. Without an explicit setting,
    /// `"<fallback> <progress_color_default_bg>"` is synthesized with `-`
    /// standing in for either missing half. An explicitly empty setting
    /// disables progress colors outright.
    pub fn resolve_progress_color(
        &self,
        role: ColorRole,
        fallback: Option<&str>,
        allow_module_override: bool,
    ) -> Option<String> {
        if !self.ctx.colors_switch() || !self.ctx.progress_enabled() {
            return None;
        }

        match self.lookup(role.progress_key(), allow_module_override) {
            None => {
                let bg = self.ctx.general().lookup(PROGRESS_DEFAULT_BG_KEY);
                Some(format!("{} {}", fallback.unwrap_or("-"), bg.unwrap_or("-")))
            }
            Some("") => None,
            Some(colors) => Some(colors.to_string()),
        }
    }

    /// The terminator for colored text in this format.
    pub fn end_color(&self) -> &'static str {
        end_color(self.ctx.format())
    }
}

/// Translates a configured color into the begin sequence for `format`.
pub fn begin_color(format: OutputFormat, color: &str) -> Option<String> {
    match format {
        OutputFormat::None => None,
        OutputFormat::StatusProtocol => Some(color.to_string()),
        OutputFormat::Dzen2 => Some(format!("^fg({})", color)),
        OutputFormat::Xmobar => Some(format!("<fc={}>", color)),
        OutputFormat::Lemonbar => Some(format!("%{{F{}}}", color)),
        OutputFormat::Terminal => Some(format!("\x1b[3{};1m", terminal_color_code(color))),
    }
}

/// The sequence that terminates colored text.
///
/// Only xmobar closes every colored block; the terminal reset is emitted when
/// a whole line (or a separator) is finished.
pub fn end_color(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Xmobar => "</fc>",
        OutputFormat::Terminal => "\x1b[0m",
        _ => "",
    }
}

/// Rounds a `#rrggbb` color to the nearest 3-bit ANSI color index.
///
/// Each channel contributes one bit, set when the channel is at least 0x80.
/// Red is the least-significant bit and blue the most, matching the ANSI
/// color order (1 = red, 2 = green, 4 = blue). Anything that is not hex after
/// the leading character counts as zero from that point on.
pub fn terminal_color_code(color: &str) -> u8 {
    let value = parse_hex_prefix(color.get(1..).unwrap_or(""));

    let blue = (value & 0xFF) / 0x80;
    let green = (value & 0xFF00) / 0x8000;
    let red = (value & 0xFF_0000) / 0x80_0000;

    ((blue << 2) | (green << 1) | red) as u8
}

/// Parses the leading run of hex digits, saturating on overflow.
fn parse_hex_prefix(digits: &str) -> u64 {
    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u64, |acc, d| {
            acc.checked_mul(16)
                .and_then(|v| v.checked_add(u64::from(d)))
                .unwrap_or(u64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Section;

    fn ctx(format: OutputFormat) -> RenderContext {
        RenderContext::new(format).with_general(
            Section::new()
                .with("color_good", "#00FF00")
                .with("color_bad", "#FF0000")
                .with("color_degraded", ""),
        )
    }

    // =========================================================================
    // Format syntax
    // =========================================================================

    #[test]
    fn test_status_protocol_returns_raw_color() {
        let ctx = ctx(OutputFormat::StatusProtocol);
        assert_eq!(
            ctx.resolver(None).resolve_color(ColorRole::Good, true),
            Some("#00FF00".to_string())
        );
    }

    #[test]
    fn test_dzen2_syntax() {
        let ctx = ctx(OutputFormat::Dzen2);
        assert_eq!(
            ctx.resolver(None).resolve_color(ColorRole::Good, true),
            Some("^fg(#00FF00)".to_string())
        );
    }

    #[test]
    fn test_xmobar_syntax() {
        let ctx = ctx(OutputFormat::Xmobar);
        let resolver = ctx.resolver(None);
        assert_eq!(
            resolver.resolve_color(ColorRole::Good, true),
            Some("<fc=#00FF00>".to_string())
        );
        assert_eq!(resolver.end_color(), "</fc>");
    }

    #[test]
    fn test_lemonbar_syntax() {
        let ctx = ctx(OutputFormat::Lemonbar);
        assert_eq!(
            ctx.resolver(None).resolve_color(ColorRole::Bad, true),
            Some("%{F#FF0000}".to_string())
        );
    }

    #[test]
    fn test_terminal_red_from_general_section() {
        let ctx = ctx(OutputFormat::Terminal);
        let module = Section::new();
        assert_eq!(
            ctx.resolver(Some(&module)).resolve_color(ColorRole::Bad, true),
            Some("\x1b[31;1m".to_string())
        );
    }

    #[test]
    fn test_none_format_has_no_color() {
        let ctx = ctx(OutputFormat::None);
        assert_eq!(ctx.resolver(None).resolve_color(ColorRole::Good, true), None);
    }

    #[test]
    fn test_colors_disabled() {
        let ctx = ctx(OutputFormat::Dzen2).with_colors(false);
        assert_eq!(ctx.resolver(None).resolve_color(ColorRole::Good, true), None);
    }

    // =========================================================================
    // Lookup tiers
    // =========================================================================

    #[test]
    fn test_unset_role_has_no_color() {
        let ctx = ctx(OutputFormat::Dzen2);
        assert_eq!(ctx.resolver(None).resolve_color(ColorRole::Default, true), None);
    }

    #[test]
    fn test_empty_general_value_disables_color() {
        let ctx = ctx(OutputFormat::Dzen2);
        assert_eq!(ctx.resolver(None).resolve_color(ColorRole::Degraded, true), None);
    }

    #[test]
    fn test_module_section_overrides_general() {
        let ctx = ctx(OutputFormat::Dzen2);
        let module = Section::new().with("color_good", "#0000FF");
        assert_eq!(
            ctx.resolver(Some(&module)).resolve_color(ColorRole::Good, true),
            Some("^fg(#0000FF)".to_string())
        );
    }

    #[test]
    fn test_module_override_can_be_refused() {
        let ctx = ctx(OutputFormat::Dzen2);
        let module = Section::new().with("color_good", "#0000FF");
        assert_eq!(
            ctx.resolver(Some(&module)).resolve_color(ColorRole::Good, false),
            Some("^fg(#00FF00)".to_string())
        );
    }

    #[test]
    fn test_empty_module_value_disables_without_fallthrough() {
        let ctx = ctx(OutputFormat::Dzen2);
        let module = Section::new().with("color_good", "");
        assert_eq!(ctx.resolver(Some(&module)).resolve_color(ColorRole::Good, true), None);
    }

    // =========================================================================
    // Terminal rounding
    // =========================================================================

    #[test]
    fn test_terminal_color_codes() {
        assert_eq!(terminal_color_code("#000000"), 0);
        assert_eq!(terminal_color_code("#FF0000"), 1);
        assert_eq!(terminal_color_code("#00FF00"), 2);
        assert_eq!(terminal_color_code("#FFFF00"), 3);
        assert_eq!(terminal_color_code("#0000FF"), 4);
        assert_eq!(terminal_color_code("#FFFFFF"), 7);
    }

    #[test]
    fn test_terminal_rounding_threshold() {
        assert_eq!(terminal_color_code("#7F7F7F"), 0);
        assert_eq!(terminal_color_code("#808080"), 7);
    }

    #[test]
    fn test_terminal_lowercase_hex() {
        assert_eq!(terminal_color_code("#ff0000"), 1);
    }

    #[test]
    fn test_terminal_garbage_is_black() {
        assert_eq!(terminal_color_code(""), 0);
        assert_eq!(terminal_color_code("#zzzzzz"), 0);
    }

    #[test]
    fn test_end_color_per_format() {
        assert_eq!(end_color(OutputFormat::Xmobar), "</fc>");
        assert_eq!(end_color(OutputFormat::Terminal), "\x1b[0m");
        assert_eq!(end_color(OutputFormat::Dzen2), "");
        assert_eq!(end_color(OutputFormat::Lemonbar), "");
        assert_eq!(end_color(OutputFormat::StatusProtocol), "");
    }

    // =========================================================================
    // Progress colors
    // =========================================================================

    fn progress_ctx() -> RenderContext {
        RenderContext::new(OutputFormat::StatusProtocol)
            .with_progress_bars(true)
            .with_general(
                Section::new()
                    .with("progress_color_default_bg", "#222222")
                    .with("progress_colors_bad", "#FF0000 #440000")
                    .with("progress_colors_degraded", ""),
            )
    }

    #[test]
    fn test_progress_color_explicit() {
        let ctx = progress_ctx();
        assert_eq!(
            ctx.resolver(None).resolve_progress_color(ColorRole::Bad, Some("#00FF00"), true),
            Some("#FF0000 #440000".to_string())
        );
    }

    #[test]
    fn test_progress_color_synthesized_from_fallback() {
        let ctx = progress_ctx();
        assert_eq!(
            ctx.resolver(None).resolve_progress_color(ColorRole::Good, Some("#00FF00"), true),
            Some("#00FF00 #222222".to_string())
        );
    }

    #[test]
    fn test_progress_color_dashes_for_missing_halves() {
        let ctx = RenderContext::new(OutputFormat::StatusProtocol).with_progress_bars(true);
        assert_eq!(
            ctx.resolver(None).resolve_progress_color(ColorRole::Good, None, true),
            Some("- -".to_string())
        );
    }

    #[test]
    fn test_progress_color_explicitly_disabled() {
        let ctx = progress_ctx();
        assert_eq!(
            ctx.resolver(None).resolve_progress_color(ColorRole::Degraded, Some("#FFFF00"), true),
            None
        );
    }

    #[test]
    fn test_progress_color_requires_status_protocol_and_switches() {
        let term = RenderContext::new(OutputFormat::Terminal).with_progress_bars(true);
        assert_eq!(term.resolver(None).resolve_progress_color(ColorRole::Good, None, true), None);

        let no_bars = RenderContext::new(OutputFormat::StatusProtocol);
        assert_eq!(no_bars.resolver(None).resolve_progress_color(ColorRole::Good, None, true), None);

        let no_colors = progress_ctx().with_colors(false);
        assert_eq!(no_colors.resolver(None).resolve_progress_color(ColorRole::Good, None, true), None);
    }
}
