//! Output format and markup mode selection.
//!
//! [`OutputFormat`] names the downstream consumer of the bar line. It decides
//! both the color syntax and how blocks are framed. [`MarkupMode`] decides
//! whether substituted values are escaped for Pango markup.
//!
//! Both are chosen once at startup and never change afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// The consumer the bar line is produced for.
///
/// # Variants
///
/// - `None` - Plain text, no color syntax at all
/// - `StatusProtocol` - i3bar JSON protocol, colors travel as block fields
/// - `Dzen2` - `^fg(color)` markup
/// - `Xmobar` - `<fc=color>...</fc>` markup
/// - `Lemonbar` - `%{Fcolor}` markup
/// - `Terminal` - ANSI escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "i3bar")]
    StatusProtocol,
    #[serde(rename = "dzen2")]
    Dzen2,
    #[serde(rename = "xmobar")]
    Xmobar,
    #[serde(rename = "lemonbar")]
    Lemonbar,
    #[serde(rename = "term")]
    Terminal,
}

/// Config names for each format, in declaration order.
const FORMAT_NAMES: [(OutputFormat, &str); 6] = [
    (OutputFormat::None, "none"),
    (OutputFormat::StatusProtocol, "i3bar"),
    (OutputFormat::Dzen2, "dzen2"),
    (OutputFormat::Xmobar, "xmobar"),
    (OutputFormat::Lemonbar, "lemonbar"),
    (OutputFormat::Terminal, "term"),
];

impl OutputFormat {
    /// Returns the name used for this format in configuration files.
    pub fn name(&self) -> &'static str {
        FORMAT_NAMES
            .iter()
            .find(|(format, _)| format == self)
            .map(|(_, name)| *name)
            .unwrap_or("none")
    }

    /// Returns true for the structured (JSON) bar protocol.
    ///
    /// Structured blocks carry color, instance and progress as separate
    /// fields and are separated structurally, not by separator text.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::StatusProtocol)
    }

    /// Separator text used between blocks when none is configured.
    pub fn default_separator(&self) -> &'static str {
        match self {
            OutputFormat::Dzen2 => "^p(5;-2)^ro(2)^p()^p(5)",
            OutputFormat::Xmobar => "<fc=#333333> | </fc>",
            OutputFormat::StatusProtocol
            | OutputFormat::Lemonbar
            | OutputFormat::Terminal
            | OutputFormat::None => " | ",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMAT_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(format, _)| *format)
            .ok_or_else(|| RenderError::UnknownOutputFormat(s.to_string()))
    }
}

/// Whether block text is interpreted as markup by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Text is shown verbatim; nothing is escaped.
    #[default]
    None,
    /// Text is Pango markup; substituted values are entity-escaped.
    Pango,
}

impl MarkupMode {
    /// Returns the value of the `markup` block field, if any.
    pub fn protocol_name(&self) -> Option<&'static str> {
        match self {
            MarkupMode::None => None,
            MarkupMode::Pango => Some("pango"),
        }
    }
}

impl FromStr for MarkupMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(MarkupMode::None),
            "pango" => Ok(MarkupMode::Pango),
            _ => Err(RenderError::UnknownMarkup(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        for (format, name) in FORMAT_NAMES {
            assert_eq!(format.name(), name);
            assert_eq!(name.parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_format_parse_is_case_insensitive() {
        assert_eq!("I3BAR".parse::<OutputFormat>().unwrap(), OutputFormat::StatusProtocol);
        assert_eq!("Term".parse::<OutputFormat>().unwrap(), OutputFormat::Terminal);
    }

    #[test]
    fn test_unknown_format() {
        let err = "waybar".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("waybar"));
    }

    #[test]
    fn test_only_status_protocol_is_structured() {
        for (format, _) in FORMAT_NAMES {
            assert_eq!(format.is_structured(), format == OutputFormat::StatusProtocol);
        }
    }

    #[test]
    fn test_default_separators() {
        assert_eq!(OutputFormat::Dzen2.default_separator(), "^p(5;-2)^ro(2)^p()^p(5)");
        assert_eq!(OutputFormat::Xmobar.default_separator(), "<fc=#333333> | </fc>");
        assert_eq!(OutputFormat::Lemonbar.default_separator(), " | ");
    }

    #[test]
    fn test_markup_parse() {
        assert_eq!("pango".parse::<MarkupMode>().unwrap(), MarkupMode::Pango);
        assert_eq!("none".parse::<MarkupMode>().unwrap(), MarkupMode::None);
        assert!("html".parse::<MarkupMode>().is_err());
        assert_eq!(MarkupMode::Pango.protocol_name(), Some("pango"));
        assert_eq!(MarkupMode::None.protocol_name(), None);
    }
}
