//! YAML configuration.
//!
//! A config file has a `general` section and an ordered `modules` list:
//!
//! ```yaml
//! general:
//!   output_format: dzen2
//!   color_good: "#00AAFF"
//! modules:
//!   - type: path_exists
//!     title: VPN
//!     path: /proc/sys/net/ipv4/conf/tun0
//!   - type: time
//!     timezone: Europe/Berlin
//! ```
//!
//! Keys a section does not know by name (`color_*`, `progress_colors_*`,
//! `progress_color_default_bg`) are collected into a [`Section`] and used as
//! color overrides. In `general` they are the global colors; in a module
//! entry they override the global ones for that module only.

use std::path::Path;

use barline_render::style::scalar;
use barline_render::{MarkupMode, OutputFormat, RenderContext, Section};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::modules::ModuleConfig;

/// Built-in global colors, applied when the config does not set them.
pub const DEFAULT_COLORS: [(&str, &str); 4] = [
    ("color_good", "#00FF00"),
    ("color_degraded", "#FFFF00"),
    ("color_bad", "#FF0000"),
    ("color_separator", "#333333"),
];

/// A complete configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub modules: Vec<ModuleConfig>,
}

impl Config {
    /// Parses a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, empty config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(
            path = %path.display(),
            modules = config.modules.len(),
            "loaded config"
        );
        Ok(config)
    }
}

/// The `general` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct General {
    pub output_format: OutputFormat,
    pub markup: MarkupMode,
    pub colors: bool,
    pub progress_bars: bool,
    #[serde(deserialize_with = "scalar::optional_string")]
    pub separator: Option<String>,
    #[serde(flatten)]
    pub styles: Section,
}

impl Default for General {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            markup: MarkupMode::default(),
            colors: true,
            progress_bars: false,
            separator: None,
            styles: Section::new(),
        }
    }
}

impl General {
    /// Builds the render context, filling in the built-in colors.
    pub fn render_context(&self) -> RenderContext {
        let mut styles = self.styles.clone();
        for (key, color) in DEFAULT_COLORS {
            styles.set_default(key, color);
        }

        let ctx = RenderContext::new(self.output_format)
            .with_markup(self.markup)
            .with_colors(self.colors)
            .with_progress_bars(self.progress_bars)
            .with_general(styles);
        match &self.separator {
            Some(separator) => ctx.with_separator(separator.as_str()),
            None => ctx,
        }
    }
}
