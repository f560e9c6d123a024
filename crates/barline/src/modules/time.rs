//! Clock blocks, optionally in another timezone and locale.

use barline_render::style::scalar;
use barline_render::{progress_percent, BlockEmitter, BlockSpec, Placeholders, Section};
use chrono::Locale;
use serde::Deserialize;

use super::{StatusModule, Tick};
use crate::env::EnvReader;
use crate::error::Result;

/// Shows the current time.
///
/// Without `format_time`, `format` is a strftime format. With it,
/// `format_time` is the strftime format and its result replaces `%time`
/// in `format`.
#[derive(Debug, Clone, Deserialize)]
pub struct Time {
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub title: Option<String>,
    #[serde(default = "default_time_format", deserialize_with = "scalar::string")]
    pub format: String,
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub format_time: Option<String>,
    /// Progress unit for the block's progress metadata.
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub progress: Option<String>,
    /// Show nothing when the zone's offset matches the local one.
    #[serde(default)]
    pub hide_if_equals_localtime: bool,
    #[serde(flatten)]
    pub overrides: Section,
}

fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Time {
    fn default() -> Self {
        Self {
            title: None,
            format: default_time_format(),
            timezone: None,
            locale: None,
            format_time: None,
            progress: None,
            hide_if_equals_localtime: false,
            overrides: Section::new(),
        }
    }
}

impl StatusModule for Time {
    fn name(&self) -> &'static str {
        "time"
    }

    fn overrides(&self) -> &Section {
        &self.overrides
    }

    fn run<E: EnvReader>(
        &self,
        tick: &mut Tick<'_, E>,
        emitter: &mut BlockEmitter<'_>,
    ) -> Result<()> {
        let now = tick.now;
        let local = tick.timezones.select(None);
        let zone = tick.timezones.select(self.timezone.as_deref());

        let hidden = self.hide_if_equals_localtime
            && local.offset_seconds(&now) == zone.offset_seconds(&now);
        let text = if hidden {
            tracing::trace!(timezone = ?self.timezone, "same offset as local time, hiding");
            String::new()
        } else {
            let locale = resolve_locale(self.locale.as_deref());
            match &self.format_time {
                None => zone.format(&now, &self.format, locale)?,
                Some(format_time) => {
                    let time = zone.format(&now, format_time, locale)?;
                    Placeholders::new()
                        .add("time", time)
                        .render(&self.format, emitter.context().markup())
                }
            }
        };

        let mut spec = BlockSpec::new(&text).name(self.name());
        if let Some(title) = &self.title {
            spec = spec.instance(title);
        }
        if let Some(unit) = self.progress.as_deref().filter(|_| !hidden) {
            spec = spec.progress(progress_percent(unit, &zone.broken_down(&now)));
        }
        emitter.emit(Some(&self.overrides), spec);
        Ok(())
    }
}

/// Resolves a locale name such as `de_DE.UTF-8` for month and day names.
///
/// The encoding and modifier suffixes are ignored. Unknown names fall back
/// to POSIX.
pub fn resolve_locale(name: Option<&str>) -> Locale {
    let Some(name) = name.filter(|name| !name.is_empty()) else {
        return Locale::POSIX;
    };
    let base = name.split(['.', '@']).next().unwrap_or(name);
    if base == "C" || base == "POSIX" {
        return Locale::POSIX;
    }
    match Locale::try_from(base) {
        Ok(locale) => locale,
        Err(_) => {
            tracing::warn!(locale = name, "unknown locale, using POSIX");
            Locale::POSIX
        }
    }
}
