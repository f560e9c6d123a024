//! Per-block timezone selection.
//!
//! A time block may ask for any IANA zone, and a block without one means
//! "whatever zone the process started in". [`TimezoneContext`] owns that
//! choice: it captures the ambient `TZ` once, resolves names to [`Zone`]s and
//! remembers the last one it resolved.
//!
//! Nothing here touches the process environment. Exclusive access through
//! `&mut self` is what keeps selections from interleaving.
//!
//! | Requested | Resolves to |
//! |-----------|-------------|
//! | absent or `""` | the captured `TZ`, or the system local zone if unset |
//! | valid IANA name | that zone |
//! | anything else | UTC, with a warning |
//!
//! # Example
//!
//! ```rust
//! use barline::{MockEnv, TimezoneContext};
//! use chrono::{TimeZone, Utc};
//!
//! let mut timezones = TimezoneContext::with_env(MockEnv::new().with_var("TZ", "UTC"));
//! let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//!
//! let berlin = timezones.select(Some("Europe/Berlin"));
//! assert_eq!(berlin.offset_seconds(&instant), 3600);
//!
//! let original = timezones.select(None);
//! assert_eq!(original.offset_seconds(&instant), 0);
//! ```

use std::fmt::Write as _;

use barline_render::BrokenDownTime;
use chrono::{DateTime, Local, Locale, Offset, Utc};
use chrono_tz::Tz;

use crate::env::{EnvReader, RealEnv};
use crate::error::{ModuleError, Result};

/// A resolved timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// A zone from the IANA database.
    Named(Tz),
    /// The system's local zone.
    Local,
}

impl Zone {
    /// Offset from UTC at `instant`, in seconds.
    pub fn offset_seconds(&self, instant: &DateTime<Utc>) -> i32 {
        match self {
            Zone::Named(tz) => instant.with_timezone(tz).offset().fix().local_minus_utc(),
            Zone::Local => instant.with_timezone(&Local).offset().local_minus_utc(),
        }
    }

    /// Calendar fields of `instant` in this zone.
    pub fn broken_down(&self, instant: &DateTime<Utc>) -> BrokenDownTime {
        match self {
            Zone::Named(tz) => BrokenDownTime::from_datetime(&instant.with_timezone(tz)),
            Zone::Local => BrokenDownTime::from_datetime(&instant.with_timezone(&Local)),
        }
    }

    /// Formats `instant` in this zone with a strftime-style format.
    pub fn format(&self, instant: &DateTime<Utc>, format: &str, locale: Locale) -> Result<String> {
        let mut out = String::new();
        let written = match self {
            Zone::Named(tz) => write!(
                out,
                "{}",
                instant.with_timezone(tz).format_localized(format, locale)
            ),
            Zone::Local => write!(
                out,
                "{}",
                instant.with_timezone(&Local).format_localized(format, locale)
            ),
        };
        written.map_err(|_| ModuleError::TimeFormat {
            format: format.to_string(),
        })?;
        Ok(out)
    }
}

/// Owns timezone selection for one bar run.
#[derive(Debug)]
pub struct TimezoneContext<E: EnvReader = RealEnv> {
    env: E,
    /// `TZ` as it was at first use. Outer `None` means not captured yet.
    original: Option<Option<String>>,
    /// The last requested name and what it resolved to.
    current: Option<(String, Zone)>,
}

impl TimezoneContext<RealEnv> {
    /// Creates a context reading the real process environment.
    pub fn new() -> Self {
        Self::with_env(RealEnv)
    }
}

impl Default for TimezoneContext<RealEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvReader> TimezoneContext<E> {
    /// Creates a context reading `TZ` from the given environment.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            original: None,
            current: None,
        }
    }

    /// The `TZ` value captured at first use.
    pub fn original(&mut self) -> Option<&str> {
        let env = &self.env;
        self.original
            .get_or_insert_with(|| {
                let tz = env.var("TZ");
                tracing::debug!(tz = ?tz, "captured original timezone");
                tz
            })
            .as_deref()
    }

    /// Selects a zone by name. Absent or empty means the original zone.
    pub fn select(&mut self, name: Option<&str>) -> Zone {
        let name = name.unwrap_or("");
        if let Some((current, zone)) = &self.current {
            if current == name {
                return *zone;
            }
        }

        let zone = if name.is_empty() {
            self.original_zone()
        } else {
            parse_zone(name).unwrap_or_else(|| {
                tracing::warn!(timezone = name, "unknown timezone, using UTC");
                Zone::Named(Tz::UTC)
            })
        };
        tracing::trace!(timezone = name, ?zone, "selected timezone");
        self.current = Some((name.to_string(), zone));
        zone
    }

    /// Name of the zone selected last, if any. Empty means the original.
    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|(name, _)| name.as_str())
    }

    fn original_zone(&mut self) -> Zone {
        match self.original() {
            None | Some("") => Zone::Local,
            Some(tz) => parse_zone(tz).unwrap_or(Zone::Local),
        }
    }
}

/// Parses an IANA zone name, allowing the POSIX `:` prefix.
fn parse_zone(name: &str) -> Option<Zone> {
    let name = name.strip_prefix(':').unwrap_or(name);
    name.parse::<Tz>().ok().map(Zone::Named)
}
