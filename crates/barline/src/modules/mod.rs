//! Status modules.
//!
//! Each module checks one thing and emits one block. Modules never format
//! colors themselves: they pick a [`ColorRole`] and hand their override
//! section to the [`BlockEmitter`], which resolves the rest.
//!
//! | Type | Checks | Role |
//! |------|--------|------|
//! | `path_exists` | a path can be stat'ed | Good / Bad |
//! | `run_watch` | the process in a pidfile is alive | Good / Bad |
//! | `time` | the current time in some zone | Default |
//!
//! [`ColorRole`]: barline_render::ColorRole

mod path_exists;
mod run_watch;
mod time;

pub use path_exists::PathExists;
pub use run_watch::{process_runs, RunWatch};
pub use time::{resolve_locale, Time};

use barline_render::{BlockEmitter, MarkupMode, Placeholders, Section};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::env::{EnvReader, RealEnv};
use crate::error::Result;
use crate::timezone::TimezoneContext;

/// Shared state for one bar line.
#[derive(Debug)]
pub struct Tick<'a, E: EnvReader = RealEnv> {
    /// The instant every module reports on.
    pub now: DateTime<Utc>,
    pub timezones: &'a mut TimezoneContext<E>,
}

/// A source of one status block.
pub trait StatusModule {
    /// Value of the block's `name` field.
    fn name(&self) -> &'static str;

    /// Module-level color overrides.
    fn overrides(&self) -> &Section;

    /// Emits this module's block.
    fn run<E: EnvReader>(&self, tick: &mut Tick<'_, E>, emitter: &mut BlockEmitter<'_>)
        -> Result<()>;
}

/// One entry of the `modules` config list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModuleConfig {
    PathExists(PathExists),
    RunWatch(RunWatch),
    Time(Time),
}

impl StatusModule for ModuleConfig {
    fn name(&self) -> &'static str {
        match self {
            ModuleConfig::PathExists(module) => module.name(),
            ModuleConfig::RunWatch(module) => module.name(),
            ModuleConfig::Time(module) => module.name(),
        }
    }

    fn overrides(&self) -> &Section {
        match self {
            ModuleConfig::PathExists(module) => module.overrides(),
            ModuleConfig::RunWatch(module) => module.overrides(),
            ModuleConfig::Time(module) => module.overrides(),
        }
    }

    fn run<E: EnvReader>(
        &self,
        tick: &mut Tick<'_, E>,
        emitter: &mut BlockEmitter<'_>,
    ) -> Result<()> {
        match self {
            ModuleConfig::PathExists(module) => module.run(tick, emitter),
            ModuleConfig::RunWatch(module) => module.run(tick, emitter),
            ModuleConfig::Time(module) => module.run(tick, emitter),
        }
    }
}

/// Default template for the up/down modules.
pub(crate) fn default_status_format() -> String {
    "%title: %status".to_string()
}

/// Renders the text of an up/down block.
///
/// `format_down` replaces `format` only while the condition is false.
pub(crate) fn render_status(
    title: &str,
    up: bool,
    format: &str,
    format_down: Option<&str>,
    markup: MarkupMode,
) -> String {
    let template = match format_down {
        Some(down) if !up => down,
        _ => format,
    };
    Placeholders::new()
        .add("title", title)
        .add("status", if up { "yes" } else { "no" })
        .render(template, markup)
}
