//! One bar line from a configuration.

use barline_render::{BlockEmitter, EmittedLine, RenderContext};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::env::{EnvReader, RealEnv};
use crate::modules::{ModuleConfig, StatusModule, Tick};
use crate::timezone::TimezoneContext;

/// Renders every configured module into one line.
///
/// A module that fails is logged and left out of the line; the rest of the
/// line is still produced.
#[derive(Debug)]
pub struct Bar<E: EnvReader = RealEnv> {
    ctx: RenderContext,
    modules: Vec<ModuleConfig>,
    timezones: TimezoneContext<E>,
}

impl Bar<RealEnv> {
    pub fn new(config: Config) -> Self {
        Self::with_env(config, RealEnv)
    }
}

impl<E: EnvReader> Bar<E> {
    /// Creates a bar that captures `TZ` from the given environment.
    pub fn with_env(config: Config, env: E) -> Self {
        Self {
            ctx: config.general.render_context(),
            modules: config.modules,
            timezones: TimezoneContext::with_env(env),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Renders all modules for the instant `now`.
    pub fn render_line(&mut self, now: DateTime<Utc>) -> EmittedLine {
        let mut emitter = BlockEmitter::new(&self.ctx);
        let mut tick = Tick {
            now,
            timezones: &mut self.timezones,
        };

        for module in &self.modules {
            if let Err(err) = module.run(&mut tick, &mut emitter) {
                tracing::warn!(module = module.name(), %err, "module failed");
            }
        }
        tracing::debug!(blocks = emitter.blocks().len(), "rendered line");
        emitter.finish()
    }
}
