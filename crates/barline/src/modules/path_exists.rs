//! Path existence check.

use std::path::Path;

use barline_render::style::scalar;
use barline_render::{BlockEmitter, BlockSpec, ColorRole, Section};
use serde::Deserialize;

use super::{default_status_format, render_status, StatusModule, Tick};
use crate::env::EnvReader;
use crate::error::Result;

/// Shows whether a path exists, e.g. a VPN interface under `/proc`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathExists {
    #[serde(deserialize_with = "scalar::string")]
    pub title: String,
    #[serde(deserialize_with = "scalar::string")]
    pub path: String,
    #[serde(default = "default_status_format", deserialize_with = "scalar::string")]
    pub format: String,
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub format_down: Option<String>,
    #[serde(flatten)]
    pub overrides: Section,
}

impl PathExists {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            format: default_status_format(),
            format_down: None,
            overrides: Section::new(),
        }
    }

    /// True if the path can be stat'ed. Symlinks are followed.
    pub fn exists(&self) -> bool {
        Path::new(&self.path).metadata().is_ok()
    }
}

impl StatusModule for PathExists {
    fn name(&self) -> &'static str {
        "path_exists"
    }

    fn overrides(&self) -> &Section {
        &self.overrides
    }

    fn run<E: EnvReader>(
        &self,
        _tick: &mut Tick<'_, E>,
        emitter: &mut BlockEmitter<'_>,
    ) -> Result<()> {
        let exists = self.exists();
        tracing::trace!(path = %self.path, exists, "checked path");

        let text = render_status(
            &self.title,
            exists,
            &self.format,
            self.format_down.as_deref(),
            emitter.context().markup(),
        );
        emitter.emit(
            Some(&self.overrides),
            BlockSpec::new(&text)
                .role(if exists { ColorRole::Good } else { ColorRole::Bad })
                .name(self.name())
                .instance(&self.path),
        );
        Ok(())
    }
}
