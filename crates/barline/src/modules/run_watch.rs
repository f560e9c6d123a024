//! Process liveness check through a pidfile.
//!
//! The last component of `pidfile` may be a glob such as
//! `/var/run/dhclient*.pid`. The first match in sorted order is read. A
//! process counts as running when the pid parses and signal 0 can be sent
//! to it, or sending fails only for lack of permission.

use std::io;
use std::path::{Path, PathBuf};

use barline_render::style::scalar;
use barline_render::{BlockEmitter, BlockSpec, ColorRole, Section};
use globset::Glob;
use serde::Deserialize;

use super::{default_status_format, render_status, StatusModule, Tick};
use crate::env::EnvReader;
use crate::error::Result;

/// Shows whether the process named by a pidfile is alive.
#[derive(Debug, Clone, Deserialize)]
pub struct RunWatch {
    #[serde(deserialize_with = "scalar::string")]
    pub title: String,
    #[serde(deserialize_with = "scalar::string")]
    pub pidfile: String,
    #[serde(default = "default_status_format", deserialize_with = "scalar::string")]
    pub format: String,
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub format_down: Option<String>,
    #[serde(flatten)]
    pub overrides: Section,
}

impl RunWatch {
    pub fn new(title: impl Into<String>, pidfile: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pidfile: pidfile.into(),
            format: default_status_format(),
            format_down: None,
            overrides: Section::new(),
        }
    }
}

impl StatusModule for RunWatch {
    fn name(&self) -> &'static str {
        "run_watch"
    }

    fn overrides(&self) -> &Section {
        &self.overrides
    }

    fn run<E: EnvReader>(
        &self,
        _tick: &mut Tick<'_, E>,
        emitter: &mut BlockEmitter<'_>,
    ) -> Result<()> {
        let running = process_runs(Path::new(&self.pidfile));

        let text = render_status(
            &self.title,
            running,
            &self.format,
            self.format_down.as_deref(),
            emitter.context().markup(),
        );
        emitter.emit(
            Some(&self.overrides),
            BlockSpec::new(&text)
                .role(if running { ColorRole::Good } else { ColorRole::Bad })
                .name(self.name())
                .instance(&self.pidfile),
        );
        Ok(())
    }
}

/// True if the pidfile (or its first glob match) names a live process.
pub fn process_runs(pidfile: &Path) -> bool {
    let Some(path) = resolve_pidfile(pidfile) else {
        tracing::debug!(pidfile = %pidfile.display(), "no pidfile matches");
        return false;
    };
    let Some(pid) = read_pid(&path) else {
        return false;
    };
    let alive = pid_alive(pid);
    tracing::trace!(pidfile = %path.display(), pid, alive, "checked process");
    alive
}

/// Expands a glob in the last path component to its first sorted match.
fn resolve_pidfile(pattern: &Path) -> Option<PathBuf> {
    let file_name = pattern.file_name()?.to_str()?;
    if !file_name.contains(['*', '?', '[', '{']) {
        return Some(pattern.to_path_buf());
    }

    let matcher = match Glob::new(file_name) {
        Ok(glob) => glob.compile_matcher(),
        Err(err) => {
            tracing::warn!(pattern = file_name, %err, "invalid pidfile glob");
            return None;
        }
    };
    let dir = match pattern.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| matcher.is_match(entry.file_name()))
        .map(|entry| entry.path())
        .collect();
    matches.sort();
    matches.into_iter().next()
}

fn read_pid(path: &Path) -> Option<libc::pid_t> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(pidfile = %path.display(), %err, "cannot read pidfile");
            return None;
        }
    };
    // 0 and negative pids address process groups, not a process.
    text.trim().parse().ok().filter(|pid| *pid > 0)
}

fn pid_alive(pid: libc::pid_t) -> bool {
    // SAFETY: signal 0 performs only the existence and permission checks.
    if unsafe { libc::kill(pid, 0) } == 0 {
        return true;
    }
    io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}
