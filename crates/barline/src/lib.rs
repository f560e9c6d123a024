//! # barline - one-shot status lines
//!
//! `barline` reads a YAML configuration, runs each configured status module
//! once and produces one bar line for i3bar, dzen2, xmobar, lemonbar, a
//! terminal or plain text. Formatting is done by [`barline_render`]; this
//! crate supplies what gets formatted.
//!
//! ## Modules
//!
//! - `path_exists`: whether a path exists
//! - `run_watch`: whether the process in a pidfile is alive
//! - `time`: the current time, in any timezone and locale
//!
//! ## Quick Start
//!
//! ```rust
//! use barline::{Bar, Config, MockEnv};
//! use barline_render::EmittedLine;
//! use chrono::{TimeZone, Utc};
//!
//! let config = Config::from_yaml(r#"
//! general:
//!   output_format: none
//! modules:
//!   - type: path_exists
//!     title: root
//!     path: /
//!   - type: time
//!     timezone: UTC
//!     format: "%H:%M"
//! "#).unwrap();
//!
//! let mut bar = Bar::with_env(config, MockEnv::new());
//! let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
//! let EmittedLine::Text(line) = bar.render_line(now) else { unreachable!() };
//! assert_eq!(line, "root: yes | 12:30");
//! ```
//!
//! ## Timezones
//!
//! Time blocks never touch the process environment. The `TZ` a process
//! starts with is captured once by [`TimezoneContext`]; blocks without a
//! `timezone` use it.

pub mod bar;
pub mod config;
pub mod env;
mod error;
pub mod modules;
pub mod timezone;

pub use bar::Bar;
pub use config::{Config, General};
pub use env::{EnvReader, MockEnv, RealEnv};
pub use error::{ConfigError, ModuleError, Result};
pub use modules::{ModuleConfig, PathExists, RunWatch, StatusModule, Tick, Time};
pub use timezone::{TimezoneContext, Zone};
