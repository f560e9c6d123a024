//! Color roles, configuration sources and per-format color syntax.
//!
//! - [`ColorRole`]: semantic role of a block's color (good, bad, ...)
//! - [`ColorSource`] / [`Section`]: key lookup in a configuration section
//! - [`ColorResolver`]: turns a role into the consumer's color syntax
//! - [`scalar`]: reads numeric and boolean config values as text

mod color;
mod role;
pub mod scalar;
mod source;

pub use color::{begin_color, end_color, terminal_color_code, ColorResolver};
pub use role::{ColorRole, PROGRESS_DEFAULT_BG_KEY};
pub use source::{ColorSource, Section};
