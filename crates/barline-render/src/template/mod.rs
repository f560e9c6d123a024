//! `%name` placeholder templates.
//!
//! Module format strings such as `"%title: %status"` mix literal text with
//! placeholders. The same renderer serves two kinds of callers:
//!
//! - modules with a fixed vocabulary (`%title`, `%status`) that always
//!   register the same names
//! - modules with a dynamic set, built at runtime from whatever values are
//!   available
//!
//! Both hand an ordered [`Placeholders`] list to [`render`].
//!
//! ## Matching Rules
//!
//! - Names match case-sensitively as a prefix of the text after `%`.
//! - The first registered name that matches wins, so register `timezone`
//!   before `time` if both exist.
//! - Unknown names are not an error: the `%` is kept and the text after it is
//!   treated as literal.
//! - Only substituted values are markup-escaped. Literal template text is
//!   passed through untouched.

mod placeholder;
mod renderer;

pub use placeholder::{Placeholder, Placeholders};
pub use renderer::render;
