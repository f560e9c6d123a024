//! Convenience re-exports for status modules.
//!
//! ```rust
//! use barline_render::prelude::*;
//! ```

pub use crate::{
    render, BlockEmitter, BlockSpec, ColorRole, ColorSource, MarkupMode, OutputFormat,
    Placeholders, RenderContext, Section,
};
