//! Error types for configuration loading and module rendering.

use std::io;
use std::path::PathBuf;

use barline_render::RenderError;

/// Errors that can occur while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid YAML or has the wrong shape.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An output format or markup name was not recognized.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors a module can hit while producing its block.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// The strftime-style format could not be applied.
    #[error("Invalid time format {format:?}")]
    TimeFormat { format: String },
}

/// Result alias for module rendering.
pub type Result<T> = std::result::Result<T, ModuleError>;
