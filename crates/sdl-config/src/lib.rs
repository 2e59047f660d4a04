//! Configuration for sdl-lint: CLI option shapes, config-file discovery and
//! parsing, and the precedence resolver that merges them into one effective
//! configuration per run.

mod file;
mod legacy;
mod loader;
mod options;
mod resolver;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileConfig;
pub use loader::{find_config, load_config, load_config_from_str};
pub use options::CliOptions;
pub use resolver::{resolve, EffectiveConfig, OutputFormat, SchemaInput};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported config file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("invalid config file {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("unknown output format '{name}' (expected 'text' or 'json')")]
    UnknownFormat { name: String },

    /// No schema file was given and stdin was not requested, from any
    /// configuration source.
    #[error("no schema source given; pass schema paths or --stdin")]
    NoSchemaSource,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
