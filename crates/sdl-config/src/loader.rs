//! Config-file discovery and parsing.

use crate::{ConfigError, FileConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".sdl-lintrc",
    ".sdl-lintrc.yml",
    ".sdl-lintrc.yaml",
    ".sdl-lintrc.json",
    "sdl-lint.config.yml",
    "sdl-lint.config.yaml",
    "sdl-lint.config.json",
];

/// Find a config file by walking up the directory tree from the given start
/// directory. Returns the path to the first match.
#[must_use]
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        tracing::trace!(dir = %current_dir.display(), "checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::debug!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current_dir.pop() {
            tracing::trace!("no config file found");
            return None;
        }
    }
}

/// Load a config from the specified path. The format is detected from the
/// file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a config from a string. The path is used for error messages and
/// format detection.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<FileConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    match extension {
        "yml" | "yaml" => parse_yaml(contents, path),
        "json" => parse_json(contents, path),
        // Extensionless rc file: try YAML first, then JSON.
        "" if file_name == ".sdl-lintrc" => {
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))
        }
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn parse_yaml(contents: &str, path: &Path) -> Result<FileConfig> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<FileConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}
