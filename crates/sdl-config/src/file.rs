//! The on-disk configuration model (`.sdl-lintrc` and friends).

use serde::Deserialize;

/// Options a config file may supply. Every field is optional; unknown keys
/// are ignored so configs can carry tool-specific extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Rule names to run, same semantics as `--rules`.
    #[serde(default)]
    pub rules: Option<Vec<String>>,

    /// Report format name, same semantics as `--format`.
    #[serde(default)]
    pub format: Option<String>,

    /// Schema paths or glob patterns, used when none are given on the
    /// command line.
    #[serde(default)]
    pub schema_paths: Option<Vec<String>>,
}
