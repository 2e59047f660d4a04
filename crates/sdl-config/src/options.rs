//! The option shape gathered from the command line, prior to precedence
//! resolution. Argument parsing itself lives in the CLI crate.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Positional schema paths or glob patterns.
    pub schema_paths: Vec<String>,
    /// `--rules`: run exactly these rules.
    pub rules: Option<Vec<String>>,
    /// Deprecated `--only`: inclusion list, honored only without `--rules`.
    pub only: Option<Vec<String>>,
    /// Deprecated `--except`: exclusion list, honored only without `--rules`.
    pub except: Option<Vec<String>>,
    /// `--format`: report format name, validated during resolution.
    pub format: Option<String>,
    /// `--stdin`: read the schema from standard input.
    pub stdin: bool,
    /// `--config-directory`: where config-file search begins.
    pub config_directory: Option<PathBuf>,
}

impl CliOptions {
    /// The deprecated flags present in this invocation, for the one-time
    /// advisory message. Presence alone triggers the advisory, even when
    /// `--rules` makes the legacy value irrelevant.
    #[must_use]
    pub fn deprecated_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.only.is_some() {
            flags.push("--only");
        }
        if self.except.is_some() {
            flags.push("--except");
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_deprecated_flags_by_default() {
        assert!(CliOptions::default().deprecated_flags().is_empty());
    }

    #[test]
    fn deprecated_flags_are_reported_in_stable_order() {
        let options = CliOptions {
            only: Some(vec!["a".to_string()]),
            except: Some(vec!["b".to_string()]),
            ..CliOptions::default()
        };
        assert_eq!(options.deprecated_flags(), vec!["--only", "--except"]);
    }
}
