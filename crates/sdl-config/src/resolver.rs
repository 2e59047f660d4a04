//! Merges CLI options, deprecated flags, and config-file options into one
//! effective configuration, applying a fixed precedence.

use crate::legacy::translate_legacy_selection;
use crate::{CliOptions, ConfigError, FileConfig, Result};
use sdl_linter::RuleSelection;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Where the schema text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaInput {
    /// File paths or glob patterns, linted as ordered fragments.
    Paths(Vec<String>),
    /// A single document read from standard input.
    Stdin,
}

/// The immutable configuration a run executes under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub selection: RuleSelection,
    pub format: OutputFormat,
    pub input: SchemaInput,
}

/// Resolve the effective configuration for one run.
///
/// Precedence, highest first: current-generation CLI flags, then the
/// deprecated legacy flags, then config-file options, then built-in
/// defaults. Schema paths given on the command line beat `--stdin`, which
/// in turn beats paths from the config file.
#[tracing::instrument(skip_all)]
pub fn resolve(cli: &CliOptions, file: Option<&FileConfig>) -> Result<EffectiveConfig> {
    let selection = cli
        .rules
        .clone()
        .map(RuleSelection::Only)
        .or_else(|| translate_legacy_selection(cli.only.as_deref(), cli.except.as_deref()))
        .or_else(|| file.and_then(|f| f.rules.clone()).map(RuleSelection::Only))
        .unwrap_or(RuleSelection::All);

    let format = match cli
        .format
        .as_deref()
        .or_else(|| file.and_then(|f| f.format.as_deref()))
    {
        Some(name) => name.parse().map_err(|()| ConfigError::UnknownFormat {
            name: name.to_string(),
        })?,
        None => OutputFormat::default(),
    };

    let input = if cli.schema_paths.is_empty() {
        if cli.stdin {
            SchemaInput::Stdin
        } else if let Some(paths) = file
            .and_then(|f| f.schema_paths.clone())
            .filter(|paths| !paths.is_empty())
        {
            SchemaInput::Paths(paths)
        } else {
            return Err(ConfigError::NoSchemaSource);
        }
    } else {
        SchemaInput::Paths(cli.schema_paths.clone())
    };

    Ok(EffectiveConfig {
        selection,
        format,
        input,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn stdin_options() -> CliOptions {
        CliOptions {
            stdin: true,
            ..CliOptions::default()
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = resolve(&stdin_options(), None).unwrap();
        assert_eq!(config.selection, RuleSelection::All);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.input, SchemaInput::Stdin);
    }

    #[test]
    fn missing_schema_source_is_an_error() {
        let result = resolve(&CliOptions::default(), None);
        assert!(matches!(result, Err(ConfigError::NoSchemaSource)));
    }

    #[test]
    fn cli_rules_beat_legacy_flags() {
        let options = CliOptions {
            rules: Some(names(&["types_have_descriptions"])),
            only: Some(names(&["enum_values_all_caps"])),
            ..stdin_options()
        };
        let config = resolve(&options, None).unwrap();
        assert_eq!(
            config.selection,
            RuleSelection::Only(names(&["types_have_descriptions"]))
        );
    }

    #[test]
    fn cli_rules_beat_config_file_rules() {
        let options = CliOptions {
            rules: Some(names(&["types_have_descriptions"])),
            ..stdin_options()
        };
        let file = FileConfig {
            rules: Some(names(&["enum_values_all_caps"])),
            ..FileConfig::default()
        };
        let config = resolve(&options, Some(&file)).unwrap();
        assert_eq!(
            config.selection,
            RuleSelection::Only(names(&["types_have_descriptions"]))
        );
    }

    #[test]
    fn legacy_flags_apply_when_rules_is_absent() {
        let options = CliOptions {
            only: Some(names(&["enum_values_all_caps"])),
            ..stdin_options()
        };
        let config = resolve(&options, None).unwrap();
        assert_eq!(
            config.selection,
            RuleSelection::Only(names(&["enum_values_all_caps"]))
        );
    }

    #[test]
    fn config_file_rules_apply_when_no_flag_is_given() {
        let file = FileConfig {
            rules: Some(names(&["enum_values_all_caps"])),
            ..FileConfig::default()
        };
        let config = resolve(&stdin_options(), Some(&file)).unwrap();
        assert_eq!(
            config.selection,
            RuleSelection::Only(names(&["enum_values_all_caps"]))
        );
    }

    #[test]
    fn cli_paths_beat_stdin_and_config_paths() {
        let options = CliOptions {
            schema_paths: names(&["cli.graphql"]),
            stdin: true,
            ..CliOptions::default()
        };
        let file = FileConfig {
            schema_paths: Some(names(&["file.graphql"])),
            ..FileConfig::default()
        };
        let config = resolve(&options, Some(&file)).unwrap();
        assert_eq!(config.input, SchemaInput::Paths(names(&["cli.graphql"])));
    }

    #[test]
    fn stdin_beats_config_paths() {
        let file = FileConfig {
            schema_paths: Some(names(&["file.graphql"])),
            ..FileConfig::default()
        };
        let config = resolve(&stdin_options(), Some(&file)).unwrap();
        assert_eq!(config.input, SchemaInput::Stdin);
    }

    #[test]
    fn config_paths_apply_as_a_last_resort() {
        let file = FileConfig {
            schema_paths: Some(names(&["file.graphql"])),
            ..FileConfig::default()
        };
        let config = resolve(&CliOptions::default(), Some(&file)).unwrap();
        assert_eq!(config.input, SchemaInput::Paths(names(&["file.graphql"])));
    }

    #[test]
    fn cli_format_beats_config_format() {
        let options = CliOptions {
            format: Some("json".to_string()),
            ..stdin_options()
        };
        let file = FileConfig {
            format: Some("text".to_string()),
            ..FileConfig::default()
        };
        let config = resolve(&options, Some(&file)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected_with_its_name() {
        let options = CliOptions {
            format: Some("xml".to_string()),
            ..stdin_options()
        };
        match resolve(&options, None) {
            Err(ConfigError::UnknownFormat { name }) => assert_eq!(name, "xml"),
            other => panic!("expected unknown format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_path_list_does_not_satisfy_the_source_requirement() {
        let file = FileConfig {
            schema_paths: Some(Vec::new()),
            ..FileConfig::default()
        };
        assert!(matches!(
            resolve(&CliOptions::default(), Some(&file)),
            Err(ConfigError::NoSchemaSource)
        ));
    }
}
