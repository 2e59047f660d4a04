//! `sdl-lint`: lint GraphQL schema-definition documents.
//!
//! Exit codes: `0` when no diagnostics were produced, `1` when one or more
//! were, `2` when the schema failed to parse, `3` on configuration errors.

mod formatters;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use sdl_config::{CliOptions, SchemaInput};
use sdl_linter::{LintError, SchemaSource, STDIN_PATH};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_CLEAN: u8 = 0;
const EXIT_VIOLATIONS: u8 = 1;
const EXIT_PARSE_ERROR: u8 = 2;
const EXIT_CONFIG_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "sdl-lint")]
#[command(about = "Lint GraphQL schema-definition documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Schema files or glob patterns to lint
    #[arg(value_name = "SCHEMA_PATH")]
    schema_paths: Vec<String>,

    /// Only the rules specified will be used to validate the schema.
    /// Example: fields_have_descriptions,types_have_descriptions
    #[arg(short, long, value_name = "RULES")]
    rules: Option<String>,

    /// Output format of the report (text or json)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Read the schema definition from STDIN instead of specified files
    #[arg(short, long)]
    stdin: bool,

    /// Path to begin searching for config files
    #[arg(short, long, value_name = "PATH")]
    config_directory: Option<PathBuf>,

    /// Deprecated; use --rules instead
    #[arg(short, long, value_name = "RULES", hide = true)]
    only: Option<String>,

    /// Deprecated; use --rules instead
    #[arg(short, long, value_name = "RULES", hide = true)]
    except: Option<String>,
}

impl Cli {
    fn to_options(&self) -> CliOptions {
        CliOptions {
            schema_paths: self.schema_paths.clone(),
            rules: self.rules.as_deref().map(split_names),
            only: self.only.as_deref().map(split_names),
            except: self.except.as_deref().map(split_names),
            format: self.format.clone(),
            stdin: self.stdin,
            config_directory: self.config_directory.clone(),
        }
    }
}

fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    ExitCode::from(run(&cli))
}

/// Initialize tracing from the `RUST_LOG` env var, logging to stderr so the
/// report stream stays clean.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> u8 {
    let options = cli.to_options();

    // One-time advisory on a stream distinct from the report; never affects
    // the exit code.
    let deprecated = options.deprecated_flags();
    if !deprecated.is_empty() {
        eprintln!(
            "{} The {} command line option(s) have been deprecated. Use {} instead.\n",
            "⚠".yellow(),
            deprecated.join(" and ").bold(),
            "--rules".bold()
        );
    }

    let start_dir = options
        .config_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let file_config = match sdl_config::find_config(&start_dir) {
        Some(path) => match sdl_config::load_config(&path) {
            Ok(config) => Some(config),
            Err(error) => {
                report_fatal(&format!("{error}"));
                return EXIT_CONFIG_ERROR;
            }
        },
        None => None,
    };

    let effective = match sdl_config::resolve(&options, file_config.as_ref()) {
        Ok(config) => config,
        Err(error) => {
            report_fatal(&format!("{error}"));
            return EXIT_CONFIG_ERROR;
        }
    };

    tracing::debug!(format = %effective.format, "configuration resolved");

    let sources = match load_sources(&effective.input) {
        Ok(sources) => sources,
        Err(error) => {
            report_fatal(&format!("{error:#}"));
            return EXIT_CONFIG_ERROR;
        }
    };

    match sdl_linter::lint_sources(sources, &effective.selection) {
        Ok(report) => {
            print!("{}", formatters::render(&report, effective.format));
            if report.is_clean() {
                EXIT_CLEAN
            } else {
                EXIT_VIOLATIONS
            }
        }
        Err(error @ LintError::Parse { .. }) => {
            eprintln!(
                "{} {}\n\n{error}",
                "✖".red(),
                "An error occurred while parsing the schema:".red().bold()
            );
            EXIT_PARSE_ERROR
        }
        Err(error) => {
            report_fatal(&format!("{error}"));
            EXIT_CONFIG_ERROR
        }
    }
}

fn report_fatal(message: &str) {
    eprintln!("{} {message}", "✖".red());
}

/// Read the schema fragments named by the effective input.
///
/// Glob patterns that match nothing contribute nothing; an input that
/// yields no fragments at all is an error.
fn load_sources(input: &SchemaInput) -> anyhow::Result<Vec<SchemaSource>> {
    match input {
        SchemaInput::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read schema from stdin")?;
            Ok(vec![SchemaSource::new(STDIN_PATH, text)])
        }
        SchemaInput::Paths(patterns) => {
            let mut sources = Vec::new();
            for pattern in patterns {
                let paths = glob::glob(pattern)
                    .with_context(|| format!("invalid schema path pattern '{pattern}'"))?;
                for entry in paths {
                    let path = entry.context("failed to read schema path")?;
                    if !path.is_file() {
                        continue;
                    }
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read schema file '{}'", path.display()))?;
                    sources.push(SchemaSource::new(path.display().to_string(), text));
                }
            }
            anyhow::ensure!(!sources.is_empty(), "no schema files matched the given paths");
            Ok(sources)
        }
    }
}
