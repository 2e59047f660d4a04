//! Core linting pipeline for GraphQL schema-definition (SDL) documents.
//!
//! Independently authored schema fragments are concatenated into a single
//! buffer (tracked by a [`SourceMap`]), parsed once, and checked by a
//! selectable set of read-only [`rules::SchemaRule`]s. Every reported
//! [`Diagnostic`] is remapped back to the fragment that contributed the
//! flagged line, so locations are always meaningful against the original
//! file layout.

mod diagnostics;
mod engine;
mod registry;
mod runner;
mod source_map;

pub mod rules;

pub use diagnostics::{group_by_file, Diagnostic, Location, Severity};
pub use engine::{validate, RULE_EXECUTION_ERROR};
pub use registry::{all_rule_names, all_rules, resolve, RuleSelection, UnknownRule};
pub use runner::{lint_sources, LintError, LintReport, SchemaSource};
pub use source_map::{Fragment, LineIndex, SourceMap, SourceMapError, STDIN_PATH};
