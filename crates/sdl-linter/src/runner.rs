//! The orchestrating pipeline: concatenate sources, parse, resolve rules,
//! validate, and remap diagnostics back to their originating fragments.

use crate::diagnostics::{group_by_file, Diagnostic, Location};
use crate::engine;
use crate::registry::{self, RuleSelection, UnknownRule};
use crate::source_map::{SourceMap, SourceMapError};
use std::collections::BTreeMap;
use thiserror::Error;

/// One named schema input, as loaded from a file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    pub path: String,
    pub text: String,
}

impl SchemaSource {
    #[must_use]
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Fatal conditions that abort a run before a report exists.
#[derive(Debug, Error)]
pub enum LintError {
    /// The concatenated schema is not syntactically valid. The location has
    /// already been remapped to the originating fragment's own line
    /// numbering. Fatal: no rules run.
    #[error("{file}:{location}: {message}")]
    Parse {
        file: String,
        location: Location,
        message: String,
    },

    #[error(transparent)]
    UnknownRule(#[from] UnknownRule),

    #[error(transparent)]
    SourceMap(#[from] SourceMapError),
}

/// A completed run's diagnostics, grouped by originating fragment with
/// fragment-relative primary locations. Never mutated after construction.
#[derive(Debug)]
pub struct LintReport {
    files: BTreeMap<String, Vec<Diagnostic>>,
    total: usize,
}

impl LintReport {
    /// Per-file diagnostics, ordered by file identity.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[Diagnostic])> + '_ {
        self.files
            .iter()
            .map(|(path, diagnostics)| (path.as_str(), diagnostics.as_slice()))
    }

    /// Total number of diagnostics across all files.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// True when the run produced no diagnostics at all.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Lint the given schema fragments with the selected rules.
///
/// A run either completes with a full report or fails atomically; partial
/// diagnostic sets are never surfaced.
#[tracing::instrument(skip_all, fields(sources = sources.len()))]
pub fn lint_sources(
    sources: Vec<SchemaSource>,
    selection: &RuleSelection,
) -> Result<LintReport, LintError> {
    let map = SourceMap::build(sources.into_iter().map(|s| (s.path, s.text)));

    let tree = apollo_parser::Parser::new(map.buffer()).parse();
    if let Some(error) = tree.errors().next() {
        // apollo-parser is error-tolerant and may report several syntax
        // errors; the run fails on the first.
        let buffer_location = map.location_at(error.index());
        let fragment = map.fragment_for(buffer_location.line)?;
        tracing::debug!(file = fragment.path(), "schema failed to parse");
        return Err(LintError::Parse {
            file: fragment.path().to_string(),
            location: Location::new(
                buffer_location.line - fragment.start_line() + 1,
                buffer_location.column,
            ),
            message: error.message().to_string(),
        });
    }

    let rules = registry::resolve(selection)?;
    let diagnostics = engine::validate(&tree, map.buffer(), map.line_index(), &rules);
    tracing::debug!(diagnostics = diagnostics.len(), "validation complete");

    let files = group_by_file(diagnostics, &map)?;
    let total = files.values().map(Vec::len).sum();
    Ok(LintReport { files, total })
}
