//! Diagnostic types produced by lint rules, and the per-file grouping
//! applied before a report is rendered.

use crate::source_map::{SourceMap, SourceMapError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Severity of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A 1-based line/column position.
///
/// Diagnostics are produced with buffer coordinates; grouping rewrites the
/// primary location to the owning fragment's own line numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single rule violation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Identifier of the rule that produced this diagnostic.
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    /// Ordered locations; the first is the primary location.
    pub locations: Vec<Location>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            locations: vec![location],
        }
    }

    /// Create an error diagnostic.
    #[must_use]
    pub fn error(rule: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self::new(rule, Severity::Error, message, location)
    }

    /// Create a warning diagnostic.
    #[must_use]
    pub fn warning(rule: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self::new(rule, Severity::Warning, message, location)
    }

    /// The first location, against which file grouping is performed.
    #[must_use]
    pub fn primary_location(&self) -> Option<Location> {
        self.locations.first().copied()
    }
}

/// Group diagnostics by the fragment that owns each one's primary location,
/// rewriting that location to be relative to the fragment's own line
/// numbering (`buffer_line - start_line + 1`).
///
/// The result is built once per run by this explicit fold and never mutated
/// afterwards. Relative diagnostic order within a file is preserved.
pub fn group_by_file(
    diagnostics: Vec<Diagnostic>,
    map: &SourceMap,
) -> Result<BTreeMap<String, Vec<Diagnostic>>, SourceMapError> {
    let mut grouped: BTreeMap<String, Vec<Diagnostic>> = BTreeMap::new();

    for mut diagnostic in diagnostics {
        let Some(primary) = diagnostic.locations.first_mut() else {
            continue;
        };
        let fragment = map.fragment_for(primary.line)?;
        primary.line = primary.line - fragment.start_line() + 1;
        grouped
            .entry(fragment.path().to_string())
            .or_default()
            .push(diagnostic);
    }

    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert!(Severity::Error.is_error());
        assert!(!Severity::Warning.is_error());
    }

    #[test]
    fn diagnostic_constructors() {
        let diagnostic = Diagnostic::error("some_rule", "broken", Location::new(3, 7));
        assert_eq!(diagnostic.rule, "some_rule");
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.primary_location(), Some(Location::new(3, 7)));
    }

    #[test]
    fn grouping_rewrites_primary_location_to_fragment_lines() {
        let map = SourceMap::build([
            ("a.graphql", "1\n2\n3\n4\n5\n"),
            ("b.graphql", "1\n2\n3\n"),
        ]);
        let diagnostics = vec![
            Diagnostic::error("r", "in a", Location::new(2, 1)),
            Diagnostic::error("r", "in b", Location::new(7, 4)),
        ];

        let grouped = group_by_file(diagnostics, &map).unwrap();
        assert_eq!(grouped["a.graphql"][0].primary_location(), Some(Location::new(2, 1)));
        // Buffer line 7 is the second line of the 3-line fragment b.
        assert_eq!(grouped["b.graphql"][0].primary_location(), Some(Location::new(2, 4)));
    }

    #[test]
    fn grouping_preserves_order_within_a_file() {
        let map = SourceMap::build([("a.graphql", "1\n2\n3\n")]);
        let diagnostics = vec![
            Diagnostic::error("r1", "first", Location::new(3, 1)),
            Diagnostic::error("r2", "second", Location::new(1, 1)),
        ];

        let grouped = group_by_file(diagnostics, &map).unwrap();
        let messages: Vec<_> = grouped["a.graphql"].iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn grouping_fails_on_out_of_buffer_line() {
        let map = SourceMap::build([("a.graphql", "1\n")]);
        let diagnostics = vec![Diagnostic::error("r", "??", Location::new(9, 1))];
        assert!(group_by_file(diagnostics, &map).is_err());
    }
}
