//! Executes resolved rules over a parsed schema and collects diagnostics.

use crate::diagnostics::{Diagnostic, Location, Severity};
use crate::rules::{SchemaContext, SchemaRule};
use crate::source_map::LineIndex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Diagnostic category used when a rule itself fails.
pub const RULE_EXECUTION_ERROR: &str = "internal/rule-execution";

/// Run the given rules over a parsed schema.
///
/// Rules are stateless and read-only, so their relative execution order
/// cannot change what each one reports; the returned sequence is ordered
/// rule-major, with each rule's diagnostics in its own traversal order.
/// A failure inside one rule is isolated: it is reported under
/// [`RULE_EXECUTION_ERROR`] and the remaining rules still run.
#[must_use]
#[tracing::instrument(skip_all, fields(rules = rules.len()))]
pub fn validate(
    tree: &apollo_parser::SyntaxTree,
    source: &str,
    line_index: &LineIndex,
    rules: &[Arc<dyn SchemaRule>],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for rule in rules {
        let ctx = SchemaContext::new(source, tree, line_index);
        match catch_unwind(AssertUnwindSafe(|| rule.check(&ctx))) {
            Ok(found) => {
                if !found.is_empty() {
                    tracing::debug!(rule = rule.name(), count = found.len(), "rule found issues");
                }
                diagnostics.extend(found);
            }
            Err(_) => {
                tracing::error!(
                    rule = rule.name(),
                    "rule failed while traversing; continuing with remaining rules"
                );
                diagnostics.push(Diagnostic::new(
                    RULE_EXECUTION_ERROR,
                    Severity::Error,
                    format!("The rule `{}` failed while traversing the schema.", rule.name()),
                    Location::new(1, 1),
                ));
            }
        }
    }

    diagnostics
}
