//! The process-wide rule registry.
//!
//! Initialized once from a fixed table and never mutated afterwards, so it
//! is safe to share read-only across concurrent runs.

use crate::rules::{self, SchemaRule};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Every registered rule, in canonical order. Canonical order determines
/// diagnostic ordering when all rules run, so it must stay deterministic
/// across releases: alphabetical by rule name.
static RULES: LazyLock<Vec<Arc<dyn SchemaRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(rules::ArgumentsHaveDescriptions),
        Arc::new(rules::DefinedTypesAreUsed),
        Arc::new(rules::DeprecationsHaveAReason),
        Arc::new(rules::DescriptionsAreCapitalized),
        Arc::new(rules::EnumValuesAllCaps),
        Arc::new(rules::EnumValuesHaveDescriptions),
        Arc::new(rules::EnumValuesSortedAlphabetically),
        Arc::new(rules::FieldsAreCamelCased),
        Arc::new(rules::FieldsHaveDescriptions),
        Arc::new(rules::InputObjectFieldsSortedAlphabetically),
        Arc::new(rules::InputObjectValuesAreCamelCased),
        Arc::new(rules::InputObjectValuesHaveDescriptions),
        Arc::new(rules::InterfaceFieldsSortedAlphabetically),
        Arc::new(rules::TypeFieldsSortedAlphabetically),
        Arc::new(rules::TypesAreCapitalized),
        Arc::new(rules::TypesHaveDescriptions),
    ]
});

/// All registered rules in canonical order.
#[must_use]
pub fn all_rules() -> &'static [Arc<dyn SchemaRule>] {
    &RULES
}

/// Names of all registered rules in canonical order.
#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    all_rules().iter().map(|rule| rule.name()).collect()
}

/// Which rules a run should execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSelection {
    /// Run every registered rule, in canonical order.
    All,
    /// Run exactly the named rules, in the order given.
    Only(Vec<String>),
}

/// A requested rule name is not registered.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rule name '{name}'")]
pub struct UnknownRule {
    pub name: String,
}

/// Resolve a selection against the registry.
///
/// Resolution is pure and idempotent: the same selection always yields the
/// same ordered rule sequence. Unknown names fail loudly rather than being
/// silently dropped.
pub fn resolve(selection: &RuleSelection) -> Result<Vec<Arc<dyn SchemaRule>>, UnknownRule> {
    match selection {
        RuleSelection::All => Ok(all_rules().to_vec()),
        RuleSelection::Only(names) => names
            .iter()
            .map(|name| {
                all_rules()
                    .iter()
                    .find(|rule| rule.name() == name.as_str())
                    .cloned()
                    .ok_or_else(|| UnknownRule { name: name.clone() })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_alphabetical() {
        let names = all_rule_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(!names.is_empty());
    }

    #[test]
    fn resolve_all_returns_every_rule_in_canonical_order() {
        let resolved = resolve(&RuleSelection::All).unwrap();
        let resolved_names: Vec<_> = resolved.iter().map(|r| r.name()).collect();
        assert_eq!(resolved_names, all_rule_names());
    }

    #[test]
    fn resolve_only_preserves_requested_order() {
        let selection = RuleSelection::Only(vec![
            "types_have_descriptions".to_string(),
            "enum_values_all_caps".to_string(),
        ]);
        let resolved = resolve(&selection).unwrap();
        let names: Vec<_> = resolved.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["types_have_descriptions", "enum_values_all_caps"]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let selection = RuleSelection::Only(vec![
            "fields_have_descriptions".to_string(),
            "types_are_capitalized".to_string(),
        ]);
        let first: Vec<_> = resolve(&selection).unwrap().iter().map(|r| r.name()).collect();
        let second: Vec<_> = resolve(&selection).unwrap().iter().map(|r| r.name()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_rule_name_fails_and_names_the_offender() {
        let selection = RuleSelection::Only(vec!["no_such_rule".to_string()]);
        let error = resolve(&selection).unwrap_err();
        assert_eq!(error.name, "no_such_rule");
        assert_eq!(error.to_string(), "unknown rule name 'no_such_rule'");
    }
}
