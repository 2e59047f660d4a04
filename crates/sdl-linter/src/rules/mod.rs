//! The rule capability and the shared traversal helpers rules lean on.
//!
//! Each rule is an independent, stateless check over the parsed schema:
//! it receives read-only access to the syntax tree and returns the
//! diagnostics it found, in pre-order traversal order.

mod arguments_have_descriptions;
mod defined_types_are_used;
mod deprecations_have_a_reason;
mod descriptions_are_capitalized;
mod enum_values_all_caps;
mod enum_values_have_descriptions;
mod enum_values_sorted_alphabetically;
mod fields_are_camel_cased;
mod fields_have_descriptions;
mod input_object_fields_sorted_alphabetically;
mod input_object_values_are_camel_cased;
mod input_object_values_have_descriptions;
mod interface_fields_sorted_alphabetically;
mod type_fields_sorted_alphabetically;
mod types_are_capitalized;
mod types_have_descriptions;

pub(crate) use arguments_have_descriptions::ArgumentsHaveDescriptions;
pub(crate) use defined_types_are_used::DefinedTypesAreUsed;
pub(crate) use deprecations_have_a_reason::DeprecationsHaveAReason;
pub(crate) use descriptions_are_capitalized::DescriptionsAreCapitalized;
pub(crate) use enum_values_all_caps::EnumValuesAllCaps;
pub(crate) use enum_values_have_descriptions::EnumValuesHaveDescriptions;
pub(crate) use enum_values_sorted_alphabetically::EnumValuesSortedAlphabetically;
pub(crate) use fields_are_camel_cased::FieldsAreCamelCased;
pub(crate) use fields_have_descriptions::FieldsHaveDescriptions;
pub(crate) use input_object_fields_sorted_alphabetically::InputObjectFieldsSortedAlphabetically;
pub(crate) use input_object_values_are_camel_cased::InputObjectValuesAreCamelCased;
pub(crate) use input_object_values_have_descriptions::InputObjectValuesHaveDescriptions;
pub(crate) use interface_fields_sorted_alphabetically::InterfaceFieldsSortedAlphabetically;
pub(crate) use type_fields_sorted_alphabetically::TypeFieldsSortedAlphabetically;
pub(crate) use types_are_capitalized::TypesAreCapitalized;
pub(crate) use types_have_descriptions::TypesHaveDescriptions;

use crate::diagnostics::{Diagnostic, Location, Severity};
use crate::source_map::LineIndex;
use apollo_parser::cst::{self, CstNode};

/// Read-only view of one parsed schema handed to every rule.
pub struct SchemaContext<'a> {
    source: &'a str,
    tree: &'a apollo_parser::SyntaxTree,
    line_index: &'a LineIndex,
}

impl<'a> SchemaContext<'a> {
    #[must_use]
    pub fn new(
        source: &'a str,
        tree: &'a apollo_parser::SyntaxTree,
        line_index: &'a LineIndex,
    ) -> Self {
        Self {
            source,
            tree,
            line_index,
        }
    }

    #[must_use]
    pub fn document(&self) -> cst::Document {
        self.tree.document()
    }

    /// Buffer location (1-based line/column) of a node's first character.
    #[must_use]
    pub fn location_of(&self, node: &impl CstNode) -> Location {
        let offset: usize = node.syntax().text_range().start().into();
        self.line_index.location(self.source, offset)
    }
}

/// An independent, stateless schema check.
///
/// Rules never observe each other's output and hold no mutable state, so
/// the engine is free to run them in any order.
pub trait SchemaRule: Send + Sync + std::fmt::Debug {
    /// Stable identifier, as used in `--rules` and config files.
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;

    /// Severity applied to this rule's diagnostics.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Traverse the schema and report violations.
    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic>;
}

/// Scalars defined by the GraphQL spec itself; never subject to rules.
pub(crate) fn is_builtin_scalar(name: &str) -> bool {
    matches!(name, "String" | "Int" | "Float" | "Boolean" | "ID")
}

/// Introspection names are reserved and never user-authored.
pub(crate) fn is_introspection_name(name: &str) -> bool {
    name.starts_with("__")
}

pub(crate) fn is_camel_case(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return true;
    };
    first.is_lowercase() && !name.contains('_')
}

pub(crate) fn is_all_caps(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// The raw string content of a description node, with quote delimiters and
/// surrounding whitespace stripped.
pub(crate) fn description_text(description: &cst::Description) -> String {
    description
        .syntax()
        .text()
        .to_string()
        .trim_matches('"')
        .trim()
        .to_string()
}

/// The base type name of a type reference, unwrapping `NonNull` and `List`
/// wrappers.
pub(crate) fn base_type_name(ty: &cst::Type) -> Option<String> {
    match ty {
        cst::Type::NamedType(named) => named.name().map(|n| n.text().to_string()),
        cst::Type::ListType(list) => list.ty().as_ref().and_then(base_type_name),
        cst::Type::NonNullType(non_null) => {
            if let Some(named) = non_null.named_type() {
                named.name().map(|n| n.text().to_string())
            } else if let Some(list) = non_null.list_type() {
                list.ty().as_ref().and_then(base_type_name)
            } else {
                None
            }
        }
    }
}

/// Find a directive by name on an optional directive list.
pub(crate) fn find_directive(
    directives: Option<cst::Directives>,
    name: &str,
) -> Option<cst::Directive> {
    directives?
        .directives()
        .find(|d| d.name().is_some_and(|n| n.text().as_str() == name))
}

/// The value of a directive argument, if present.
pub(crate) fn directive_argument(directive: &cst::Directive, name: &str) -> Option<cst::Value> {
    directive
        .arguments()?
        .arguments()
        .find(|a| a.name().is_some_and(|n| n.text().as_str() == name))
        .and_then(|a| a.value())
}

/// A type definition's kind label, name, and description, or `None` for
/// non-type definitions and extensions.
pub(crate) struct TypeDefInfo {
    pub kind: &'static str,
    pub name: String,
    pub name_node: cst::Name,
    pub description: Option<cst::Description>,
}

pub(crate) fn type_definition_info(definition: &cst::Definition) -> Option<TypeDefInfo> {
    let (kind, name_node, description) = match definition {
        cst::Definition::ObjectTypeDefinition(d) => ("object type", d.name(), d.description()),
        cst::Definition::InterfaceTypeDefinition(d) => {
            ("interface type", d.name(), d.description())
        }
        cst::Definition::EnumTypeDefinition(d) => ("enum type", d.name(), d.description()),
        cst::Definition::UnionTypeDefinition(d) => ("union type", d.name(), d.description()),
        cst::Definition::ScalarTypeDefinition(d) => ("scalar type", d.name(), d.description()),
        cst::Definition::InputObjectTypeDefinition(d) => ("input type", d.name(), d.description()),
        _ => return None,
    };
    let name_node = name_node?;
    Some(TypeDefInfo {
        kind,
        name: name_node.text().to_string(),
        name_node,
        description,
    })
}

/// Field definitions of an object or interface type, with the type's name.
pub(crate) fn fields_of(definition: &cst::Definition) -> Option<(String, Vec<cst::FieldDefinition>)> {
    let (name, fields) = match definition {
        cst::Definition::ObjectTypeDefinition(d) => (d.name(), d.fields_definition()),
        cst::Definition::InterfaceTypeDefinition(d) => (d.name(), d.fields_definition()),
        _ => return None,
    };
    let name = name?.text().to_string();
    let fields = fields.map_or_else(Vec::new, |f| f.field_definitions().collect());
    Some((name, fields))
}

/// Whether consecutive names appear in alphabetical order.
pub(crate) fn is_sorted(names: &[String]) -> bool {
    names.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers shared by the per-rule test modules.

    use super::{SchemaContext, SchemaRule};
    use crate::diagnostics::Diagnostic;
    use crate::source_map::LineIndex;

    /// Parse a schema and run a single rule over it.
    pub(crate) fn run_rule(rule: &dyn SchemaRule, source: &str) -> Vec<Diagnostic> {
        let tree = apollo_parser::Parser::new(source).parse();
        assert_eq!(
            tree.errors().len(),
            0,
            "test schema must parse cleanly: {source}"
        );
        let line_index = LineIndex::new(source);
        let ctx = SchemaContext::new(source, &tree, &line_index);
        rule.check(&ctx)
    }

    pub(crate) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_checks() {
        assert!(is_camel_case("userName"));
        assert!(is_camel_case("id"));
        assert!(!is_camel_case("UserName"));
        assert!(!is_camel_case("user_name"));
        assert!(is_camel_case(""));
    }

    #[test]
    fn all_caps_checks() {
        assert!(is_all_caps("RED"));
        assert!(is_all_caps("DARK_RED"));
        assert!(is_all_caps("HTTP2"));
        assert!(!is_all_caps("Red"));
        assert!(!is_all_caps("dark_red"));
    }

    #[test]
    fn builtin_and_introspection_names() {
        assert!(is_builtin_scalar("ID"));
        assert!(!is_builtin_scalar("Date"));
        assert!(is_introspection_name("__Type"));
        assert!(!is_introspection_name("Type"));
    }

    #[test]
    fn sorted_checks() {
        let sorted = vec!["a".to_string(), "b".to_string(), "b".to_string()];
        let unsorted = vec!["b".to_string(), "a".to_string()];
        assert!(is_sorted(&sorted));
        assert!(!is_sorted(&unsorted));
        assert!(is_sorted(&[]));
    }
}
