use super::{base_type_name, is_introspection_name, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;
use std::collections::HashSet;

/// Every defined type is referenced somewhere in the schema.
///
/// Root operation types count as used: either the ones named by an
/// explicit `schema` definition, or the conventional `Query` / `Mutation` /
/// `Subscription` names when there is none. References contributed by type
/// extensions keep the extended type alive.
#[derive(Debug)]
pub(crate) struct DefinedTypesAreUsed;

impl SchemaRule for DefinedTypesAreUsed {
    fn name(&self) -> &'static str {
        "defined_types_are_used"
    }

    fn description(&self) -> &'static str {
        "Defined types should be referenced somewhere in the schema"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut defined: Vec<(String, cst::Name)> = Vec::new();
        let mut used: HashSet<String> = HashSet::new();
        let mut has_schema_definition = false;

        for definition in ctx.document().definitions() {
            match &definition {
                cst::Definition::ObjectTypeDefinition(d) => {
                    if let Some(name) = d.name() {
                        defined.push((name.text().to_string(), name));
                    }
                    collect_interface_refs(d.implements_interfaces(), &mut used);
                    collect_field_refs(d.fields_definition(), &mut used);
                }
                cst::Definition::InterfaceTypeDefinition(d) => {
                    if let Some(name) = d.name() {
                        defined.push((name.text().to_string(), name));
                    }
                    collect_interface_refs(d.implements_interfaces(), &mut used);
                    collect_field_refs(d.fields_definition(), &mut used);
                }
                cst::Definition::UnionTypeDefinition(d) => {
                    if let Some(name) = d.name() {
                        defined.push((name.text().to_string(), name));
                    }
                    collect_union_refs(d.union_member_types(), &mut used);
                }
                cst::Definition::EnumTypeDefinition(d) => {
                    if let Some(name) = d.name() {
                        defined.push((name.text().to_string(), name));
                    }
                }
                cst::Definition::ScalarTypeDefinition(d) => {
                    if let Some(name) = d.name() {
                        defined.push((name.text().to_string(), name));
                    }
                }
                cst::Definition::InputObjectTypeDefinition(d) => {
                    if let Some(name) = d.name() {
                        defined.push((name.text().to_string(), name));
                    }
                    collect_input_refs(d.input_fields_definition(), &mut used);
                }
                cst::Definition::DirectiveDefinition(d) => {
                    for argument in d
                        .arguments_definition()
                        .into_iter()
                        .flat_map(|a| a.input_value_definitions())
                    {
                        if let Some(name) = argument.ty().as_ref().and_then(base_type_name) {
                            used.insert(name);
                        }
                    }
                }
                cst::Definition::SchemaDefinition(d) => {
                    has_schema_definition = true;
                    for root in d.root_operation_type_definitions() {
                        if let Some(name) = root.named_type().and_then(|t| t.name()) {
                            used.insert(name.text().to_string());
                        }
                    }
                }
                cst::Definition::ObjectTypeExtension(d) => {
                    mark_extended(d.name(), &mut used);
                    collect_interface_refs(d.implements_interfaces(), &mut used);
                    collect_field_refs(d.fields_definition(), &mut used);
                }
                cst::Definition::InterfaceTypeExtension(d) => {
                    mark_extended(d.name(), &mut used);
                    collect_interface_refs(d.implements_interfaces(), &mut used);
                    collect_field_refs(d.fields_definition(), &mut used);
                }
                cst::Definition::UnionTypeExtension(d) => {
                    mark_extended(d.name(), &mut used);
                    collect_union_refs(d.union_member_types(), &mut used);
                }
                cst::Definition::InputObjectTypeExtension(d) => {
                    mark_extended(d.name(), &mut used);
                    collect_input_refs(d.input_fields_definition(), &mut used);
                }
                cst::Definition::EnumTypeExtension(d) => mark_extended(d.name(), &mut used),
                cst::Definition::ScalarTypeExtension(d) => mark_extended(d.name(), &mut used),
                _ => {}
            }
        }

        let mut diagnostics = Vec::new();
        for (name, name_node) in defined {
            if is_introspection_name(&name) || used.contains(&name) {
                continue;
            }
            if !has_schema_definition && matches!(name.as_str(), "Query" | "Mutation" | "Subscription")
            {
                continue;
            }
            diagnostics.push(Diagnostic::new(
                self.name(),
                self.default_severity(),
                format!("The type `{name}` is defined but never used."),
                ctx.location_of(&name_node),
            ));
        }

        diagnostics
    }
}

fn mark_extended(name: Option<cst::Name>, used: &mut HashSet<String>) {
    if let Some(name) = name {
        used.insert(name.text().to_string());
    }
}

fn collect_interface_refs(
    implements: Option<cst::ImplementsInterfaces>,
    used: &mut HashSet<String>,
) {
    for named in implements.into_iter().flat_map(|i| i.named_types()) {
        if let Some(name) = named.name() {
            used.insert(name.text().to_string());
        }
    }
}

fn collect_union_refs(members: Option<cst::UnionMemberTypes>, used: &mut HashSet<String>) {
    for named in members.into_iter().flat_map(|m| m.named_types()) {
        if let Some(name) = named.name() {
            used.insert(name.text().to_string());
        }
    }
}

fn collect_field_refs(fields: Option<cst::FieldsDefinition>, used: &mut HashSet<String>) {
    for field in fields.into_iter().flat_map(|f| f.field_definitions()) {
        if let Some(name) = field.ty().as_ref().and_then(base_type_name) {
            used.insert(name);
        }
        for argument in field
            .arguments_definition()
            .into_iter()
            .flat_map(|a| a.input_value_definitions())
        {
            if let Some(name) = argument.ty().as_ref().and_then(base_type_name) {
                used.insert(name);
            }
        }
    }
}

fn collect_input_refs(fields: Option<cst::InputFieldsDefinition>, used: &mut HashSet<String>) {
    for value in fields.into_iter().flat_map(|f| f.input_value_definitions()) {
        if let Some(name) = value.ty().as_ref().and_then(base_type_name) {
            used.insert(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{messages, run_rule};

    #[test]
    fn unreferenced_type_is_flagged() {
        let source = "
type Query { id: ID }
type Orphan { id: ID }
";
        assert_eq!(
            messages(&run_rule(&DefinedTypesAreUsed, source)),
            vec!["The type `Orphan` is defined but never used."]
        );
    }

    #[test]
    fn referenced_types_pass() {
        let source = "
type Query { user: User }
type User { id: ID }
";
        assert!(run_rule(&DefinedTypesAreUsed, source).is_empty());
    }

    #[test]
    fn wrapped_type_references_count() {
        let source = "
type Query { users: [User!]! }
type User { id: ID }
";
        assert!(run_rule(&DefinedTypesAreUsed, source).is_empty());
    }

    #[test]
    fn schema_definition_roots_count_as_used() {
        let source = "
schema { query: Root }
type Root { id: ID }
";
        assert!(run_rule(&DefinedTypesAreUsed, source).is_empty());
    }

    #[test]
    fn conventional_roots_count_without_schema_definition() {
        let source = "
type Query { id: ID }
type Mutation { id: ID }
";
        assert!(run_rule(&DefinedTypesAreUsed, source).is_empty());
    }

    #[test]
    fn union_members_and_argument_types_count() {
        let source = "
type Query { search(filter: Filter): Result }
union Result = User
type User { id: ID }
input Filter { term: String }
";
        assert!(run_rule(&DefinedTypesAreUsed, source).is_empty());
    }

    #[test]
    fn unused_scalar_is_flagged() {
        let source = "
type Query { id: ID }
scalar Date
";
        assert_eq!(
            messages(&run_rule(&DefinedTypesAreUsed, source)),
            vec!["The type `Date` is defined but never used."]
        );
    }

    #[test]
    fn extension_references_keep_types_alive() {
        let source = "
type Query { id: ID }
extend type Query { user: User }
type User { id: ID }
";
        assert!(run_rule(&DefinedTypesAreUsed, source).is_empty());
    }
}
