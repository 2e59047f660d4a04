use super::{is_builtin_scalar, is_introspection_name, type_definition_info, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;

/// Every type definition carries a description. Descriptions are the schema
/// consumer's documentation; extensions are exempt since the description
/// lives on the base definition.
#[derive(Debug)]
pub(crate) struct TypesHaveDescriptions;

impl SchemaRule for TypesHaveDescriptions {
    fn name(&self) -> &'static str {
        "types_have_descriptions"
    }

    fn description(&self) -> &'static str {
        "Type definitions should have a description"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let Some(info) = type_definition_info(&definition) else {
                continue;
            };
            if is_builtin_scalar(&info.name) || is_introspection_name(&info.name) {
                continue;
            }
            if info.description.is_none() {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    self.default_severity(),
                    format!("The {} `{}` is missing a description.", info.kind, info.name),
                    ctx.location_of(&info.name_node),
                ));
            }
        }

        diagnostics
    }
}
