use super::{is_sorted, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Object type fields appear in alphabetical order.
#[derive(Debug)]
pub(crate) struct TypeFieldsSortedAlphabetically;

impl SchemaRule for TypeFieldsSortedAlphabetically {
    fn name(&self) -> &'static str {
        "type_fields_sorted_alphabetically"
    }

    fn description(&self) -> &'static str {
        "Object type fields should be sorted alphabetically"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let cst::Definition::ObjectTypeDefinition(object_def) = definition else {
                continue;
            };
            let Some(name_node) = object_def.name() else {
                continue;
            };
            let fields: Vec<String> = object_def
                .fields_definition()
                .into_iter()
                .flat_map(|f| f.field_definitions())
                .filter_map(|f| f.name())
                .map(|n| n.text().to_string())
                .collect();

            if !is_sorted(&fields) {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    self.default_severity(),
                    format!(
                        "The fields of object type `{}` should be sorted alphabetically.",
                        name_node.text()
                    ),
                    ctx.location_of(&name_node),
                ));
            }
        }

        diagnostics
    }
}
