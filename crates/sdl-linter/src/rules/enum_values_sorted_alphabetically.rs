use super::{is_sorted, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Enum values appear in alphabetical order.
#[derive(Debug)]
pub(crate) struct EnumValuesSortedAlphabetically;

impl SchemaRule for EnumValuesSortedAlphabetically {
    fn name(&self) -> &'static str {
        "enum_values_sorted_alphabetically"
    }

    fn description(&self) -> &'static str {
        "Enum values should be listed alphabetically"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let cst::Definition::EnumTypeDefinition(enum_def) = definition else {
                continue;
            };
            let Some(name_node) = enum_def.name() else {
                continue;
            };
            let values: Vec<String> = enum_def
                .enum_values_definition()
                .into_iter()
                .flat_map(|v| v.enum_value_definitions())
                .filter_map(|v| v.enum_value().and_then(|ev| ev.name()))
                .map(|n| n.text().to_string())
                .collect();

            if !is_sorted(&values) {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    self.default_severity(),
                    format!(
                        "The enum `{}` should list its values alphabetically.",
                        name_node.text()
                    ),
                    ctx.location_of(&name_node),
                ));
            }
        }

        diagnostics
    }
}
