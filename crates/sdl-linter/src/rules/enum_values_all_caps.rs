use super::{is_all_caps, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Enum values are SCREAMING_SNAKE_CASE.
#[derive(Debug)]
pub(crate) struct EnumValuesAllCaps;

impl SchemaRule for EnumValuesAllCaps {
    fn name(&self) -> &'static str {
        "enum_values_all_caps"
    }

    fn description(&self) -> &'static str {
        "Enum values should be uppercase"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let cst::Definition::EnumTypeDefinition(enum_def) = definition else {
                continue;
            };
            let Some(enum_name) = enum_def.name().map(|n| n.text().to_string()) else {
                continue;
            };
            let Some(values) = enum_def.enum_values_definition() else {
                continue;
            };
            for value in values.enum_value_definitions() {
                let Some(name_node) = value.enum_value().and_then(|v| v.name()) else {
                    continue;
                };
                let name = name_node.text().to_string();
                if !is_all_caps(&name) {
                    diagnostics.push(Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!("The enum value `{enum_name}.{name}` should be uppercase."),
                        ctx.location_of(&name_node),
                    ));
                }
            }
        }

        diagnostics
    }
}
