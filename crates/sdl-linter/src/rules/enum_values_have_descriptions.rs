use super::{SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Enum values carry descriptions.
#[derive(Debug)]
pub(crate) struct EnumValuesHaveDescriptions;

impl SchemaRule for EnumValuesHaveDescriptions {
    fn name(&self) -> &'static str {
        "enum_values_have_descriptions"
    }

    fn description(&self) -> &'static str {
        "Enum values should have a description"
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
                if value.description().is_none() {
                    diagnostics.push(Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!(
                            "The enum value `{enum_name}.{}` is missing a description.",
                            name_node.text()
                        ),
                        ctx.location_of(&name_node),
                    ));
                }
            }
        }

        diagnostics
    }
}
