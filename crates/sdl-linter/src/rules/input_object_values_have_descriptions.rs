use super::{SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Input object fields carry descriptions.
#[derive(Debug)]
pub(crate) struct InputObjectValuesHaveDescriptions;

impl SchemaRule for InputObjectValuesHaveDescriptions {
    fn name(&self) -> &'static str {
        "input_object_values_have_descriptions"
    }

    fn description(&self) -> &'static str {
        "Input object values should have a description"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let cst::Definition::InputObjectTypeDefinition(input_def) = definition else {
                continue;
            };
            let Some(input_name) = input_def.name().map(|n| n.text().to_string()) else {
                continue;
            };
            let Some(fields) = input_def.input_fields_definition() else {
                continue;
            };
            for value in fields.input_value_definitions() {
                let Some(name_node) = value.name() else {
                    continue;
                };
                if value.description().is_none() {
                    diagnostics.push(Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!(
                            "The input value `{input_name}.{}` is missing a description.",
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
