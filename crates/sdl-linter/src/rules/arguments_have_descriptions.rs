use super::{fields_of, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;

/// Field arguments carry descriptions.
#[derive(Debug)]
pub(crate) struct ArgumentsHaveDescriptions;

impl SchemaRule for ArgumentsHaveDescriptions {
    fn name(&self) -> &'static str {
        "arguments_have_descriptions"
    }

    fn description(&self) -> &'static str {
        "Field arguments should have a description"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let Some((type_name, fields)) = fields_of(&definition) else {
                continue;
            };
            for field in fields {
                let Some(field_name) = field.name().map(|n| n.text().to_string()) else {
                    continue;
                };
                for argument in field
                    .arguments_definition()
                    .into_iter()
                    .flat_map(|a| a.input_value_definitions())
                {
                    let Some(name_node) = argument.name() else {
                        continue;
                    };
                    if argument.description().is_none() {
                        diagnostics.push(Diagnostic::new(
                            self.name(),
                            self.default_severity(),
                            format!(
                                "The argument `{}` of `{type_name}.{field_name}` is missing a description.",
                                name_node.text()
                            ),
                            ctx.location_of(&name_node),
                        ));
                    }
                }
            }
        }

        diagnostics
    }
}
