use super::{fields_of, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;

/// Object and interface fields carry descriptions.
#[derive(Debug)]
pub(crate) struct FieldsHaveDescriptions;

impl SchemaRule for FieldsHaveDescriptions {
    fn name(&self) -> &'static str {
        "fields_have_descriptions"
    }

    fn description(&self) -> &'static str {
        "Object and interface fields should have a description"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let Some((type_name, fields)) = fields_of(&definition) else {
                continue;
            };
            for field in fields {
                let Some(name_node) = field.name() else {
                    continue;
                };
                if field.description().is_none() {
                    diagnostics.push(Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!(
                            "The field `{type_name}.{}` is missing a description.",
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
