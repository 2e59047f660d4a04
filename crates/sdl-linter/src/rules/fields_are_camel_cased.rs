use super::{fields_of, is_camel_case, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;

/// Object and interface field names use camelCase.
#[derive(Debug)]
pub(crate) struct FieldsAreCamelCased;

impl SchemaRule for FieldsAreCamelCased {
    fn name(&self) -> &'static str {
        "fields_are_camel_cased"
    }

    fn description(&self) -> &'static str {
        "Object and interface field names should be camel cased"
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
                let name = name_node.text().to_string();
                if !is_camel_case(&name) {
                    diagnostics.push(Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!("The field `{type_name}.{name}` is not camel cased."),
                        ctx.location_of(&name_node),
                    ));
                }
            }
        }

        diagnostics
    }
}
