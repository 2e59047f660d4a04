use super::{is_camel_case, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Input object field names use camelCase.
#[derive(Debug)]
pub(crate) struct InputObjectValuesAreCamelCased;

impl SchemaRule for InputObjectValuesAreCamelCased {
    fn name(&self) -> &'static str {
        "input_object_values_are_camel_cased"
    }

    fn description(&self) -> &'static str {
        "Input object value names should be camel cased"
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
                let name = name_node.text().to_string();
                if !is_camel_case(&name) {
                    diagnostics.push(Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!("The input value `{input_name}.{name}` is not camel cased."),
                        ctx.location_of(&name_node),
                    ));
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{messages, run_rule};

    #[test]
    fn snake_cased_input_value_is_flagged() {
        let source = "
input UserInput {
  first_name: String
}
";
        assert_eq!(
            messages(&run_rule(&InputObjectValuesAreCamelCased, source)),
            vec!["The input value `UserInput.first_name` is not camel cased."]
        );
    }

    #[test]
    fn camel_cased_input_values_pass() {
        let source = "
input UserInput {
  firstName: String
}
";
        assert!(run_rule(&InputObjectValuesAreCamelCased, source).is_empty());
    }
}
