use super::{is_sorted, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Input object fields appear in alphabetical order.
#[derive(Debug)]
pub(crate) struct InputObjectFieldsSortedAlphabetically;

impl SchemaRule for InputObjectFieldsSortedAlphabetically {
    fn name(&self) -> &'static str {
        "input_object_fields_sorted_alphabetically"
    }

    fn description(&self) -> &'static str {
        "Input object fields should be sorted alphabetically"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let cst::Definition::InputObjectTypeDefinition(input_def) = definition else {
                continue;
            };
            let Some(name_node) = input_def.name() else {
                continue;
            };
            let fields: Vec<String> = input_def
                .input_fields_definition()
                .into_iter()
                .flat_map(|f| f.input_value_definitions())
                .filter_map(|f| f.name())
                .map(|n| n.text().to_string())
                .collect();

            if !is_sorted(&fields) {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    self.default_severity(),
                    format!(
                        "The fields of input type `{}` should be sorted alphabetically.",
                        name_node.text()
                    ),
                    ctx.location_of(&name_node),
                ));
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
    fn unsorted_input_fields_are_flagged() {
        let source = "
input UserInput {
  name: String
  email: String
}
";
        assert_eq!(
            messages(&run_rule(&InputObjectFieldsSortedAlphabetically, source)),
            vec!["The fields of input type `UserInput` should be sorted alphabetically."]
        );
    }

    #[test]
    fn sorted_input_fields_pass() {
        let source = "
input UserInput {
  email: String
  name: String
}
";
        assert!(run_rule(&InputObjectFieldsSortedAlphabetically, source).is_empty());
    }
}
