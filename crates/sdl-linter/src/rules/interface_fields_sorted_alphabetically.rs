use super::{is_sorted, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Interface fields appear in alphabetical order.
#[derive(Debug)]
pub(crate) struct InterfaceFieldsSortedAlphabetically;

impl SchemaRule for InterfaceFieldsSortedAlphabetically {
    fn name(&self) -> &'static str {
        "interface_fields_sorted_alphabetically"
    }

    fn description(&self) -> &'static str {
        "Interface fields should be sorted alphabetically"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let cst::Definition::InterfaceTypeDefinition(interface_def) = definition else {
                continue;
            };
            let Some(name_node) = interface_def.name() else {
                continue;
            };
            let fields: Vec<String> = interface_def
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
                        "The fields of interface type `{}` should be sorted alphabetically.",
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
    fn unsorted_interface_fields_are_flagged() {
        let source = "
interface Node {
  updatedAt: String
  id: ID
}
";
        assert_eq!(
            messages(&run_rule(&InterfaceFieldsSortedAlphabetically, source)),
            vec!["The fields of interface type `Node` should be sorted alphabetically."]
        );
    }

    #[test]
    fn sorted_interface_fields_pass() {
        let source = "
interface Node {
  id: ID
  updatedAt: String
}
";
        assert!(run_rule(&InterfaceFieldsSortedAlphabetically, source).is_empty());
    }
}
