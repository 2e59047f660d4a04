use super::{is_builtin_scalar, is_introspection_name, type_definition_info, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;

/// Type names start with a capital letter, by GraphQL convention.
#[derive(Debug)]
pub(crate) struct TypesAreCapitalized;

impl SchemaRule for TypesAreCapitalized {
    fn name(&self) -> &'static str {
        "types_are_capitalized"
    }

    fn description(&self) -> &'static str {
        "Type names should start with a capital letter"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            let Some(info) = type_definition_info(&definition) else {
                continue;
            };
            if is_builtin_scalar(&info.name) || is_introspection_name(&info.name) {
                continue;
            }
            if info.name.chars().next().is_some_and(char::is_lowercase) {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    self.default_severity(),
                    format!(
                        "The {} `{}` should start with a capital letter.",
                        info.kind, info.name
                    ),
                    ctx.location_of(&info.name_node),
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
    fn lowercase_type_name_is_flagged() {
        let diagnostics = run_rule(&TypesAreCapitalized, "type user { id: ID }");
        assert_eq!(
            messages(&diagnostics),
            vec!["The object type `user` should start with a capital letter."]
        );
        assert_eq!(diagnostics[0].primary_location().unwrap().line, 1);
    }

    #[test]
    fn capitalized_names_pass() {
        let source = "
type User { id: ID }
enum Color { RED }
scalar Date
";
        assert!(run_rule(&TypesAreCapitalized, source).is_empty());
    }

    #[test]
    fn all_type_kinds_are_checked() {
        let source = "
interface node { id: ID }
input userInput { id: ID }
";
        let diagnostics = run_rule(&TypesAreCapitalized, source);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("interface type `node`"));
        assert!(diagnostics[1].message.contains("input type `userInput`"));
    }
}
