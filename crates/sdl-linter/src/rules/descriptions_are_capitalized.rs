use super::{description_text, fields_of, type_definition_info, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst;

/// Description prose starts with a capital letter.
///
/// Applies to type definitions, object/interface fields, enum values, and
/// input values. Descriptions opening with a non-letter (e.g. a code span)
/// are left alone.
#[derive(Debug)]
pub(crate) struct DescriptionsAreCapitalized;

impl SchemaRule for DescriptionsAreCapitalized {
    fn name(&self) -> &'static str {
        "descriptions_are_capitalized"
    }

    fn description(&self) -> &'static str {
        "Descriptions should start with a capital letter"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            if let Some(info) = type_definition_info(&definition) {
                if let Some(description) = &info.description {
                    self.check_description(ctx, description, &info.name, &mut diagnostics);
                }
            }

            if let Some((type_name, fields)) = fields_of(&definition) {
                for field in fields {
                    let (Some(description), Some(name_node)) = (field.description(), field.name())
                    else {
                        continue;
                    };
                    let member = format!("{type_name}.{}", name_node.text());
                    self.check_description(ctx, &description, &member, &mut diagnostics);
                }
            } else if let cst::Definition::EnumTypeDefinition(enum_def) = &definition {
                let Some(enum_name) = enum_def.name().map(|n| n.text().to_string()) else {
                    continue;
                };
                for value in enum_def
                    .enum_values_definition()
                    .into_iter()
                    .flat_map(|v| v.enum_value_definitions())
                {
                    let (Some(description), Some(name_node)) = (
                        value.description(),
                        value.enum_value().and_then(|v| v.name()),
                    ) else {
                        continue;
                    };
                    let member = format!("{enum_name}.{}", name_node.text());
                    self.check_description(ctx, &description, &member, &mut diagnostics);
                }
            } else if let cst::Definition::InputObjectTypeDefinition(input_def) = &definition {
                let Some(input_name) = input_def.name().map(|n| n.text().to_string()) else {
                    continue;
                };
                for value in input_def
                    .input_fields_definition()
                    .into_iter()
                    .flat_map(|f| f.input_value_definitions())
                {
                    let (Some(description), Some(name_node)) = (value.description(), value.name())
                    else {
                        continue;
                    };
                    let member = format!("{input_name}.{}", name_node.text());
                    self.check_description(ctx, &description, &member, &mut diagnostics);
                }
            }
        }

        diagnostics
    }
}

impl DescriptionsAreCapitalized {
    fn check_description(
        &self,
        ctx: &SchemaContext<'_>,
        description: &cst::Description,
        subject: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let text = description_text(description);
        if text.chars().next().is_some_and(char::is_lowercase) {
            diagnostics.push(Diagnostic::new(
                self.name(),
                self.default_severity(),
                format!("The description of `{subject}` should start with a capital letter."),
                ctx.location_of(description),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{messages, run_rule};

    #[test]
    fn lowercase_type_description_is_flagged() {
        let source = r#"
"""a user."""
type User { id: ID }
"#;
        assert_eq!(
            messages(&run_rule(&DescriptionsAreCapitalized, source)),
            vec!["The description of `User` should start with a capital letter."]
        );
    }

    #[test]
    fn lowercase_field_description_is_flagged() {
        let source = r#"
type User {
  "the identifier."
  id: ID
}
"#;
        assert_eq!(
            messages(&run_rule(&DescriptionsAreCapitalized, source)),
            vec!["The description of `User.id` should start with a capital letter."]
        );
    }

    #[test]
    fn capitalized_descriptions_pass() {
        let source = r#"
"""A user."""
type User {
  """The identifier."""
  id: ID
}
"#;
        assert!(run_rule(&DescriptionsAreCapitalized, source).is_empty());
    }

    #[test]
    fn non_letter_openings_are_ignored() {
        let source = r#"
"""`id` of the user."""
type User { id: ID }
"#;
        assert!(run_rule(&DescriptionsAreCapitalized, source).is_empty());
    }

    #[test]
    fn enum_and_input_descriptions_are_checked() {
        let source = r#"
enum Color {
  "bright red."
  RED
}
input UserInput {
  "the name."
  name: String
}
"#;
        let diagnostics = run_rule(&DescriptionsAreCapitalized, source);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("`Color.RED`"));
        assert!(diagnostics[1].message.contains("`UserInput.name`"));
    }
}
