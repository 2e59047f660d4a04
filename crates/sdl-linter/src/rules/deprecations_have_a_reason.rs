use super::{directive_argument, fields_of, find_directive, SchemaContext, SchemaRule};
use crate::diagnostics::Diagnostic;
use apollo_parser::cst::{self, CstNode};

/// Every `@deprecated` carries a non-empty `reason:` argument, so schema
/// consumers know what to migrate to. Checked on object/interface fields
/// and on enum values, the places SDL allows the directive.
#[derive(Debug)]
pub(crate) struct DeprecationsHaveAReason;

impl SchemaRule for DeprecationsHaveAReason {
    fn name(&self) -> &'static str {
        "deprecations_have_a_reason"
    }

    fn description(&self) -> &'static str {
        "Deprecations should state a reason"
    }

    fn check(&self, ctx: &SchemaContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in ctx.document().definitions() {
            if let Some((type_name, fields)) = fields_of(&definition) {
                for field in fields {
                    let Some(name_node) = field.name() else {
                        continue;
                    };
                    if let Some(directive) = find_directive(field.directives(), "deprecated") {
                        if !has_reason(&directive) {
                            diagnostics.push(Diagnostic::new(
                                self.name(),
                                self.default_severity(),
                                format!(
                                    "The field `{type_name}.{}` is deprecated without a reason.",
                                    name_node.text()
                                ),
                                ctx.location_of(&name_node),
                            ));
                        }
                    }
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
                    let Some(name_node) = value.enum_value().and_then(|v| v.name()) else {
                        continue;
                    };
                    if let Some(directive) = find_directive(value.directives(), "deprecated") {
                        if !has_reason(&directive) {
                            diagnostics.push(Diagnostic::new(
                                self.name(),
                                self.default_severity(),
                                format!(
                                    "The enum value `{enum_name}.{}` is deprecated without a reason.",
                                    name_node.text()
                                ),
                                ctx.location_of(&name_node),
                            ));
                        }
                    }
                }
            }
        }

        diagnostics
    }
}

fn has_reason(directive: &cst::Directive) -> bool {
    match directive_argument(directive, "reason") {
        Some(cst::Value::StringValue(value)) => {
            // A present-but-empty reason is as unhelpful as a missing one.
            !value
                .syntax()
                .text()
                .to_string()
                .trim_matches('"')
                .trim()
                .is_empty()
        }
        Some(_) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{messages, run_rule};

    #[test]
    fn deprecated_field_without_reason_is_flagged() {
        let source = "
type User {
  name: String @deprecated
}
";
        assert_eq!(
            messages(&run_rule(&DeprecationsHaveAReason, source)),
            vec!["The field `User.name` is deprecated without a reason."]
        );
    }

    #[test]
    fn empty_reason_is_flagged() {
        let source = r#"
type User {
  name: String @deprecated(reason: "")
}
"#;
        assert_eq!(run_rule(&DeprecationsHaveAReason, source).len(), 1);
    }

    #[test]
    fn deprecated_with_reason_passes() {
        let source = r#"
type User {
  name: String @deprecated(reason: "Use `fullName` instead.")
}
"#;
        assert!(run_rule(&DeprecationsHaveAReason, source).is_empty());
    }

    #[test]
    fn enum_values_are_checked() {
        let source = "
enum Color {
  RED @deprecated
}
";
        assert_eq!(
            messages(&run_rule(&DeprecationsHaveAReason, source)),
            vec!["The enum value `Color.RED` is deprecated without a reason."]
        );
    }

    #[test]
    fn undeprecated_members_pass() {
        let source = "
type User {
  name: String
}
";
        assert!(run_rule(&DeprecationsHaveAReason, source).is_empty());
    }
}
