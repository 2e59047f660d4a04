//! Machine-readable report rendering.

use sdl_linter::LintReport;

pub(crate) fn render(report: &LintReport) -> String {
    let errors: Vec<serde_json::Value> = report
        .files()
        .flat_map(|(path, diagnostics)| {
            diagnostics.iter().map(move |diagnostic| {
                let location = diagnostic.primary_location();
                serde_json::json!({
                    "message": diagnostic.message,
                    "rule": diagnostic.rule,
                    "severity": diagnostic.severity,
                    "location": {
                        "file": path,
                        "line": location.map(|l| l.line),
                        "column": location.map(|l| l.column),
                    },
                })
            })
        })
        .collect();

    let mut rendered = serde_json::json!({ "errors": errors }).to_string();
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl_linter::{lint_sources, RuleSelection, SchemaSource};

    #[test]
    fn renders_a_stable_machine_readable_shape() {
        let report = lint_sources(
            vec![SchemaSource::new("schema.graphql", "type Query {\n  id: ID\n}")],
            &RuleSelection::Only(vec!["fields_have_descriptions".to_string()]),
        )
        .unwrap();

        let rendered = render(&report);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let errors = parsed["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["rule"], "fields_have_descriptions");
        assert_eq!(errors[0]["severity"], "error");
        assert_eq!(errors[0]["location"]["file"], "schema.graphql");
        assert_eq!(errors[0]["location"]["line"], 2);
        assert_eq!(errors[0]["location"]["column"], 3);
    }

    #[test]
    fn clean_report_renders_an_empty_error_list() {
        let report = lint_sources(
            vec![SchemaSource::new("schema.graphql", "type Query { id: ID }")],
            &RuleSelection::Only(vec![]),
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&render(&report)).unwrap();
        assert_eq!(parsed["errors"].as_array().unwrap().len(), 0);
    }
}
