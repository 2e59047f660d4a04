//! Human-readable report rendering.

use colored::Colorize;
use sdl_linter::{LintReport, Severity};
use std::fmt::Write;

pub(crate) fn render(report: &LintReport) -> String {
    let mut out = String::new();

    for (path, diagnostics) in report.files() {
        for diagnostic in diagnostics {
            let location = diagnostic
                .primary_location()
                .map(|l| l.to_string())
                .unwrap_or_default();
            let severity = match diagnostic.severity {
                Severity::Error => "error:".red().bold(),
                Severity::Warning => "warning:".yellow().bold(),
            };
            let _ = writeln!(
                out,
                "{}:{location}: {severity} {}",
                path.bold(),
                diagnostic.message
            );
            let _ = writeln!(out, "  {} {}", "rule:".dimmed(), diagnostic.rule.dimmed());
        }
    }

    if !out.is_empty() {
        out.push('\n');
    }
    if report.is_clean() {
        let _ = writeln!(out, "{}", "✔ 0 errors detected".green().bold());
    } else {
        let _ = writeln!(
            out,
            "{}",
            format!("✖ {} error(s) detected", report.total()).red().bold()
        );
    }

    out
}
