//! Report rendering. Formatters only render the grouped report; they never
//! re-order or filter it.

mod json;
mod text;

use sdl_config::OutputFormat;
use sdl_linter::LintReport;

/// Render a report in the requested format.
#[must_use]
pub fn render(report: &LintReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
    }
}
