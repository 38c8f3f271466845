//! Output formatting for CLI display
//!
//! Renders confirmed selections for stdout and the human-readable summary
//! printed to stderr.

use crate::config::OutputFormat;
use crate::select::Item;
use colored::Colorize;

/// Format selected items according to `format`
///
/// Text formats produce one entry per line with no trailing newline; an empty
/// selection yields an empty string (or `[]` for JSON).
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn format_items(items: &[Item], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Ids => Ok(join_lines(items.iter().map(|item| item.id.as_str()))),
        OutputFormat::Names => Ok(join_lines(items.iter().map(|item| item.name.as_str()))),
        OutputFormat::Json => serde_json::to_string_pretty(items),
    }
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

/// One-line summary of a finished session
#[must_use]
pub fn summary(selected: usize, total: usize) -> String {
    let noun = if selected == 1 { "item" } else { "items" };
    format!("{selected} {noun} selected out of {total}")
}

/// Colored summary for terminals
#[must_use]
pub fn colorize_summary(selected: usize, total: usize) -> String {
    let text = summary(selected, total);
    if selected == 0 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}
