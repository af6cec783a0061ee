//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles};

/// Render a header line for a command.
///
/// Pretty mode: "Day One · command (context)"
/// Plain mode: "dayone command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("Day One", styles::bold(), ctx.color);
        match context {
            Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
            None => format!("{} \u{00B7} {}", title, command),
        }
    } else {
        format!("dayone {}", command)
    }
}

/// Render rows as a borderless table (pretty) or tab-separated lines (plain).
pub fn simple_table(ctx: &UiContext, columns: &[&str], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max).collect();
    format!("{}...", kept)
}

/// Collapse line breaks so text fits on one row.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
