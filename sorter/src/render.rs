//! Text and JSON renderers for [`TableView`].

use anyhow::{Context, Result};
use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

use crate::core::view::{HeaderView, TableView};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(view: &TableView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}

/// Plain-text table; the active header carries `*` before its glyph.
///
/// Columns are aligned by terminal display width, so wide (e.g. Hangul)
/// characters count as two columns.
pub fn render_text(view: &TableView) -> String {
    let headers: Vec<String> = view.headers.iter().map(header_label).collect();
    let mut widths: Vec<usize> = headers.iter().map(|label| label.width()).collect();
    for row in &view.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &view.rows {
        push_line(&mut out, &row.cells, &widths);
    }
    out
}

pub fn render_json(view: &TableView) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(view).context("serialize table view")?;
    payload.push('\n');
    Ok(payload)
}

fn header_label(header: &HeaderView) -> String {
    let marker = if header.active { "*" } else { "" };
    format!("{}{} {}", header.column, marker, header.indicator.glyph())
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            // `{:<width$}` pads by char count, not display width.
            let padding = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
