//! Bordered text tables.
//!
//! Renders already-formatted string cells into a box-drawn table with a
//! header row, one space of padding on each side of every cell, and
//! left-aligned content:
//!
//! ```text
//! ┌──────┬────────────┐
//! │ File │ Orig. Size │
//! ├──────┼────────────┤
//! │ a    │ 1.0 KiB    │
//! └──────┴────────────┘
//! ```

use colored::Colorize;

/// Border colour used when styling is enabled (`#2DE224`).
const BORDER_RGB: (u8, u8, u8) = (0x2D, 0xE2, 0x24);

/// Visual options for [`render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStyle {
    /// Colour the border characters
    pub color: bool,
}

impl TableStyle {
    /// A style without any terminal escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// A style with a coloured border.
    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    fn paint(self, border: &str) -> String {
        if self.color {
            let (r, g, b) = BORDER_RGB;
            border.truecolor(r, g, b).to_string()
        } else {
            border.to_string()
        }
    }
}

/// Render `headers` and `rows` as a bordered table.
///
/// Column widths are the widest cell of each column, measured in characters.
/// Rows with fewer cells than there are headers are padded with empty cells;
/// extra cells are ignored. The result has no trailing newline.
#[must_use]
pub fn render<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>], style: TableStyle) -> String {
    let widths = column_widths(headers, rows);

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule(&widths, ("┌", "┬", "┐"), style));
    lines.push(row_line(&widths, headers, style));
    lines.push(rule(&widths, ("├", "┼", "┤"), style));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(S::as_ref).collect();
        lines.push(row_line(&widths, &cells, style));
    }
    lines.push(rule(&widths, ("└", "┴", "┘"), style));

    lines.join("\n")
}

fn column_widths<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.as_ref().chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn rule(widths: &[usize], (left, middle, right): (&str, &str, &str), style: TableStyle) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    style.paint(&format!("{left}{}{right}", segments.join(middle)))
}

fn row_line(widths: &[usize], cells: &[&str], style: TableStyle) -> String {
    let separator = style.paint("│");
    let mut line = separator.clone();

    for (col, width) in widths.iter().enumerate() {
        let cell = cells.get(col).copied().unwrap_or("");
        let padding = width.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
        line.push(' ');
        line.push_str(&separator);
    }

    line
}
