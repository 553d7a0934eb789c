//! Column-aligned table rendering.
//!
//! A [`Table`] buffers rows of text cells and renders them with per-column
//! width and alignment rules plus an optional colorization hook. Column
//! widths are recomputed from the current rows on every render, so the
//! output always reflects the latest state.
//!
//! Rendering is a display concern, never a correctness concern: ragged
//! rows, missing configuration, and out-of-range column indexes all degrade
//! gracefully instead of producing errors.

use std::fmt;
use std::io;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right (default).
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Split padding as evenly as possible; the extra space goes right.
    Center,
}

/// Colorization hook: receives the column index and the already padded
/// cell text, returns the text to print. Applying the hook after padding
/// keeps ANSI codes wrapped around the padded text, so terminal alignment
/// survives colorization.
pub type Colorizer = Box<dyn Fn(usize, &str) -> String>;

/// A buffer of text rows rendered as an aligned table.
#[derive(Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
    number_of_columns: usize,
    alignments: Vec<Align>,
    min_widths: Vec<usize>,
    max_widths: Vec<usize>,
    colorizer: Option<Colorizer>,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Number of rows currently buffered.
    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// Maximum cell count across all rows seen so far.
    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn reserve(&mut self, number_of_rows: usize) {
        self.rows.reserve(number_of_rows);
    }

    /// Set per-column alignments; unspecified columns default to left.
    pub fn set_alignments(&mut self, alignments: &[Align]) {
        self.alignments = alignments.to_vec();
    }

    /// Set per-column minimum widths; unspecified columns default to 0.
    pub fn set_min_widths(&mut self, min_widths: &[usize]) {
        self.min_widths = min_widths.to_vec();
    }

    /// Set per-column maximum widths; 0 means unbounded. Clamping affects
    /// the computed column width only, cell text is never truncated here.
    pub fn set_max_widths(&mut self, max_widths: &[usize]) {
        self.max_widths = max_widths.to_vec();
    }

    /// Install a colorization hook applied per cell at render time.
    pub fn set_colorizer<F>(&mut self, colorizer: F)
    where
        F: Fn(usize, &str) -> String + 'static,
    {
        self.colorizer = Some(Box::new(colorizer));
    }

    /// Append a row. Rows may have fewer cells than the widest row; no
    /// padding is synthesized for missing trailing cells.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.number_of_columns = self.number_of_columns.max(row.len());
        self.rows.push(row);
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.number_of_columns = 0;
    }

    /// Render the table to a string. An empty table renders to an empty
    /// string (no header, no blank line). Repeated calls with unchanged
    /// rows produce byte-identical output.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.rows.is_empty() {
            return out;
        }

        let widths = self.column_widths();
        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    out.push(' ');
                }
                let width = widths.get(column).copied().unwrap_or(0);

                // a width of 0 (no content ever seen for this column) prints
                // the text verbatim; this should not happen in normal use
                let text = if width == 0 {
                    cell.clone()
                } else {
                    align_text(cell, width, self.alignment(column))
                };

                match &self.colorizer {
                    Some(colorize) => out.push_str(&colorize(column, &text)),
                    None => out.push_str(&text),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Write the rendered table to an output stream.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    fn alignment(&self, column: usize) -> Align {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Compute column widths from the current row contents: minimum widths
    /// first, widened per cell, then clamped to positive maximums.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths = self.min_widths.clone();

        for row in &self.rows {
            if row.len() > widths.len() {
                widths.resize(row.len(), 0);
            }
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(cell.chars().count());
            }
        }

        for (column, width) in widths.iter_mut().enumerate() {
            if let Some(&max_width) = self.max_widths.get(column) {
                if max_width > 0 {
                    *width = (*width).min(max_width);
                }
            }
        }

        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pad `text` to `width` per `align`. Text at or beyond the target width
/// is returned unchanged (no truncation).
fn align_text(text: &str, width: usize, align: Align) -> String {
    if text.chars().count() >= width {
        return text.to_string();
    }
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
        Align::Center => format!("{text:^width$}"),
    }
}
