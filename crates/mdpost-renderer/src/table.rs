//! Monospace table collection and layout.
//!
//! The platform accepts no `<table>` markup, so tables are laid out as
//! aligned pipe-delimited text and shipped through the same `<pre>`
//! framing as a code block. Cell content is flattened to plain text while
//! the event stream is consumed; layout happens once the table ends.

use crate::width::display_width;

/// Minimum column width, matching the minimal separator dash run `---`.
const MIN_COLUMN_WIDTH: usize = 3;

/// Collects cell text for one table and lays it out as a text block.
///
/// Rows are stored as entered; short rows are padded with empty cells at
/// render time only. Inline markup inside cells is flattened: text and
/// code spans keep their content, line breaks become a single space, and
/// container inlines (emphasis, links) contribute nothing of their own.
#[derive(Default)]
pub(crate) struct TableState {
    rows: Vec<Vec<String>>,
    header_rows: usize,
    cell: Option<String>,
}

impl TableState {
    /// Start the header section; header rows are counted until it ends.
    pub(crate) fn start_head(&mut self) {
        self.rows.push(Vec::new());
    }

    /// End the header section.
    pub(crate) fn end_head(&mut self) {
        self.header_rows = self.rows.len();
    }

    /// Start a new data row.
    pub(crate) fn start_row(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Start collecting a cell.
    pub(crate) fn start_cell(&mut self) {
        self.cell = Some(String::new());
    }

    /// Finish the current cell, trimming surrounding whitespace.
    pub(crate) fn end_cell(&mut self) {
        if let Some(cell) = self.cell.take()
            && let Some(row) = self.rows.last_mut()
        {
            row.push(cell.trim().to_owned());
        }
    }

    /// Append literal or code span text to the current cell.
    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(cell) = &mut self.cell {
            cell.push_str(text);
        }
    }

    /// Append a line break to the current cell. Table rows are single
    /// lines, so breaks flatten to a space.
    pub(crate) fn push_break(&mut self) {
        self.push_text(" ");
    }

    /// Lay the collected rows out as an aligned pipe-delimited block.
    ///
    /// Returns an empty string for a table with no rows. Column count is
    /// the maximum cell count over all rows; every column is at least
    /// [`MIN_COLUMN_WIDTH`] wide and wide enough for its widest cell.
    /// A dash separator follows the last header row when at least one
    /// data row comes after it.
    pub(crate) fn layout(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| display_width(cell))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        for (i, row) in self.rows.iter().enumerate() {
            let mut line = String::from("| ");
            for (col, width) in widths.iter().enumerate() {
                let cell = row.get(col).map_or("", String::as_str);
                line.push_str(cell);
                for _ in display_width(cell)..*width {
                    line.push(' ');
                }
                line.push_str(" | ");
            }
            lines.push(line);

            if i + 1 == self.header_rows && i + 1 < self.rows.len() {
                let mut separator = String::from("|");
                for width in &widths {
                    separator.push_str(&"-".repeat(width + 2));
                    separator.push('|');
                }
                lines.push(separator);
            }
        }

        lines.join("\n")
    }
}
