//! Measurement pass: display lines, column widths and row heights

use crate::error::Result;
use crate::grid::cell::Grid;

/// A grid turned into display lines together with its dimensions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Widest display line per column, in chars
    pub col_widths: Vec<usize>,
    /// Most display lines per row
    pub row_heights: Vec<usize>,
    /// `cells[row][col]` holds that cell's display lines
    pub cells: Vec<Vec<Vec<String>>>,
}

impl Layout {
    /// Measure every cell of `grid`. The grid itself is left untouched.
    pub fn measure(grid: &Grid, structured_indent: usize) -> Result<Self> {
        let mut layout = Self::default();

        for row in grid.rows() {
            let mut height = 0;
            let mut lines_by_col = Vec::with_capacity(row.len());

            for (col, cell) in row.iter().enumerate() {
                let lines = cell.display_lines(structured_indent)?;
                if layout.col_widths.len() <= col {
                    layout.col_widths.resize(col + 1, 0);
                }

                height = height.max(lines.len());
                let widest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
                layout.col_widths[col] = layout.col_widths[col].max(widest);
                lines_by_col.push(lines);
            }

            layout.row_heights.push(height);
            layout.cells.push(lines_by_col);
        }

        tracing::debug!(
            rows = layout.row_heights.len(),
            columns = layout.col_widths.len(),
            "measured grid"
        );

        Ok(layout)
    }

    /// Line `line` of the cell at `row`/`col`, or `""` when it does not exist
    pub fn line(&self, row: usize, col: usize, line: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .and_then(|lines| lines.get(line))
            .map(String::as_str)
            .unwrap_or("")
    }
}
