//! Grid renderer: options, render pass and output sink

use parking_lot::{Mutex, RwLock};
use std::io::{self, Write};

use crate::config::{GridOptions, PartialOptions};
use crate::error::Result;
use crate::grid::border::BorderSet;
use crate::grid::cell::Grid;
use crate::grid::layout::Layout;

/// Render `grid` with `options` without touching any output stream.
///
/// Returns `None` for a grid with no rows.
pub fn format_grid(grid: &Grid, options: &GridOptions) -> Result<Option<String>> {
    if grid.is_empty() {
        return Ok(None);
    }

    let layout = Layout::measure(grid, options.structured_indent)?;
    let borders = BorderSet::for_options(options);
    let padding = " ".repeat(options.cell_padding);

    let top = borders.border(&layout.col_widths, options.cell_padding, &borders.top);
    let separator = borders.border(&layout.col_widths, options.cell_padding, &borders.middle);
    let bottom = borders.border(&layout.col_widths, options.cell_padding, &borders.bottom);

    let line_count = layout.row_heights.iter().sum::<usize>() + layout.row_heights.len() + 1;
    let mut output = Vec::with_capacity(line_count);
    output.push(top);

    for (row, height) in layout.row_heights.iter().enumerate() {
        if row > 0 {
            output.push(separator.clone());
        }
        for line_index in 0..*height {
            let mut line = String::new();
            line.push(borders.vertical);
            for (col, width) in layout.col_widths.iter().enumerate() {
                let content = layout.line(row, col, line_index);
                line.push_str(&padding);
                line.push_str(content);
                line.extend(std::iter::repeat(' ').take(width.saturating_sub(content.chars().count())));
                line.push_str(&padding);
                line.push(borders.vertical);
            }
            output.push(line);
        }
    }

    output.push(bottom);
    Ok(Some(output.join("\n")))
}

/// A grid renderer with its own options and output sink
pub struct GridLog {
    options: RwLock<GridOptions>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl GridLog {
    pub fn new() -> Self {
        Self::with_options(GridOptions::default())
    }

    pub fn with_options(options: GridOptions) -> Self {
        Self {
            options: RwLock::new(options),
            sink: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Send console output to `sink` instead of stdout
    pub fn with_sink(self, sink: impl Write + Send + 'static) -> Self {
        Self {
            options: self.options,
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Snapshot of the current options
    pub fn options(&self) -> GridOptions {
        self.options.read().clone()
    }

    pub fn apply_options(&self, partial: impl Into<PartialOptions>) -> &Self {
        let partial = partial.into();
        tracing::trace!(?partial, "applying grid options");
        self.options.write().merge(&partial);
        self
    }

    pub fn reset_options(&self) -> &Self {
        tracing::trace!("resetting grid options");
        *self.options.write() = GridOptions::default();
        self
    }

    /// Render `input`, echoing it to the sink when `emit_to_console` is set.
    ///
    /// Empty input renders nothing and returns `None`.
    pub fn render(&self, input: impl Into<Grid>) -> Result<Option<String>> {
        let grid = input.into();
        let options = self.options();

        let Some(output) = format_grid(&grid, &options)? else {
            return Ok(None);
        };

        if options.emit_to_console {
            let mut sink = self.sink.lock();
            writeln!(sink, "{output}")?;
            sink.flush()?;
        }

        Ok(Some(output))
    }
}

impl Default for GridLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GridLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridLog")
            .field("options", &*self.options.read())
            .finish_non_exhaustive()
    }
}
