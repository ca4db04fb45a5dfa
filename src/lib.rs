//! Gridlog - render rows of values as a bordered text grid
//!
//! Cells may be plain text, multi-line text, or structured values that are
//! pretty-printed as JSON. Every render measures column widths and row
//! heights, then lays out an aligned box-drawing grid.
//!
//! ```
//! use gridlog::{grid, GridLog, PartialOptions};
//!
//! let log = GridLog::new();
//! let output = log
//!     .apply_options(PartialOptions::default().emit_to_console(false))
//!     .render(grid!["x", "y"])
//!     .unwrap();
//! assert_eq!(output.as_deref(), Some("┌───┬───┐\n│ x │ y │\n└───┴───┘"));
//! ```

pub mod config;
pub mod error;
pub mod grid;

use once_cell::sync::Lazy;

pub use config::{GridOptions, PartialOptions};
pub use error::{GridError, Result};
pub use grid::{format_grid, BorderSet, Cell, Grid, GridLog, Layout};

static GLOBAL: Lazy<GridLog> = Lazy::new(GridLog::new);

/// The process-wide renderer used by the free functions below
pub fn global() -> &'static GridLog {
    &GLOBAL
}

/// Render with the process-wide renderer
pub fn render(input: impl Into<Grid>) -> Result<Option<String>> {
    GLOBAL.render(input)
}

/// Merge overrides into the process-wide options
pub fn apply_options(partial: impl Into<PartialOptions>) -> &'static GridLog {
    GLOBAL.apply_options(partial)
}

/// Restore the process-wide options to their defaults
pub fn reset_options() -> &'static GridLog {
    GLOBAL.reset_options()
}
