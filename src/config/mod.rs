//! Configuration for the grid renderer

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options read at the start of every render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Indent width used when a structured value is pretty-printed
    pub structured_indent: usize,
    /// Spaces on each side of a cell's content
    pub cell_padding: usize,
    /// Also print the rendered grid to the output sink
    pub emit_to_console: bool,
    /// Use `-`, `|` and `+` instead of box-drawing glyphs
    pub use_ascii_borders: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            structured_indent: 2,
            cell_padding: 1,
            emit_to_console: true,
            use_ascii_borders: false,
        }
    }
}

impl GridOptions {
    /// Shallow-merge `partial` into these options, keeping unset keys.
    pub fn merge(&mut self, partial: &PartialOptions) {
        if let Some(indent) = partial.structured_indent {
            self.structured_indent = indent;
        }
        if let Some(padding) = partial.cell_padding {
            self.cell_padding = padding;
        }
        if let Some(emit) = partial.emit_to_console {
            self.emit_to_console = emit;
        }
        if let Some(ascii) = partial.use_ascii_borders {
            self.use_ascii_borders = ascii;
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// A set of option overrides; `None` leaves the current value alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialOptions {
    pub structured_indent: Option<usize>,
    pub cell_padding: Option<usize>,
    pub emit_to_console: Option<bool>,
    pub use_ascii_borders: Option<bool>,
}

impl PartialOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options: PartialOptions = toml::from_str(&content)?;
        Ok(options)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gridlog").join("config.toml"))
    }

    pub fn structured_indent(mut self, indent: usize) -> Self {
        self.structured_indent = Some(indent);
        self
    }

    pub fn cell_padding(mut self, padding: usize) -> Self {
        self.cell_padding = Some(padding);
        self
    }

    pub fn emit_to_console(mut self, emit: bool) -> Self {
        self.emit_to_console = Some(emit);
        self
    }

    pub fn use_ascii_borders(mut self, ascii: bool) -> Self {
        self.use_ascii_borders = Some(ascii);
        self
    }

    /// Layer `other` on top of `self`; keys set in `other` win.
    pub fn overlay(self, other: PartialOptions) -> Self {
        Self {
            structured_indent: other.structured_indent.or(self.structured_indent),
            cell_padding: other.cell_padding.or(self.cell_padding),
            emit_to_console: other.emit_to_console.or(self.emit_to_console),
            use_ascii_borders: other.use_ascii_borders.or(self.use_ascii_borders),
        }
    }
}

impl From<GridOptions> for PartialOptions {
    fn from(options: GridOptions) -> Self {
        Self {
            structured_indent: Some(options.structured_indent),
            cell_padding: Some(options.cell_padding),
            emit_to_console: Some(options.emit_to_console),
            use_ascii_borders: Some(options.use_ascii_borders),
        }
    }
}
