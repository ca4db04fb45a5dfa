//! Border glyph sets and border line construction

use crate::config::GridOptions;

/// Glyphs at the start, between columns, and at the end of a border line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Junctions {
    pub start: char,
    pub middle: char,
    pub end: char,
}

impl Junctions {
    const fn uniform(glyph: char) -> Self {
        Self {
            start: glyph,
            middle: glyph,
            end: glyph,
        }
    }
}

/// Complete glyph set for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub horizontal: char,
    pub vertical: char,
    pub top: Junctions,
    pub middle: Junctions,
    pub bottom: Junctions,
}

pub const UNICODE_BORDERS: BorderSet = BorderSet {
    horizontal: '─',
    vertical: '│',
    top: Junctions {
        start: '┌',
        middle: '┬',
        end: '┐',
    },
    middle: Junctions {
        start: '├',
        middle: '┼',
        end: '┤',
    },
    bottom: Junctions {
        start: '└',
        middle: '┴',
        end: '┘',
    },
};

pub const ASCII_BORDERS: BorderSet = BorderSet {
    horizontal: '-',
    vertical: '|',
    top: Junctions::uniform('+'),
    middle: Junctions::uniform('+'),
    bottom: Junctions::uniform('+'),
};

impl BorderSet {
    pub fn for_options(options: &GridOptions) -> &'static BorderSet {
        if options.use_ascii_borders {
            &ASCII_BORDERS
        } else {
            &UNICODE_BORDERS
        }
    }

    /// One horizontal rule spanning every column.
    ///
    /// Each column's run is `width + 2 * padding` fill glyphs.
    pub fn border(&self, col_widths: &[usize], padding: usize, junctions: &Junctions) -> String {
        let mut line = String::new();
        line.push(junctions.start);
        for (index, width) in col_widths.iter().enumerate() {
            if index > 0 {
                line.push(junctions.middle);
            }
            line.extend(std::iter::repeat(self.horizontal).take(width + padding * 2));
        }
        line.push(junctions.end);
        line
    }
}
