//! Cell values and the grid input model

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::Result;

/// Wider indents are clamped to this many spaces.
const MAX_STRUCTURED_INDENT: usize = 10;

/// Whole floats below this magnitude print without a fractional part.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One value at a row/column position
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// An absent value, shown as the literal text `undefined`
    Undefined,
    /// Text shown as-is, split on line breaks
    Text(String),
    /// Any other value, pretty-printed as JSON
    Structured(Value),
}

impl Cell {
    /// Convert any serializable value into a cell.
    ///
    /// Strings become [`Cell::Text`] so they are never quoted; everything
    /// else is kept as JSON. Fails when `value` cannot be represented as JSON.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::from(serde_json::to_value(value)?))
    }

    /// Text for this cell before it is split into display lines
    pub fn display_text(&self, indent: usize) -> Result<String> {
        match self {
            Self::Undefined => Ok("undefined".to_string()),
            Self::Text(text) => Ok(text.clone()),
            Self::Structured(value) => to_indented_json(value, indent),
        }
    }

    /// Display lines for this cell, split on `\n` and `\r\n`
    pub fn display_lines(&self, indent: usize) -> Result<Vec<String>> {
        Ok(split_lines(&self.display_text(indent)?))
    }
}

fn to_indented_json(value: &Value, indent: usize) -> Result<String> {
    let mut value = value.clone();
    whole_floats_as_integers(&mut value);

    let indent = indent.min(MAX_STRUCTURED_INDENT);
    if indent == 0 {
        return Ok(serde_json::to_string(&value)?);
    }

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `1.0` prints as `1`
fn whole_floats_as_integers(value: &mut Value) {
    match value {
        Value::Number(number) if number.is_f64() => {
            if let Some(float) = number.as_f64() {
                if float.fract() == 0.0 && float.abs() < MAX_EXACT_INTEGER {
                    *value = Value::from(float as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(whole_floats_as_integers),
        Value::Object(map) => map.values_mut().for_each(whole_floats_as_integers),
        _ => {}
    }
}

/// Only a `\r` directly before a `\n` belongs to the line break.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        if line.ends_with('\r') {
            line.pop();
        }
    }
    lines
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Cell {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Undefined)
    }
}

macro_rules! structured_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Self::Structured(Value::from(value))
                }
            }
        )*
    };
}

structured_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Rows of cells; rows may have different lengths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// A single flat row. An empty row means no input at all.
    pub fn from_row(cells: Vec<Cell>) -> Self {
        if cells.is_empty() {
            return Self::empty();
        }
        Self { rows: vec![cells] }
    }

    /// Build a grid from JSON.
    ///
    /// An array whose first element is itself an array is read as rows;
    /// any other array is one flat row. Later non-array elements of a row
    /// list become single-cell rows. A non-array value is a one-cell grid.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                if matches!(items.first(), Some(Value::Array(_))) {
                    let rows = items
                        .into_iter()
                        .map(|row| match row {
                            Value::Array(cells) => cells.into_iter().map(Cell::from).collect(),
                            other => vec![Cell::from(other)],
                        })
                        .collect();
                    Self::from_rows(rows)
                } else {
                    Self::from_row(items.into_iter().map(Cell::from).collect())
                }
            }
            other => Self::from_row(vec![Cell::from(other)]),
        }
    }

    /// Serialize `value` to JSON and read it with [`Grid::from_json`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::from_json(serde_json::to_value(value)?))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Vec<Cell>> for Grid {
    fn from(cells: Vec<Cell>) -> Self {
        Self::from_row(cells)
    }
}

impl From<Value> for Grid {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

impl<const N: usize> From<[&str; N]> for Grid {
    fn from(cells: [&str; N]) -> Self {
        Self::from_row(cells.into_iter().map(Cell::from).collect())
    }
}

impl<const R: usize, const C: usize> From<[[&str; C]; R]> for Grid {
    fn from(rows: [[&str; C]; R]) -> Self {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    }
}

/// Build a [`Grid`](crate::Grid) from cell expressions.
///
/// `grid!["a", 1]` is one flat row; `grid![["a", 1], ["b"]]` is a list of rows.
#[macro_export]
macro_rules! grid {
    () => {
        $crate::Grid::empty()
    };
    ($([$($cell:expr),* $(,)?]),+ $(,)?) => {
        $crate::Grid::from_rows(vec![$(vec![$($crate::Cell::from($cell)),*]),+])
    };
    ($($cell:expr),+ $(,)?) => {
        $crate::Grid::from_row(vec![$($crate::Cell::from($cell)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::ser::Error as _;
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    #[test]
    fn undefined_renders_as_literal() {
        assert_eq!(Cell::Undefined.display_lines(2).unwrap(), vec!["undefined"]);
        assert_eq!(Cell::from(None::<&str>), Cell::Undefined);
    }

    #[test]
    fn splits_on_both_line_endings() {
        let cell = Cell::from("one\r\ntwo\nthree");
        assert_eq!(cell.display_lines(2).unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn lone_carriage_return_is_content() {
        assert_eq!(Cell::from("a\r").display_lines(2).unwrap(), vec!["a\r"]);
        assert_eq!(Cell::from("a\rb\r\n").display_lines(2).unwrap(), vec!["a\rb", ""]);
    }

    #[test]
    fn whole_floats_print_as_integers() {
        assert_eq!(Cell::from(1.0).display_text(2).unwrap(), "1");
        assert_eq!(Cell::from(-3.0f32).display_text(2).unwrap(), "-3");
        assert_eq!(Cell::from(1.5).display_text(2).unwrap(), "1.5");
        assert_eq!(
            Cell::from(json!({"ratio": 2.0})).display_lines(0).unwrap(),
            vec!["{\"ratio\":2}"]
        );
    }

    #[test]
    fn trailing_newline_adds_blank_line() {
        assert_eq!(Cell::from("a\n").display_lines(2).unwrap(), vec!["a", ""]);
        assert_eq!(Cell::from("").display_lines(2).unwrap(), vec![""]);
    }

    #[test]
    fn structured_values_use_configured_indent() {
        let cell = Cell::from(json!({"a": 1}));
        assert_eq!(cell.display_lines(2).unwrap(), vec!["{", "  \"a\": 1", "}"]);
        assert_eq!(cell.display_lines(4).unwrap(), vec!["{", "    \"a\": 1", "}"]);
    }

    #[test]
    fn zero_indent_is_compact() {
        let cell = Cell::from(json!({"a": [1, 2]}));
        assert_eq!(cell.display_lines(0).unwrap(), vec!["{\"a\":[1,2]}"]);
    }

    #[test]
    fn indent_is_clamped() {
        let cell = Cell::from(json!([true]));
        let lines = cell.display_lines(40).unwrap();
        assert_eq!(lines[1], format!("{}true", " ".repeat(10)));
    }

    #[test]
    fn keeps_object_key_order() {
        let cell = Cell::from(json!({"zeta": 1, "alpha": 2}));
        assert_eq!(
            cell.display_lines(2).unwrap(),
            vec!["{", "  \"zeta\": 1,", "  \"alpha\": 2", "}"]
        );
    }

    #[test]
    fn scalars_render_like_json() {
        assert_eq!(Cell::from(42).display_text(2).unwrap(), "42");
        assert_eq!(Cell::from(true).display_text(2).unwrap(), "true");
        assert_eq!(Cell::from(Value::Null).display_text(2).unwrap(), "null");
        assert_eq!(Cell::from(json!("quoted?")), Cell::Text("quoted?".to_string()));
    }

    #[test]
    fn unserializable_value_is_an_error() {
        let err = Cell::structured(&Unserializable).unwrap_err();
        assert!(err.to_string().contains("cannot serialize"));
    }

    #[test]
    fn flat_json_array_is_one_row() {
        let grid = Grid::from_json(json!(["a", "b"]));
        assert_eq!(grid, Grid::from_json(json!([["a", "b"]])));
        assert_eq!(grid.rows().len(), 1);
    }

    #[test]
    fn mixed_row_list_wraps_scalars() {
        let grid = Grid::from_json(json!([["a"], "b"]));
        assert_eq!(grid.rows()[1], vec![Cell::from("b")]);
    }

    #[test]
    fn empty_inputs() {
        assert!(Grid::from_row(vec![]).is_empty());
        assert!(Grid::from_json(json!([])).is_empty());
        assert_eq!(Grid::from_json(json!([[]])).rows().len(), 1);
        assert!(grid![].is_empty());
    }

    #[test]
    fn grid_macro_forms() {
        let flat = grid!["a", 1];
        assert_eq!(flat.rows(), &[vec![Cell::from("a"), Cell::from(1)]]);

        let rows = grid![["a"], ["b", None::<String>]];
        assert_eq!(rows.rows().len(), 2);
        assert_eq!(rows.rows()[1][1], Cell::Undefined);
    }
}
