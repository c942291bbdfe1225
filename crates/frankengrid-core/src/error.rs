//! Error type shared by [`Grid`](crate::Grid) and [`MutableGrid`](crate::MutableGrid).

use std::fmt;

/// Errors raised by grid readers and by decoding.
///
/// Writers on [`MutableGrid`](crate::MutableGrid) never fail: out-of-range
/// writes grow the grid instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A read at `(row, column)` fell outside a `rows × columns` grid.
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// A decoded payload disagreed with its declared dimensions.
    ///
    /// `row` is `None` when the number of rows was wrong, otherwise it names
    /// the first row whose length was wrong.
    ShapeMismatch {
        row: Option<usize>,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "index ({row}, {column}) out of range for {rows}x{columns} grid"
            ),
            Self::ShapeMismatch {
                row: None,
                expected,
                actual,
            } => write!(f, "declared {expected} rows but found {actual}"),
            Self::ShapeMismatch {
                row: Some(row),
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells but the declared column count is {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
