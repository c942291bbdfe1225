//! Read-only access shared by both grid variants.

use crate::error::GridError;

/// Read contract common to [`Grid`](crate::Grid) and
/// [`MutableGrid`](crate::MutableGrid).
///
/// The trait carries no writers. Code that accepts `&impl GridView<T>` can
/// inspect either variant but cannot mutate it.
pub trait GridView<T> {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns. Every row has exactly this many cells.
    fn column_count(&self) -> usize;

    /// Cells of `row`, or `None` if out of range.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// `(row_count, column_count)`.
    fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Whether the grid holds no cells.
    fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// Cell at `(row, column)`, or `None` if out of range.
    fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }

    /// Cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `row >= row_count()` or
    /// `column >= column_count()`.
    fn at(&self, row: usize, column: usize) -> Result<&T, GridError> {
        let (rows, columns) = self.shape();
        self.get(row, column).ok_or(GridError::IndexOutOfRange {
            row,
            column,
            rows,
            columns,
        })
    }
}
