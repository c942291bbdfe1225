//! Immutable rectangular grid.
//!
//! A [`Grid`] is built once from (possibly ragged) rows and never changes
//! shape or content afterwards. Construction pads short rows to the width of
//! the widest row, so every row always holds exactly
//! [`column_count`](Grid::column_count) cells.

use std::fmt;
use std::ops::Index;

use crate::error::GridError;
use crate::shape;
use crate::view::GridView;

/// Immutable 2D grid of cells stored as owned rows.
///
/// Cloning deep-copies the row storage; two grids never observe each other's
/// rows. Equality and hashing compare dimensions and cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    row_count: usize,
    column_count: usize,
}

impl<T> Grid<T> {
    /// Create an empty 0×0 grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            row_count: 0,
            column_count: 0,
        }
    }

    /// Build a grid from ragged rows.
    ///
    /// The column count becomes the length of the longest row. Each shorter
    /// row is padded with `init(row, column)` for every missing trailing
    /// column.
    pub fn from_rows(rows: Vec<Vec<T>>, init: impl FnMut(usize, usize) -> T) -> Self {
        let (rows, column_count) = shape::normalize(rows, init);
        Self::from_parts(rows, column_count)
    }

    /// Build a grid from ragged rows, padding with `T::default()`.
    pub fn from_ragged(rows: Vec<Vec<T>>) -> Self
    where
        T: Default,
    {
        Self::from_rows(rows, |_, _| T::default())
    }

    /// Build a `row_count × column_count` grid with every cell taken from
    /// `init(row, column)`, called in row-major order.
    pub fn from_fn(
        row_count: usize,
        column_count: usize,
        init: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let rows = shape::fill(row_count, column_count, init);
        Self {
            rows,
            row_count,
            column_count,
        }
    }

    /// Build a `row_count × column_count` grid with every cell set to `value`.
    pub fn filled(row_count: usize, column_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let rows = vec![vec![value; column_count]; row_count];
        Self {
            rows,
            row_count,
            column_count,
        }
    }

    /// Wrap rows that are already rectangular with the given width.
    pub(crate) fn from_parts(rows: Vec<Vec<T>>, column_count: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == column_count));
        Self {
            row_count: rows.len(),
            rows,
            column_count,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// `(row_count, column_count)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.column_count)
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.column_count == 0
    }

    /// Cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `row >= row_count()` or
    /// `column >= column_count()`. Indices are never clamped.
    pub fn at(&self, row: usize, column: usize) -> Result<&T, GridError> {
        shape::check_bounds(row, column, self.row_count, self.column_count)?;
        Ok(&self.rows[row][column])
    }

    /// Cell at `(row, column)`, or `None` if out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row)?.get(column)
    }

    /// Cells of `row`, or `None` if out of range.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterate cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| ((r, c), v)))
    }

    /// Copy the rows out.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows.clone()
    }

    /// Take ownership of the rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridView<T> for Grid<T> {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn row(&self, row: usize) -> Option<&[T]> {
        Grid::row(self, row)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(row, column)` is out of range.
    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.at(row, column) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Default> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_ragged(rows)
    }
}

impl<T: Default> FromIterator<Vec<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::from_ragged(iter.into_iter().collect())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Build a [`Grid`] from row literals, padding short rows with
/// `Default::default()`.
///
/// ```
/// use frankengrid_core::grid;
///
/// let g = grid![[1, 2, 3], [4]];
/// assert_eq!(g.shape(), (2, 3));
/// assert_eq!(g.at(1, 2), Ok(&0));
/// ```
#[macro_export]
macro_rules! grid {
    () => {
        $crate::Grid::new()
    };
    ($([$($cell:expr),* $(,)?]),+ $(,)?) => {
        $crate::Grid::from_ragged(vec![$(vec![$($cell),*]),+])
    };
}
