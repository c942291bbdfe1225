//! Growable grid with in-place writes.
//!
//! [`MutableGrid`] keeps the same rectangular invariant as [`Grid`] but
//! re-establishes it after every write. Writes never fail: a write outside the
//! current bounds first grows the grid, materializing every new cell through
//! the grid's [`CellInitializer`].
//!
//! Growth is eager. Writing `(3, 3)` into an empty grid produces a 4×4 grid
//! with fifteen initializer-produced cells and one written cell.

use std::ops::Index;

use crate::error::GridError;
use crate::grid::Grid;
use crate::initializer::CellInitializer;
use crate::shape;
use crate::view::GridView;

/// Mutable, auto-growing 2D grid.
///
/// Not internally synchronized; all writes take `&mut self`.
#[derive(Debug, Clone)]
pub struct MutableGrid<T> {
    rows: Vec<Vec<T>>,
    row_count: usize,
    column_count: usize,
    initializer: CellInitializer<T>,
}

impl<T> MutableGrid<T> {
    /// Create an empty grid whose fill value is `T::default()`.
    #[must_use]
    pub fn new() -> Self
    where
        T: Default + 'static,
    {
        Self::with_initializer(CellInitializer::sentinel())
    }

    /// Create an empty grid with a custom fill function.
    #[must_use]
    pub fn with_initializer(initializer: CellInitializer<T>) -> Self {
        Self {
            rows: Vec::new(),
            row_count: 0,
            column_count: 0,
            initializer,
        }
    }

    /// Build from ragged rows, padding with `initializer` and keeping it as the
    /// default initializer for later growth.
    pub fn from_rows(rows: Vec<Vec<T>>, initializer: CellInitializer<T>) -> Self {
        let (rows, column_count) = shape::normalize(rows, |r, c| initializer.call(r, c));
        Self {
            row_count: rows.len(),
            rows,
            column_count,
            initializer,
        }
    }

    /// Build a `row_count × column_count` grid with every cell produced by
    /// `initializer`.
    pub fn from_fn(
        row_count: usize,
        column_count: usize,
        initializer: CellInitializer<T>,
    ) -> Self {
        let rows = shape::fill(row_count, column_count, |r, c| initializer.call(r, c));
        Self {
            rows,
            row_count,
            column_count,
            initializer,
        }
    }

    /// Copy `grid` into fresh mutable storage with the sentinel initializer.
    pub fn from_grid(grid: &Grid<T>) -> Self
    where
        T: Clone + Default + 'static,
    {
        Self::from_grid_with_initializer(grid, CellInitializer::sentinel())
    }

    /// Copy `grid` into fresh mutable storage with a custom initializer.
    pub fn from_grid_with_initializer(grid: &Grid<T>, initializer: CellInitializer<T>) -> Self
    where
        T: Clone,
    {
        Self {
            rows: grid.to_rows(),
            row_count: grid.row_count(),
            column_count: grid.column_count(),
            initializer,
        }
    }

    /// The initializer used for every future fill.
    pub fn default_initializer(&self) -> &CellInitializer<T> {
        &self.initializer
    }

    /// Replace the initializer. Cells that already exist keep their values.
    pub fn set_default_initializer(&mut self, initializer: CellInitializer<T>) {
        self.initializer = initializer;
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns; every row has exactly this many cells.
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
    /// [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    /// Reads never grow the grid.
    pub fn at(&self, row: usize, column: usize) -> Result<&T, GridError> {
        shape::check_bounds(row, column, self.row_count, self.column_count)?;
        Ok(&self.rows[row][column])
    }

    /// Cell at `(row, column)`, or `None` if out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row)?.get(column)
    }

    /// Mutable access to an existing cell. Does not grow.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Cells of `row`, or `None` if out of range.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Iterate cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| ((r, c), v)))
    }

    // ── Writes ──────────────────────────────────────────────────────

    /// Write `value` at `(row, column)`, growing the grid first if needed.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is `usize::MAX`, since no grid can be
    /// grown to contain it.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self.grow_to(extent(row), extent(column));
        self.rows[row][column] = value;
    }

    /// Write `value` at `(row, column)` after optionally splicing in a fresh
    /// row at `row` and/or a fresh column at `column`.
    ///
    /// The row splice happens before the column splice. Spliced cells are
    /// produced by the current initializer at their final coordinates. Any
    /// remaining out-of-range coordinate is then covered by growth, exactly as
    /// in [`set`](Self::set).
    pub fn insert(
        &mut self,
        row: usize,
        column: usize,
        value: T,
        new_row: bool,
        new_column: bool,
    ) {
        if new_row {
            self.insert_row(row);
        }
        if new_column {
            self.insert_column(column);
        }
        self.set(row, column, value);
    }

    /// Splice a fresh row in at `row`, shifting later rows down.
    ///
    /// If `row` is past the end, the grid grows so that `row` exists instead.
    pub fn insert_row(&mut self, row: usize) {
        if row > self.row_count {
            self.grow_to_row_count(extent(row));
            return;
        }
        let fresh: Vec<T> = (0..self.column_count)
            .map(|c| self.initializer.call(row, c))
            .collect();
        self.rows.insert(row, fresh);
        self.row_count += 1;
    }

    /// Splice a fresh column in at `column` in every row, shifting later
    /// columns right.
    ///
    /// If `column` is past the end, the grid grows so that `column` exists
    /// instead.
    pub fn insert_column(&mut self, column: usize) {
        if column > self.column_count {
            self.grow_to_column_count(extent(column));
            return;
        }
        for (r, cells) in self.rows.iter_mut().enumerate() {
            cells.insert(column, self.initializer.call(r, column));
        }
        self.column_count += 1;
    }

    /// Append rows until there are at least `row_count`.
    pub fn grow_to_row_count(&mut self, row_count: usize) {
        self.grow_to(row_count, self.column_count);
    }

    /// Widen every row until there are at least `column_count` columns.
    pub fn grow_to_column_count(&mut self, column_count: usize) {
        self.grow_to(self.row_count, column_count);
    }

    /// Grow to at least `row_count × column_count`. Never shrinks.
    pub fn grow_to(&mut self, row_count: usize, column_count: usize) {
        let initializer = &self.initializer;
        shape::grow(
            &mut self.rows,
            &mut self.row_count,
            &mut self.column_count,
            row_count,
            column_count,
            |r, c| initializer.call(r, c),
        );
    }

    // ── Snapshots ───────────────────────────────────────────────────

    /// Deep-copy the current state into an immutable [`Grid`].
    ///
    /// Later writes to `self` never affect the returned grid.
    pub fn snapshot(&self) -> Grid<T>
    where
        T: Clone,
    {
        Grid::from_parts(self.rows.clone(), self.column_count)
    }

    /// Freeze into an immutable [`Grid`] without copying.
    pub fn into_grid(self) -> Grid<T> {
        Grid::from_parts(self.rows, self.column_count)
    }
}

/// Length an axis needs for `index` to exist.
fn extent(index: usize) -> usize {
    match index.checked_add(1) {
        Some(len) => len,
        None => panic!("index {index} exceeds the largest addressable grid"),
    }
}

impl<T: Default + 'static> Default for MutableGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridView<T> for MutableGrid<T> {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn row(&self, row: usize) -> Option<&[T]> {
        MutableGrid::row(self, row)
    }
}

impl<T> Index<(usize, usize)> for MutableGrid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(row, column)` is out of range. Indexing never grows the
    /// grid; use [`MutableGrid::set`] to write past the edge.
    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.at(row, column) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for MutableGrid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.rows == other.rows
    }
}

impl<T: Eq> Eq for MutableGrid<T> {}

impl<T: PartialEq> PartialEq<Grid<T>> for MutableGrid<T> {
    fn eq(&self, other: &Grid<T>) -> bool {
        self.shape() == other.shape() && self.rows.as_slice() == other.rows()
    }
}

impl<T: PartialEq> PartialEq<MutableGrid<T>> for Grid<T> {
    fn eq(&self, other: &MutableGrid<T>) -> bool {
        other == self
    }
}

impl<T: Default + 'static> From<Grid<T>> for MutableGrid<T> {
    fn from(grid: Grid<T>) -> Self {
        let column_count = grid.column_count();
        let rows = grid.into_rows();
        Self {
            row_count: rows.len(),
            rows,
            column_count,
            initializer: CellInitializer::sentinel(),
        }
    }
}

impl<T> From<MutableGrid<T>> for Grid<T> {
    fn from(grid: MutableGrid<T>) -> Self {
        grid.into_grid()
    }
}

impl<T: Clone> From<&MutableGrid<T>> for Grid<T> {
    fn from(grid: &MutableGrid<T>) -> Self {
        grid.snapshot()
    }
}
