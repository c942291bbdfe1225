//! Property-based invariant tests for frankengrid-core.
//!
//! These tests verify structural invariants that must hold for **any** input:
//!
//! 1. Every row is exactly `column_count` wide after construction and after
//!    every write.
//! 2. Cached dimensions always agree with the stored rows.
//! 3. Growth materializes new cells from the initializer at their own
//!    coordinates and never disturbs existing cells.
//! 4. Snapshots are independent of later writes.
//! 5. Reads outside the grid fail, whatever the shape.

use frankengrid_core::{CellInitializer, Grid, GridError, GridView, MutableGrid};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Cell type that remembers where the initializer produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    Fill(usize, usize),
    Written(u16),
}

fn fill() -> CellInitializer<Cell> {
    CellInitializer::new(Cell::Fill)
}

fn ragged_rows() -> impl Strategy<Value = Vec<Vec<u16>>> {
    proptest::collection::vec(proptest::collection::vec(any::<u16>(), 0..12), 0..12)
}

#[derive(Debug, Clone)]
enum Op {
    Set(usize, usize, u16),
    Insert(usize, usize, u16, bool, bool),
    GrowRows(usize),
    GrowColumns(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..16, 0usize..16, any::<u16>()).prop_map(|(r, c, v)| Op::Set(r, c, v)),
        (0usize..16, 0usize..16, any::<u16>(), any::<bool>(), any::<bool>())
            .prop_map(|(r, c, v, nr, nc)| Op::Insert(r, c, v, nr, nc)),
        (0usize..16).prop_map(Op::GrowRows),
        (0usize..16).prop_map(Op::GrowColumns),
    ]
}

fn apply(grid: &mut MutableGrid<Cell>, op: &Op) {
    match *op {
        Op::Set(r, c, v) => grid.set(r, c, Cell::Written(v)),
        Op::Insert(r, c, v, nr, nc) => grid.insert(r, c, Cell::Written(v), nr, nc),
        Op::GrowRows(n) => grid.grow_to_row_count(n),
        Op::GrowColumns(n) => grid.grow_to_column_count(n),
    }
}

fn is_rectangular<T, V: GridView<T>>(view: &V) -> bool {
    (0..view.row_count()).all(|r| view.row(r).map(<[T]>::len) == Some(view.column_count()))
        && view.row(view.row_count()).is_none()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Construction normalizes ragged input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn construction_is_rectangular(rows in ragged_rows()) {
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let g = Grid::from_rows(rows.clone(), |_, _| u16::MAX);
        prop_assert_eq!(g.row_count(), rows.len());
        prop_assert_eq!(g.column_count(), widest);
        prop_assert!(is_rectangular(&g));
    }

    /// Original cells are kept in place; only trailing cells are filled.
    #[test]
    fn construction_preserves_input_prefix(rows in ragged_rows()) {
        let input: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.iter().copied().map(Cell::Written).collect())
            .collect();
        let g = Grid::from_rows(input.clone(), Cell::Fill);
        for (r, row) in input.iter().enumerate() {
            let stored = g.row(r).unwrap();
            prop_assert_eq!(&stored[..row.len()], row.as_slice());
            for (c, cell) in stored.iter().enumerate().skip(row.len()) {
                prop_assert_eq!(cell, &Cell::Fill(r, c));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Writes keep the grid rectangular and the cache consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn writes_keep_grid_rectangular(ops in proptest::collection::vec(op(), 0..40)) {
        let mut grid = MutableGrid::with_initializer(fill());
        for op in &ops {
            apply(&mut grid, op);
            prop_assert!(is_rectangular(&grid), "not rectangular after {:?}", op);
            prop_assert_eq!(grid.rows().len(), grid.row_count());
        }
    }

    #[test]
    fn set_always_lands(
        ops in proptest::collection::vec(op(), 0..20),
        row in 0usize..24,
        column in 0usize..24,
        value in any::<u16>(),
    ) {
        let mut grid = MutableGrid::with_initializer(fill());
        for op in &ops {
            apply(&mut grid, op);
        }
        let (rows, columns) = grid.shape();
        grid.set(row, column, Cell::Written(value));
        let expected = Cell::Written(value);
        prop_assert_eq!(grid.at(row, column), Ok(&expected));
        prop_assert_eq!(grid.row_count(), rows.max(row + 1));
        prop_assert_eq!(grid.column_count(), columns.max(column + 1));
    }

    /// Growing an empty grid leaves every unwritten cell as its own fill value.
    #[test]
    fn grow_fills_with_true_coordinates(row in 0usize..20, column in 0usize..20) {
        let mut grid = MutableGrid::with_initializer(fill());
        grid.set(row, column, Cell::Written(1));
        prop_assert_eq!(grid.shape(), (row + 1, column + 1));
        for ((r, c), cell) in grid.iter() {
            if (r, c) == (row, column) {
                prop_assert_eq!(cell, &Cell::Written(1));
            } else {
                prop_assert_eq!(cell, &Cell::Fill(r, c));
            }
        }
    }

    #[test]
    fn grow_never_touches_existing_cells(
        rows in ragged_rows(),
        extra_rows in 0usize..8,
        extra_columns in 0usize..8,
    ) {
        let base: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.iter().copied().map(Cell::Written).collect())
            .collect();
        let mut grid = MutableGrid::from_rows(base, fill());
        let before = grid.snapshot();
        let (r0, c0) = grid.shape();
        grid.grow_to(r0 + extra_rows, c0 + extra_columns);
        for ((r, c), cell) in before.iter() {
            prop_assert_eq!(grid.at(r, c), Ok(cell));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Snapshots
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn snapshot_is_unaffected_by_later_writes(
        setup in proptest::collection::vec(op(), 1..20),
        later in proptest::collection::vec(op(), 1..20),
    ) {
        let mut grid = MutableGrid::with_initializer(fill());
        for op in &setup {
            apply(&mut grid, op);
        }
        let snapshot = grid.snapshot();
        let frozen = snapshot.clone();
        for op in &later {
            apply(&mut grid, op);
        }
        prop_assert_eq!(snapshot, frozen);
    }

    #[test]
    fn mutable_copy_of_grid_is_unaffected(rows in ragged_rows(), value in any::<u16>()) {
        let grid = Grid::from_ragged(rows);
        let original = grid.clone();
        let mut copy = MutableGrid::from_grid(&grid);
        copy.set(0, 0, value);
        copy.set(grid.row_count(), grid.column_count(), value);
        prop_assert_eq!(grid, original);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Read bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reads_past_either_edge_fail(rows in 0usize..10, columns in 0usize..10) {
        let g = Grid::from_fn(rows, columns, |r, c| (r, c));
        prop_assert_eq!(
            g.at(rows, 0),
            Err(GridError::IndexOutOfRange { row: rows, column: 0, rows, columns })
        );
        prop_assert_eq!(
            g.at(0, columns),
            Err(GridError::IndexOutOfRange { row: 0, column: columns, rows, columns })
        );
        if rows > 0 && columns > 0 {
            let corner = (rows - 1, columns - 1);
            prop_assert_eq!(g.at(rows - 1, columns - 1), Ok(&corner));
        }
    }
}
