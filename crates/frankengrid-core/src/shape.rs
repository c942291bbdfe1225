//! Shape maintenance shared by [`Grid`](crate::Grid) and
//! [`MutableGrid`](crate::MutableGrid).
//!
//! Every function here either establishes or preserves the rectangular
//! invariant: all rows have exactly `column_count` cells.

use crate::error::GridError;

/// Pad ragged rows to the width of the widest row.
///
/// Missing trailing cells are produced by `init` at their own coordinates.
/// Returns the normalized rows and the resulting column count (0 when `rows`
/// is empty).
pub(crate) fn normalize<T, F>(mut rows: Vec<Vec<T>>, mut init: F) -> (Vec<Vec<T>>, usize)
where
    F: FnMut(usize, usize) -> T,
{
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

    for (r, row) in rows.iter_mut().enumerate() {
        let len = row.len();
        if len == column_count {
            continue;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(row = r, from = len, to = column_count, "padding ragged row");
        row.reserve_exact(column_count - len);
        row.extend((len..column_count).map(|c| init(r, c)));
    }

    (rows, column_count)
}

/// Materialize a `row_count × column_count` block, calling `init` for every cell
/// in row-major order.
pub(crate) fn fill<T, F>(row_count: usize, column_count: usize, mut init: F) -> Vec<Vec<T>>
where
    F: FnMut(usize, usize) -> T,
{
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        rows.push((0..column_count).map(|c| init(r, c)).collect());
    }
    rows
}

/// Grow `rows` to cover at least `target_rows × target_columns`.
///
/// Existing rows are widened to the final width first, then new rows are
/// appended already at that width. Each new cell comes from `init` at its true
/// coordinates. Targets at or below the current counts are ignored, so the
/// grid never shrinks.
pub(crate) fn grow<T, F>(
    rows: &mut Vec<Vec<T>>,
    row_count: &mut usize,
    column_count: &mut usize,
    target_rows: usize,
    target_columns: usize,
    mut init: F,
) where
    F: FnMut(usize, usize) -> T,
{
    let target_rows = target_rows.max(*row_count);
    let target_columns = target_columns.max(*column_count);
    if target_rows == *row_count && target_columns == *column_count {
        return;
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "grid_grow",
        from_rows = *row_count,
        from_columns = *column_count,
        to_rows = target_rows,
        to_columns = target_columns
    )
    .entered();

    if target_columns > *column_count {
        let old = *column_count;
        for (r, row) in rows.iter_mut().enumerate() {
            row.reserve_exact(target_columns - old);
            row.extend((old..target_columns).map(|c| init(r, c)));
        }
    }

    if target_rows > *row_count {
        rows.reserve(target_rows - *row_count);
        for r in *row_count..target_rows {
            rows.push((0..target_columns).map(|c| init(r, c)).collect());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        cells = target_rows * target_columns - *row_count * *column_count,
        "materialized cells"
    );

    *row_count = target_rows;
    *column_count = target_columns;
}

/// Check that `(row, column)` lies inside a `row_count × column_count` grid.
#[inline]
pub(crate) fn check_bounds(
    row: usize,
    column: usize,
    row_count: usize,
    column_count: usize,
) -> Result<(), GridError> {
    if row < row_count && column < column_count {
        Ok(())
    } else {
        Err(GridError::IndexOutOfRange {
            row,
            column,
            rows: row_count,
            columns: column_count,
        })
    }
}
