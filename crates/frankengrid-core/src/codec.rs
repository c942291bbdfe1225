//! Serde support (feature `serde`).
//!
//! Both grid variants encode as the same record:
//!
//! ```json
//! { "rows": 2, "columns": 2, "cells": [[1, 2], [3, 4]] }
//! ```
//!
//! Decoding does not trust the payload. The number of rows and the length of
//! every row must match the declared dimensions, otherwise decoding fails
//! with [`GridError::ShapeMismatch`]. A [`MutableGrid`] decodes with the
//! sentinel initializer; initializers are never encoded.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GridError;
use crate::grid::Grid;
use crate::mutable::MutableGrid;

#[derive(Serialize)]
struct GridRecordRef<'a, T> {
    rows: usize,
    columns: usize,
    cells: &'a [Vec<T>],
}

#[derive(Deserialize)]
struct GridRecord<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<T>>,
}

impl<T> GridRecord<T> {
    /// Check the declared dimensions against the cells.
    fn validate(self) -> Result<(Vec<Vec<T>>, usize), GridError> {
        if self.cells.len() != self.rows {
            return Err(GridError::ShapeMismatch {
                row: None,
                expected: self.rows,
                actual: self.cells.len(),
            });
        }
        if let Some((r, row)) = self
            .cells
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.columns)
        {
            return Err(GridError::ShapeMismatch {
                row: Some(r),
                expected: self.columns,
                actual: row.len(),
            });
        }
        Ok((self.cells, self.columns))
    }
}

fn decode<'de, D, T>(deserializer: D) -> Result<(Vec<Vec<T>>, usize), D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    GridRecord::<T>::deserialize(deserializer)?
        .validate()
        .map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, "rejected grid payload");
            D::Error::custom(err)
        })
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRecordRef {
            rows: self.row_count(),
            columns: self.column_count(),
            cells: self.rows(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (cells, columns) = decode(deserializer)?;
        Ok(Grid::from_parts(cells, columns))
    }
}

impl<T: Serialize> Serialize for MutableGrid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRecordRef {
            rows: self.row_count(),
            columns: self.column_count(),
            cells: self.rows(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de> + Default + 'static> Deserialize<'de> for MutableGrid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (cells, columns) = decode(deserializer)?;
        Ok(MutableGrid::from(Grid::from_parts(cells, columns)))
    }
}
