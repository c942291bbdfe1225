#![forbid(unsafe_code)]

//! Rectangular 2D containers over ragged rows.
//!
//! `frankengrid-core` stores cells as owned rows and keeps every row exactly
//! as wide as the widest one. It comes in two variants:
//!
//! - **[`Grid`]**: immutable. Built once from ragged rows; short rows are
//!   padded by a fill function at construction. Reads outside the grid fail
//!   with [`GridError::IndexOutOfRange`].
//! - **[`MutableGrid`]**: growable. Writes never fail; a write outside the
//!   grid first widens every row and/or appends rows, materializing each new
//!   cell through the grid's [`CellInitializer`].
//!
//! Both implement the read-only [`GridView`] trait. Writers only exist on
//! [`MutableGrid`], so mutating an immutable grid is a compile error rather
//! than a runtime one.
//!
//! ```
//! use frankengrid_core::{CellInitializer, Grid, MutableGrid};
//!
//! let g = Grid::from_rows(vec![vec!["a", "b"], vec!["c"]], |_, _| "∅");
//! assert_eq!(g.at(1, 1), Ok(&"∅"));
//!
//! let mut m = MutableGrid::with_initializer(CellInitializer::constant("."));
//! m.set(3, 3, "x");
//! assert_eq!(m.shape(), (4, 4));
//!
//! let frozen = m.snapshot();
//! m.set(0, 0, "y");
//! assert_eq!(frozen.at(0, 0), Ok(&"."));
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: debug spans around growth and trace events for padding.
//! - `serde`: `Serialize`/`Deserialize` for both variants with shape
//!   validation on decode.

#[cfg(feature = "serde")]
mod codec;
pub mod error;
pub mod grid;
pub mod initializer;
pub mod mutable;
mod shape;
pub mod view;

pub use error::GridError;
pub use grid::Grid;
pub use initializer::CellInitializer;
pub use mutable::MutableGrid;
pub use view::GridView;
