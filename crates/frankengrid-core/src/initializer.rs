//! Cell initializers: pure `(row, column) -> T` fill functions.
//!
//! An initializer is only consulted for cells that exist structurally but were
//! never explicitly written: trailing cells of short rows during ragged
//! normalization, and every cell materialized by a grow.

use std::fmt;
use std::sync::Arc;

/// Stored fill function producing the value for a `(row, column)` coordinate.
///
/// Cloning is cheap: clones share the same underlying function. Initializers
/// are expected to be pure; the grid may call them in any order and does not
/// cache their results.
pub struct CellInitializer<T> {
    f: Arc<dyn Fn(usize, usize) -> T + Send + Sync>,
}

impl<T> CellInitializer<T> {
    /// Wrap a fill function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Initializer that clones `value` for every coordinate.
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self::new(move |_, _| value.clone())
    }

    /// Initializer returning the empty sentinel, `T::default()`.
    ///
    /// For `Option<T>` this is `None`.
    pub fn sentinel() -> Self
    where
        T: Default + 'static,
    {
        Self::new(|_, _| T::default())
    }

    /// Produce the fill value for `(row, column)`.
    #[inline]
    pub fn call(&self, row: usize, column: usize) -> T {
        (self.f)(row, column)
    }
}

impl<T, F> From<F> for CellInitializer<T>
where
    F: Fn(usize, usize) -> T + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<T> Clone for CellInitializer<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: Default + 'static> Default for CellInitializer<T> {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl<T> fmt::Debug for CellInitializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellInitializer(..)")
    }
}
