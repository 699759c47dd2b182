//! The [`Grid`] type, a fixed-size 2D array of [`CellState`]s.
//!
//! A `Grid` owns its cells. Cloning (or [`copy`](Grid::copy)) yields an
//! independent grid: writes to the copy are never visible through the
//! original.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::{Bounds, BoundsIter, Node};

/// Default number of rows and columns.
pub const DEFAULT_SIZE: i32 = 15;

/// A 2D grid of [`CellState`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Bounds,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with `Empty`.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![CellState::Empty; bounds.len()],
            bounds,
        }
    }

    /// The dimensions of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `n` is inside this grid.
    #[inline]
    pub fn contains(&self, n: Node) -> bool {
        self.bounds.contains(n)
    }

    /// Read the cell at `n`.
    pub fn at(&self, n: Node) -> Result<CellState, GridError> {
        self.get(n).ok_or(GridError::OutOfBounds {
            node: n,
            bounds: self.bounds,
        })
    }

    /// Read the cell at `n`, or `None` if outside.
    #[inline]
    pub fn get(&self, n: Node) -> Option<CellState> {
        self.bounds.index(n).map(|i| self.cells[i])
    }

    /// Write the cell at `n`.
    pub fn set(&mut self, n: Node, state: CellState) -> Result<(), GridError> {
        let i = self.bounds.index(n).ok_or(GridError::OutOfBounds {
            node: n,
            bounds: self.bounds,
        })?;
        self.cells[i] = state;
        Ok(())
    }

    /// An independent grid with identical contents.
    #[inline]
    pub fn copy(&self) -> Grid {
        self.clone()
    }

    /// Count how many cells equal `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Row-major iterator over `(Node, CellState)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    #[inline]
    fn index_or_panic(&self, n: Node) -> usize {
        match self.bounds.index(n) {
            Some(i) => i,
            None => panic!("node {n} is out of bounds for a {} grid", self.bounds),
        }
    }
}

/// Bounds-checked read. Panics on out-of-range access.
impl Index<Node> for Grid {
    type Output = CellState;

    #[inline]
    fn index(&self, n: Node) -> &CellState {
        &self.cells[self.index_or_panic(n)]
    }
}

/// Bounds-checked write. Panics on out-of-range access.
impl IndexMut<Node> for Grid {
    #[inline]
    fn index_mut(&mut self, n: Node) -> &mut CellState {
        let i = self.index_or_panic(n);
        &mut self.cells[i]
    }
}

impl fmt::Display for Grid {
    /// One line per row, one glyph per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.bounds.cols.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Node, CellState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Node, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.inner.next()?;
        Some((n, self.grid[n]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Node, CellState);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
