//! Geometry primitives: [`Node`] and [`Bounds`].
//!
//! Coordinates are `(row, col)`. Rows grow downwards, columns grow to the
//! right. Both are signed so that a shifted candidate may fall outside the
//! grid and be rejected by a bounds check instead of wrapping.

use std::fmt;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Offsets of the eight grid-adjacent cells in enumeration order:
/// up, right, down, down-right, left, up-left, up-right, down-left.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// A grid coordinate. Equality is structural.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub row: i32,
    pub col: i32,
}

impl Node {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new node.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a node shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// All eight neighbours in [`DIRECTIONS`] order, unfiltered.
    #[inline]
    pub fn neighbors_8(self) -> [Node; 8] {
        DIRECTIONS.map(|(dr, dc)| self.shift(dr, dc))
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Node) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// Whether `other` is one of the eight cells around `self`.
    #[inline]
    pub fn is_adjacent_to(self, other: Node) -> bool {
        self.chebyshev(other) == 1
    }

    /// Whether `other` is a diagonal neighbour of `self`.
    #[inline]
    pub fn is_diagonal_to(self, other: Node) -> bool {
        (self.row - other.row).abs() == 1 && (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Node {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, rows) x [0, cols)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds cover no cell at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `n` lies inside the bounds.
    #[inline]
    pub fn contains(self, n: Node) -> bool {
        n.row >= 0 && n.row < self.rows && n.col >= 0 && n.col < self.cols
    }

    /// Flat row-major index of `n`, or `None` if outside.
    #[inline]
    pub fn index(self, n: Node) -> Option<usize> {
        if !self.contains(n) {
            return None;
        }
        Some((n.row as usize) * (self.cols as usize) + (n.col as usize))
    }

    /// Row-major iterator over every node in the bounds.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Node::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Node;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the nodes in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Node,
}

impl Iterator for BoundsIter {
    type Item = Node;

    #[inline]
    fn next(&mut self) -> Option<Node> {
        if self.cur.row >= self.bounds.rows || self.bounds.is_empty() {
            return None;
        }
        let n = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(n)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let w = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}
