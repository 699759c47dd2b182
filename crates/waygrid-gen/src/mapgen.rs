//! Wall scattering and endpoint selection.

use rand::seq::SliceRandom;
use rand::{Rng, RngExt};
use thiserror::Error;
use waygrid_core::{CellState, DEFAULT_SIZE, Grid, Layout, Node};

/// Share of cells turned into walls by default.
pub const DEFAULT_WALL_RATIO: f64 = 0.20;

/// Errors raised while generating a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// A layout needs room for both a start and a target.
    #[error("a {rows}x{cols} grid cannot hold both a start and a target")]
    TooSmall { rows: i32, cols: i32 },

    /// The wall ratio must lie in `[0, 1)`.
    #[error("wall ratio {0} is outside [0, 1)")]
    InvalidWallRatio(f64),
}

/// Random layout generator.
pub struct GridGen<R: Rng> {
    pub rng: R,
    pub rows: i32,
    pub cols: i32,
    pub wall_ratio: f64,
}

impl<R: Rng> GridGen<R> {
    /// A generator for `DEFAULT_SIZE` x `DEFAULT_SIZE` grids with
    /// [`DEFAULT_WALL_RATIO`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            wall_ratio: DEFAULT_WALL_RATIO,
        }
    }

    /// Set the grid dimensions (builder).
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the share of cells that become walls (builder).
    pub fn with_wall_ratio(mut self, wall_ratio: f64) -> Self {
        self.wall_ratio = wall_ratio;
        self
    }

    /// Generate a fresh layout.
    ///
    /// 1. Shuffle every position and turn the first
    ///    `floor(rows * cols * wall_ratio)` into walls, always leaving at
    ///    least two cells free.
    /// 2. Pick the start among empty cells, then the target among the
    ///    remaining empty cells.
    pub fn generate(&mut self) -> Result<Layout, GenError> {
        if !(0.0..1.0).contains(&self.wall_ratio) {
            return Err(GenError::InvalidWallRatio(self.wall_ratio));
        }
        let mut grid = Grid::new(self.rows, self.cols);
        let total = grid.bounds().len();
        if total < 2 {
            return Err(GenError::TooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let wall_count = ((total as f64 * self.wall_ratio) as usize).min(total - 2);
        let mut positions: Vec<Node> = grid.bounds().iter().collect();
        positions.shuffle(&mut self.rng);
        for &n in &positions[..wall_count] {
            grid[n] = CellState::Wall;
        }

        let too_small = GenError::TooSmall {
            rows: self.rows,
            cols: self.cols,
        };
        let start = self.pick_empty(&grid, &[]).ok_or(too_small.clone())?;
        let target = self.pick_empty(&grid, &[start]).ok_or(too_small)?;
        grid[start] = CellState::Start;
        grid[target] = CellState::Target;

        log::debug!(
            "generated {} grid with {wall_count} walls, start {start}, target {target}",
            grid.bounds()
        );
        Ok(Layout {
            grid,
            start,
            target,
        })
    }

    /// Pick a uniformly random `Empty` cell not listed in `exclude`.
    ///
    /// Returns `None` if no such cell exists.
    pub fn pick_empty(&mut self, grid: &Grid, exclude: &[Node]) -> Option<Node> {
        let candidates: Vec<Node> = grid
            .iter()
            .filter(|&(n, c)| c == CellState::Empty && !exclude.contains(&n))
            .map(|(n, _)| n)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.random_range(0..candidates.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_places_walls_and_endpoints() {
        let mut mg = GridGen::new(StdRng::seed_from_u64(7));
        let layout = mg.generate().unwrap();
        let g = &layout.grid;
        assert_eq!(g.rows(), DEFAULT_SIZE);
        assert_eq!(g.cols(), DEFAULT_SIZE);
        // 15 * 15 * 0.2 = 45
        assert_eq!(g.count(CellState::Wall), 45);
        assert_eq!(g.count(CellState::Start), 1);
        assert_eq!(g.count(CellState::Target), 1);
        assert_eq!(g[layout.start], CellState::Start);
        assert_eq!(g[layout.target], CellState::Target);
        assert_ne!(layout.start, layout.target);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = GridGen::new(StdRng::seed_from_u64(11)).generate().unwrap();
        let b = GridGen::new(StdRng::seed_from_u64(11)).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dense_walls_leave_two_cells() {
        let mut mg = GridGen::new(StdRng::seed_from_u64(3))
            .with_size(2, 2)
            .with_wall_ratio(0.99);
        let layout = mg.generate().unwrap();
        assert_eq!(layout.grid.count(CellState::Wall), 2);
        assert_eq!(layout.grid.count(CellState::Empty), 0);
    }

    #[test]
    fn rejects_bad_parameters() {
        let mut mg = GridGen::new(StdRng::seed_from_u64(1)).with_size(1, 1);
        assert_eq!(
            mg.generate().unwrap_err(),
            GenError::TooSmall { rows: 1, cols: 1 }
        );
        let mut mg = GridGen::new(StdRng::seed_from_u64(1)).with_wall_ratio(1.0);
        assert_eq!(mg.generate().unwrap_err(), GenError::InvalidWallRatio(1.0));
    }

    #[test]
    fn pick_empty_respects_exclusions() {
        let mut grid = Grid::new(1, 3);
        grid[Node::new(0, 0)] = CellState::Wall;
        let mut mg = GridGen::new(StdRng::seed_from_u64(5));
        let only = mg.pick_empty(&grid, &[Node::new(0, 1)]);
        assert_eq!(only, Some(Node::new(0, 2)));
        assert_eq!(
            mg.pick_empty(&grid, &[Node::new(0, 1), Node::new(0, 2)]),
            None
        );
    }
}
