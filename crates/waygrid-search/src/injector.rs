use rand::{Rng, RngExt};
use waygrid_core::{CellState, Grid, Node};

/// Spawns transient obstacles while a search runs.
///
/// On each call to [`maybe_spawn`](ObstacleInjector::maybe_spawn), with
/// probability `probability` one uniformly random cell is drawn; if it is
/// `Empty` and neither endpoint, it becomes a `DynamicWall`. Spawned walls
/// stay for the rest of the run.
pub struct ObstacleInjector<R: Rng> {
    rng: R,
    probability: f64,
}

impl<R: Rng> ObstacleInjector<R> {
    /// Create an injector. `probability` is clamped to `[0, 1]`.
    pub fn new(rng: R, probability: f64) -> Self {
        Self {
            rng,
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// The spawn probability per call.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Possibly convert one empty cell into a dynamic wall.
    ///
    /// Returns the converted node, if any.
    pub fn maybe_spawn(&mut self, grid: &mut Grid, start: Node, target: Node) -> Option<Node> {
        if self.probability <= 0.0 || grid.bounds().is_empty() {
            return None;
        }
        if self.rng.random::<f64>() >= self.probability {
            return None;
        }
        let n = Node::new(
            self.rng.random_range(0..grid.rows()),
            self.rng.random_range(0..grid.cols()),
        );
        if n == start || n == target || grid.get(n) != Some(CellState::Empty) {
            return None;
        }
        grid[n] = CellState::DynamicWall;
        Some(n)
    }
}
