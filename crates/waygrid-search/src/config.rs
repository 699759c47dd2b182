use std::time::Duration;

use waygrid_core::DEFAULT_SIZE;

use crate::error::SearchError;

/// Engine configuration.
///
/// Everything a run depends on besides the grid itself lives here and is
/// handed to [`SearchEngine`](crate::SearchEngine) at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Rows of generated grids.
    pub rows: i32,
    /// Columns of generated grids.
    pub cols: i32,
    /// Share of cells that start as walls in generated grids.
    pub wall_ratio: f64,
    /// Chance per iteration that a dynamic wall spawns.
    pub obstacle_probability: f64,
    /// Depth bound used by depth-limited search.
    pub depth_limit: usize,
    /// Pause after each progress report.
    pub step_delay: Duration,
    /// Report a snapshot every this many steps.
    pub report_every: usize,
    /// Seed for the obstacle RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            wall_ratio: 0.20,
            obstacle_probability: 0.03,
            depth_limit: 8,
            step_delay: Duration::from_millis(60),
            report_every: 2,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Set the obstacle spawn probability (builder).
    pub fn with_obstacle_probability(mut self, p: f64) -> Self {
        self.obstacle_probability = p;
        self
    }

    /// Set the depth-limited search bound (builder).
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Set the pause after each report (builder).
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set the report cadence (builder).
    pub fn with_report_every(mut self, steps: usize) -> Self {
        self.report_every = steps;
        self
    }

    /// Set the obstacle RNG seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set generated grid dimensions (builder).
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the wall ratio of generated grids (builder).
    pub fn with_wall_ratio(mut self, ratio: f64) -> Self {
        self.wall_ratio = ratio;
        self
    }

    /// A configuration for headless tests: no obstacles, no pause, a
    /// report on every step.
    pub fn headless() -> Self {
        Self {
            obstacle_probability: 0.0,
            step_delay: Duration::ZERO,
            report_every: 1,
            seed: Some(0),
            ..Self::default()
        }
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(SearchError::InvalidConfig {
                field: "obstacle_probability",
                reason: format!("{} is outside [0, 1]", self.obstacle_probability),
            });
        }
        if !(0.0..1.0).contains(&self.wall_ratio) {
            return Err(SearchError::InvalidConfig {
                field: "wall_ratio",
                reason: format!("{} is outside [0, 1)", self.wall_ratio),
            });
        }
        if self.rows <= 0 || self.cols <= 0 {
            return Err(SearchError::InvalidConfig {
                field: "rows/cols",
                reason: format!("{}x{} has no cells", self.rows, self.cols),
            });
        }
        if self.report_every == 0 {
            return Err(SearchError::InvalidConfig {
                field: "report_every",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
