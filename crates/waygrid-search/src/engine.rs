use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use waygrid_core::{CellState, Grid, Node};

use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::injector::ObstacleInjector;
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::sink::ProgressSink;

/// Runs searches over private copies of a caller's grid.
///
/// The engine owns the obstacle RNG, the progress sink and the
/// cancellation flag. Each run copies the input grid, so the caller's grid
/// is never mutated and consecutive runs do not see each other's
/// annotations or dynamic walls.
pub struct SearchEngine<S: ProgressSink, R: Rng = StdRng> {
    config: SearchConfig,
    sink: S,
    injector: ObstacleInjector<R>,
    cancel: CancelToken,
}

impl<S: ProgressSink> SearchEngine<S, StdRng> {
    /// Create an engine whose obstacle RNG is seeded from `config.seed`,
    /// or from entropy if no seed is set.
    pub fn new(config: SearchConfig, sink: S) -> Result<Self, SearchError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self::with_rng(config, sink, StdRng::seed_from_u64(seed))
    }
}

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Create an engine with an explicit obstacle RNG.
    pub fn with_rng(config: SearchConfig, sink: S, rng: R) -> Result<Self, SearchError> {
        config.validate()?;
        let injector = ObstacleInjector::new(rng, config.obstacle_probability);
        Ok(Self {
            config,
            sink,
            injector,
            cancel: CancelToken::new(),
        })
    }

    /// The engine configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The progress sink.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the progress sink.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the engine, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// A handle that aborts the current and any later run when tripped.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Share an existing token, such as one already held by a display.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Run `algorithm` from `start` to `target` on a private copy of `grid`.
    ///
    /// Depth-limited search uses `config.depth_limit`.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<SearchOutcome, SearchError> {
        match algorithm {
            Algorithm::Bfs => self.bfs(grid, start, target),
            Algorithm::Dfs => self.dfs(grid, start, target),
            Algorithm::Ucs => self.ucs(grid, start, target),
            Algorithm::Dls => self.dls(grid, start, target, self.config.depth_limit),
            Algorithm::Iddfs => self.iddfs(grid, start, target),
            Algorithm::Bidirectional => self.bidirectional(grid, start, target),
        }
    }

    // -----------------------------------------------------------------------
    // Shared run plumbing
    // -----------------------------------------------------------------------

    /// Check the endpoints and return the run's private grid copy.
    pub(crate) fn prepare(
        &self,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<Grid, SearchError> {
        for node in [start, target] {
            let state = grid.at(node)?;
            if state.is_obstacle() {
                return Err(SearchError::BlockedEndpoint { node, state });
            }
        }
        let mut copy = grid.copy();
        copy[start] = CellState::Start;
        copy[target] = CellState::Target;
        Ok(copy)
    }

    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Give the injector its once-per-iteration chance.
    pub(crate) fn spawn(
        &mut self,
        grid: &mut Grid,
        start: Node,
        target: Node,
        stats: &mut SearchStats,
    ) {
        if let Some(n) = self.injector.maybe_spawn(grid, start, target) {
            stats.dynamic_walls += 1;
            log::debug!("dynamic wall spawned at {n}");
        }
    }

    /// Report a snapshot if the step counter hits the cadence.
    pub(crate) fn progress(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        stats: &SearchStats,
        frontier: usize,
    ) {
        if stats.steps % self.config.report_every != 0 {
            return;
        }
        let mut status = format!(
            "{algorithm} | step {} | explored {} | frontier {frontier}",
            stats.steps, stats.explored
        );
        if let Some(depth) = stats.depth {
            status.push_str(&format!(" | limit {depth}"));
        }
        self.sink.report(grid, &status);
    }

    /// Paint the path, send the final report and assemble the outcome.
    pub(crate) fn conclude(
        &mut self,
        algorithm: Algorithm,
        mut grid: Grid,
        mut status: SearchStatus,
        mut path: Vec<Node>,
        mut stats: SearchStats,
    ) -> SearchOutcome {
        if status == SearchStatus::Found && path.is_empty() {
            log::warn!("{algorithm}: target reached but predecessor chain is broken");
            status = SearchStatus::NotFound;
        }
        if status != SearchStatus::Found {
            path.clear();
        }
        for &n in &path {
            if !grid[n].is_endpoint() {
                grid[n] = CellState::Path;
            }
        }
        stats.path_len = path.len();

        let summary = format!("{algorithm}: {status} | {stats}");
        log::info!("{summary}");
        self.sink.report(&grid, &summary);

        SearchOutcome {
            algorithm,
            status,
            path,
            stats,
            grid,
        }
    }
}

/// Mark a popped node explored, leaving endpoints and obstacles alone.
pub(crate) fn mark_explored(grid: &mut Grid, node: Node) {
    let cell = &mut grid[node];
    if !cell.is_endpoint() && !cell.is_obstacle() {
        *cell = CellState::Explored;
    }
}

/// Mark a discovered node as part of the frontier, leaving endpoints and
/// obstacles alone.
pub(crate) fn mark_frontier(grid: &mut Grid, node: Node) {
    let cell = &mut grid[node];
    if !cell.is_endpoint() && !cell.is_obstacle() {
        *cell = CellState::Frontier;
    }
}
