use rand::Rng;
use waygrid_core::{Grid, Node};

use crate::dls::PassOutcome;
use crate::engine::SearchEngine;
use crate::error::SearchError;
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::sink::ProgressSink;

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Iterative-deepening depth-first search.
    ///
    /// Runs depth-limited passes with limits 0, 1, 2, … up to the number of
    /// cells, and gives up early once a pass reaches every cell it can
    /// without hitting its limit. Every pass starts from a fresh copy of the
    /// input grid, so annotations and dynamic walls of a failed pass are
    /// discarded.
    ///
    /// `stats.depth` holds the limit of the last pass. Step and explore
    /// counters add up over all passes, so even an adjacent target costs two
    /// steps: the limit-0 pass only visits the start.
    pub fn iddfs(
        &mut self,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<SearchOutcome, SearchError> {
        let base = self.prepare(grid, start, target)?;
        let max_limit = base.bounds().len();
        let mut stats = SearchStats::default();
        let mut last = base.copy();

        for limit in 0..=max_limit {
            let mut pass = base.copy();
            stats.depth = Some(limit);
            log::debug!("IDDFS deepening to limit {limit}");
            match self.depth_limited(Algorithm::Iddfs, &mut pass, start, target, limit, &mut stats)
            {
                PassOutcome::Found(path) => {
                    return Ok(self.conclude(
                        Algorithm::Iddfs,
                        pass,
                        SearchStatus::Found,
                        path,
                        stats,
                    ));
                }
                PassOutcome::Cancelled => {
                    return Ok(self.conclude(
                        Algorithm::Iddfs,
                        pass,
                        SearchStatus::Cancelled,
                        Vec::new(),
                        stats,
                    ));
                }
                PassOutcome::Exhausted { cut_off } => {
                    last = pass;
                    if !cut_off {
                        log::debug!("IDDFS: limit {limit} reached every open cell");
                        break;
                    }
                }
            }
        }

        Ok(self.conclude(Algorithm::Iddfs, last, SearchStatus::NotFound, Vec::new(), stats))
    }
}

#[cfg(test)]
mod tests {
    use crate::{SearchConfig, SearchEngine, SearchStatus, sink::NoopSink};
    use waygrid_core::{CellState, Layout, Node};

    fn engine() -> SearchEngine<NoopSink> {
        SearchEngine::new(SearchConfig::headless(), NoopSink).unwrap()
    }

    #[test]
    fn succeeds_at_shortest_depth() {
        let l = Layout::parse(
            "
            S....
            .....
            .....
            .....
            ....T",
        )
        .unwrap();
        let out = engine().iddfs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.stats.depth, Some(4));
        let diag: Vec<_> = (0..5).map(|i| Node::new(i, i)).collect();
        assert_eq!(out.path, diag);
    }

    #[test]
    fn failed_passes_do_not_leak_annotations() {
        let l = Layout::parse(
            "
            S.....
            ......
            .....T",
        )
        .unwrap();
        let out = engine().iddfs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.stats.depth, Some(5));
        assert_eq!(out.grid.count(CellState::Path), out.path.len() - 2);
        // Steps add up over every pass, more than one pass can ever take.
        assert!(out.stats.steps > out.grid.bounds().len());
    }

    #[test]
    fn unreachable_target_stops_once_nothing_is_cut_off() {
        let l = Layout::parse(
            "
            S.#..
            ..#.T",
        )
        .unwrap();
        let out = engine().iddfs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.status, SearchStatus::NotFound);
        assert_eq!(out.stats.depth, Some(1));
        assert_eq!(out.stats.steps, 5);
        assert!(out.path.is_empty());
    }

    #[test]
    fn walled_in_target_gives_up_early() {
        let mut rows = vec![".".repeat(15); 15];
        rows[0].replace_range(0..1, "S");
        for row in &mut rows[6..=8] {
            row.replace_range(6..9, "###");
        }
        rows[7].replace_range(7..8, "T");
        let l = Layout::parse(&rows.join("\n")).unwrap();
        let out = engine().iddfs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.status, SearchStatus::NotFound);
        assert!(out.stats.depth.is_some_and(|d| d < 20), "{:?}", out.stats.depth);
        assert!(out.stats.steps < 20_000, "{}", out.stats.steps);
    }

    #[test]
    fn adjacent_target_needs_two_passes() {
        let l = Layout::parse("S..\n.T.\n...").unwrap();
        let out = engine().iddfs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.path, vec![l.start, l.target]);
        assert_eq!(out.stats.depth, Some(1));
        assert_eq!(out.stats.steps, 2);
    }
}
