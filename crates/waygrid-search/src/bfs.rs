use std::collections::{HashSet, VecDeque};

use rand::Rng;
use waygrid_core::{Grid, Node};

use crate::engine::{SearchEngine, mark_explored, mark_frontier};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::reconstruct::{Predecessors, reconstruct};
use crate::sink::ProgressSink;

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Breadth-first search.
    ///
    /// FIFO frontier, visited check at enqueue time. Absent dynamic walls
    /// the route has the fewest possible moves.
    pub fn bfs(
        &mut self,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<SearchOutcome, SearchError> {
        let mut grid = self.prepare(grid, start, target)?;
        let mut stats = SearchStats::default();
        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::from([start]);
        let mut preds = Predecessors::from([(start, None)]);
        let mut nbuf = Neighbors::new();

        let status = 'search: loop {
            if self.is_cancelled() {
                break SearchStatus::Cancelled;
            }
            let Some(node) = queue.pop_front() else {
                break SearchStatus::NotFound;
            };
            stats.steps += 1;
            self.spawn(&mut grid, start, target, &mut stats);
            if node == target {
                break SearchStatus::Found;
            }

            mark_explored(&mut grid, node);
            stats.explored += 1;

            for &next in nbuf.passable(&grid, node) {
                if !visited.insert(next) {
                    continue;
                }
                preds.insert(next, Some(node));
                if next == target {
                    break 'search SearchStatus::Found;
                }
                mark_frontier(&mut grid, next);
                queue.push_back(next);
            }

            self.progress(Algorithm::Bfs, &grid, &stats, queue.len());
        };

        let path = match status {
            SearchStatus::Found => reconstruct(&preds, start, target),
            _ => Vec::new(),
        };
        Ok(self.conclude(Algorithm::Bfs, grid, status, path, stats))
    }
}
