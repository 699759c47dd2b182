use std::collections::HashSet;

use rand::Rng;
use waygrid_core::{Grid, Node};

use crate::engine::{SearchEngine, mark_explored, mark_frontier};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::reconstruct::{Predecessors, reconstruct};
use crate::sink::ProgressSink;

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Depth-first search.
    ///
    /// LIFO frontier with the visited check at pop time, so a node may sit
    /// on the stack several times. Neighbors are pushed in reverse so the
    /// first one in enumeration order is expanded first. A target seen
    /// among the neighbors of the expanded node ends the run at once.
    pub fn dfs(
        &mut self,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<SearchOutcome, SearchError> {
        let mut grid = self.prepare(grid, start, target)?;
        let mut stats = SearchStats::default();
        let mut stack = vec![start];
        let mut visited = HashSet::new();
        let mut preds = Predecessors::from([(start, None)]);
        let mut nbuf = Neighbors::new();

        let status = loop {
            if self.is_cancelled() {
                break SearchStatus::Cancelled;
            }
            let Some(node) = stack.pop() else {
                break SearchStatus::NotFound;
            };
            if !visited.insert(node) {
                continue;
            }
            stats.steps += 1;
            self.spawn(&mut grid, start, target, &mut stats);
            if node == target {
                break SearchStatus::Found;
            }

            mark_explored(&mut grid, node);
            stats.explored += 1;

            let next_nodes = nbuf.passable(&grid, node);
            if next_nodes.contains(&target) {
                preds.insert(target, Some(node));
                break SearchStatus::Found;
            }
            for &next in next_nodes.iter().rev() {
                if visited.contains(&next) {
                    continue;
                }
                // The latest push is popped first, so it owns the link.
                preds.insert(next, Some(node));
                mark_frontier(&mut grid, next);
                stack.push(next);
            }

            self.progress(Algorithm::Dfs, &grid, &stats, stack.len());
        };

        let path = match status {
            SearchStatus::Found => reconstruct(&preds, start, target),
            _ => Vec::new(),
        };
        Ok(self.conclude(Algorithm::Dfs, grid, status, path, stats))
    }
}
