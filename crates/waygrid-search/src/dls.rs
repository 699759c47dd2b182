use std::collections::HashMap;

use rand::Rng;
use waygrid_core::{Grid, Node};

use crate::engine::{SearchEngine, mark_explored, mark_frontier};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::sink::ProgressSink;

/// Result of one depth-bounded pass.
pub(crate) enum PassOutcome {
    Found(Vec<Node>),
    /// The stack ran dry. `cut_off` is set when a deeper pass could still
    /// reach cells this one never visited.
    Exhausted { cut_off: bool },
    Cancelled,
}

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Depth-limited search with bound `limit` (in moves).
    ///
    /// Any route returned has at most `limit + 1` nodes. It is the first
    /// one found, not necessarily the shortest.
    pub fn dls(
        &mut self,
        grid: &Grid,
        start: Node,
        target: Node,
        limit: usize,
    ) -> Result<SearchOutcome, SearchError> {
        let mut grid = self.prepare(grid, start, target)?;
        let mut stats = SearchStats {
            depth: Some(limit),
            ..SearchStats::default()
        };
        let (status, path) =
            match self.depth_limited(Algorithm::Dls, &mut grid, start, target, limit, &mut stats) {
                PassOutcome::Found(path) => (SearchStatus::Found, path),
                PassOutcome::Exhausted { .. } => (SearchStatus::NotFound, Vec::new()),
                PassOutcome::Cancelled => (SearchStatus::Cancelled, Vec::new()),
            };
        Ok(self.conclude(Algorithm::Dls, grid, status, path, stats))
    }

    /// One depth-bounded pass over `grid`, without recursion.
    ///
    /// Each stack entry carries its node, depth and route so far. A node is
    /// expanded only while `depth < limit`; nodes on the boundary are still
    /// visited and marked. A node is expanded again only if reached by a
    /// strictly shallower route, and a route never revisits its own nodes.
    ///
    /// The pass counts as cut off if a boundary node still has an unvisited
    /// passable neighbour at the end, or if a dynamic wall spawned during it
    /// (a fresh grid may open that cell again).
    pub(crate) fn depth_limited(
        &mut self,
        algorithm: Algorithm,
        grid: &mut Grid,
        start: Node,
        target: Node,
        limit: usize,
        stats: &mut SearchStats,
    ) -> PassOutcome {
        let mut stack: Vec<(Node, usize, Vec<Node>)> = vec![(start, 0, vec![start])];
        let mut shallowest: HashMap<Node, usize> = HashMap::new();
        let mut boundary = Vec::new();
        let mut nbuf = Neighbors::new();
        let walls_before = stats.dynamic_walls;

        loop {
            if self.is_cancelled() {
                return PassOutcome::Cancelled;
            }
            let Some((node, depth, path)) = stack.pop() else {
                let cut_off = stats.dynamic_walls > walls_before
                    || boundary.iter().any(|&b| {
                        nbuf.passable(grid, b)
                            .iter()
                            .any(|n| !shallowest.contains_key(n))
                    });
                return PassOutcome::Exhausted { cut_off };
            };
            let first_visit = match shallowest.get(&node) {
                Some(&d) if d <= depth => continue,
                Some(_) => false,
                None => true,
            };
            shallowest.insert(node, depth);
            stats.steps += 1;
            self.spawn(grid, start, target, stats);
            if node == target {
                return PassOutcome::Found(path);
            }

            mark_explored(grid, node);
            if first_visit {
                stats.explored += 1;
            }

            if depth < limit {
                let next_nodes = nbuf.passable(grid, node);
                if next_nodes.contains(&target) {
                    let mut path = path;
                    path.push(target);
                    return PassOutcome::Found(path);
                }
                for &next in next_nodes.iter().rev() {
                    if path.contains(&next)
                        || shallowest.get(&next).is_some_and(|&d| d <= depth + 1)
                    {
                        continue;
                    }
                    if !shallowest.contains_key(&next) {
                        mark_frontier(grid, next);
                    }
                    let mut branch = Vec::with_capacity(path.len() + 1);
                    branch.extend_from_slice(&path);
                    branch.push(next);
                    stack.push((next, depth + 1, branch));
                }
            } else {
                boundary.push(node);
            }

            self.progress(algorithm, grid, stats, stack.len());
        }
    }
}
