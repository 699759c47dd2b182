use std::collections::VecDeque;

use rand::Rng;
use waygrid_core::{Grid, Node};

use crate::engine::{SearchEngine, mark_explored, mark_frontier};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::reconstruct::{Predecessors, reconstruct};
use crate::sink::ProgressSink;

/// Pop one node from `queue` and expand it.
///
/// Returns the node if the other side has already reached it.
fn advance(
    grid: &mut Grid,
    queue: &mut VecDeque<Node>,
    own: &mut Predecessors,
    other: &Predecessors,
    nbuf: &mut Neighbors,
    stats: &mut SearchStats,
) -> Option<Node> {
    let node = queue.pop_front()?;
    if other.contains_key(&node) {
        return Some(node);
    }
    mark_explored(grid, node);
    stats.explored += 1;
    for &next in nbuf.passable(grid, node) {
        if own.contains_key(&next) {
            continue;
        }
        own.insert(next, Some(node));
        mark_frontier(grid, next);
        queue.push_back(next);
    }
    None
}

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Bidirectional breadth-first search.
    ///
    /// One BFS grows from the start and one from the target, each keeping
    /// its own predecessor map. Every iteration advances the forward side
    /// by one node, then the backward side. The sides meet when one pops a
    /// node the other has already reached. The run fails only once both
    /// queues are empty.
    pub fn bidirectional(
        &mut self,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<SearchOutcome, SearchError> {
        let mut grid = self.prepare(grid, start, target)?;
        let mut stats = SearchStats::default();
        let mut fq = VecDeque::from([start]);
        let mut bq = VecDeque::from([target]);
        let mut fpred = Predecessors::from([(start, None)]);
        let mut bpred = Predecessors::from([(target, None)]);
        let mut nbuf = Neighbors::new();

        let (status, meet) = loop {
            if self.is_cancelled() {
                break (SearchStatus::Cancelled, None);
            }
            if fq.is_empty() && bq.is_empty() {
                break (SearchStatus::NotFound, None);
            }
            stats.steps += 1;
            self.spawn(&mut grid, start, target, &mut stats);

            let mut met = advance(&mut grid, &mut fq, &mut fpred, &bpred, &mut nbuf, &mut stats);
            if met.is_none() {
                met = advance(&mut grid, &mut bq, &mut bpred, &fpred, &mut nbuf, &mut stats);
            }
            if let Some(m) = met {
                break (SearchStatus::Found, Some(m));
            }

            self.progress(Algorithm::Bidirectional, &grid, &stats, fq.len() + bq.len());
        };

        let path = match meet {
            Some(m) => join(&fpred, &bpred, start, target, m),
            None => Vec::new(),
        };
        Ok(self.conclude(Algorithm::Bidirectional, grid, status, path, stats))
    }
}

/// Splice the forward route to `meet` with the reversed backward route.
fn join(
    fpred: &Predecessors,
    bpred: &Predecessors,
    start: Node,
    target: Node,
    meet: Node,
) -> Vec<Node> {
    let mut path = reconstruct(fpred, start, meet);
    let back = reconstruct(bpred, target, meet);
    if path.is_empty() || back.is_empty() {
        return Vec::new();
    }
    path.extend(back.into_iter().rev().skip(1));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchConfig, sink::NoopSink};
    use waygrid_core::{CellState, Layout};

    fn engine() -> SearchEngine<NoopSink> {
        SearchEngine::new(SearchConfig::headless(), NoopSink).unwrap()
    }

    #[test]
    fn corridor_meets_in_the_middle() {
        let l = Layout::parse("S........T").unwrap();
        let out = engine().bidirectional(&l.grid, l.start, l.target).unwrap();
        assert!(out.is_found());
        let expected: Vec<_> = (0..10).map(|c| Node::new(0, c)).collect();
        assert_eq!(out.path, expected);
        assert_eq!(out.stats.steps, 5);
    }

    #[test]
    fn adjacent_endpoints() {
        let l = Layout::parse("S..\n.T.\n...").unwrap();
        let out = engine().bidirectional(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.path, vec![l.start, l.target]);
        assert_eq!(out.stats.steps, 1);
    }

    #[test]
    fn start_is_target() {
        let l = Layout::parse("S.\n.T").unwrap();
        let out = engine().bidirectional(&l.grid, l.start, l.start).unwrap();
        assert_eq!(out.path, vec![l.start]);
    }

    #[test]
    fn separated_sides_exhaust_both_queues() {
        let l = Layout::parse(
            "
            S.#..
            ..#.T",
        )
        .unwrap();
        let out = engine().bidirectional(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.status, SearchStatus::NotFound);
        // Every open cell was expanded by exactly one side.
        assert_eq!(out.stats.explored, 8);
        assert_eq!(out.grid.count(CellState::Frontier), 0);
    }

    #[test]
    fn join_splices_both_halves() {
        let (s, m, t) = (Node::new(0, 0), Node::new(0, 1), Node::new(0, 2));
        let fpred = Predecessors::from([(s, None), (m, Some(s))]);
        let bpred = Predecessors::from([(t, None), (m, Some(t))]);
        assert_eq!(join(&fpred, &bpred, s, t, m), vec![s, m, t]);
    }
}
