use std::f64::consts::SQRT_2;

use waygrid_core::{Grid, Node};

/// Cost of a straight (orthogonal) move.
pub const STRAIGHT_COST: f64 = 1.0;
/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// Cached neighbor computation helper.
///
/// Enumerates the eight grid-adjacent cells of a node in
/// [`DIRECTIONS`](waygrid_core::DIRECTIONS) order, keeping those inside the
/// grid whose current state is not an obstacle. Start, target and search
/// annotations are all passable.
pub struct Neighbors {
    buf: Vec<Node>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Passable neighbors of `node` in the grid's current state.
    pub fn passable(&mut self, grid: &Grid, node: Node) -> &[Node] {
        self.buf.clear();
        for n in node.neighbors_8() {
            if grid.get(n).is_some_and(|c| !c.is_obstacle()) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// Passable neighbors of `node`, freshly allocated.
pub fn neighbors(grid: &Grid, node: Node) -> Vec<Node> {
    Neighbors::new().passable(grid, node).to_vec()
}

/// Cost of moving between two adjacent nodes.
#[inline]
pub fn step_cost(from: Node, to: Node) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Sum of step costs along `path`.
pub fn path_cost(path: &[Node]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::{CellState, Layout};

    #[test]
    fn interior_node_has_eight_in_order() {
        let grid = Grid::new(3, 3);
        let ns = neighbors(&grid, Node::new(1, 1));
        assert_eq!(
            ns,
            vec![
                Node::new(0, 1),
                Node::new(1, 2),
                Node::new(2, 1),
                Node::new(2, 2),
                Node::new(1, 0),
                Node::new(0, 0),
                Node::new(0, 2),
                Node::new(2, 0),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_to_bounds() {
        let grid = Grid::new(3, 3);
        let ns = neighbors(&grid, Node::new(0, 0));
        assert_eq!(ns, vec![Node::new(0, 1), Node::new(1, 0), Node::new(1, 1)]);
    }

    #[test]
    fn obstacles_filtered_annotations_kept() {
        let layout = Layout::parse(
            "
            #X+
            oS*
            T..",
        )
        .unwrap();
        let ns = neighbors(&layout.grid, layout.start);
        assert!(!ns.contains(&Node::new(0, 0)));
        assert!(!ns.contains(&Node::new(0, 1)));
        assert!(ns.contains(&Node::new(0, 2)));
        assert!(ns.contains(&Node::new(1, 0)));
        assert!(ns.contains(&Node::new(1, 2)));
        assert!(ns.contains(&layout.target));
        assert_eq!(ns.len(), 6);
    }

    #[test]
    fn helper_reuses_buffer() {
        let mut grid = Grid::new(2, 2);
        grid[Node::new(1, 1)] = CellState::Wall;
        let mut nb = Neighbors::new();
        assert_eq!(nb.passable(&grid, Node::new(0, 0)).len(), 2);
        assert_eq!(nb.passable(&grid, Node::new(1, 1)).len(), 3);
    }

    #[test]
    fn costs() {
        let a = Node::new(0, 0);
        assert_eq!(step_cost(a, Node::new(0, 1)), 1.0);
        assert_eq!(step_cost(a, Node::new(1, 1)), SQRT_2);
        let path = [a, Node::new(1, 1), Node::new(1, 2)];
        assert!((path_cost(&path) - (SQRT_2 + 1.0)).abs() < 1e-12);
        assert_eq!(path_cost(&[a]), 0.0);
    }
}
