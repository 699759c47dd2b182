//! The [`CellState`] type: what occupies a single grid cell.

/// State of one grid cell.
///
/// `Empty`, `Wall`, `Start` and `Target` describe the static topology.
/// The remaining states are annotations written during a search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    Target,
    Frontier,
    Explored,
    Path,
    DynamicWall,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 8] = [
        CellState::Empty,
        CellState::Wall,
        CellState::Start,
        CellState::Target,
        CellState::Frontier,
        CellState::Explored,
        CellState::Path,
        CellState::DynamicWall,
    ];

    /// Whether the cell blocks movement.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, CellState::Wall | CellState::DynamicWall)
    }

    /// Whether the cell is the start or the target.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::Target)
    }

    /// ASCII glyph used by layout pictures and plain-text rendering.
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Target => 'T',
            CellState::Frontier => '+',
            CellState::Explored => 'o',
            CellState::Path => '*',
            CellState::DynamicWall => 'X',
        }
    }

    /// Inverse of [`glyph`](CellState::glyph).
    pub const fn from_glyph(ch: char) -> Option<CellState> {
        Some(match ch {
            '.' => CellState::Empty,
            '#' => CellState::Wall,
            'S' => CellState::Start,
            'T' => CellState::Target,
            '+' => CellState::Frontier,
            'o' => CellState::Explored,
            '*' => CellState::Path,
            'X' => CellState::DynamicWall,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_reversible() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn obstacles_and_endpoints() {
        assert!(CellState::Wall.is_obstacle());
        assert!(CellState::DynamicWall.is_obstacle());
        assert!(!CellState::Frontier.is_obstacle());
        assert!(!CellState::Explored.is_obstacle());
        assert!(CellState::Start.is_endpoint());
        assert!(CellState::Target.is_endpoint());
        assert!(!CellState::Path.is_endpoint());
        assert_eq!(CellState::default(), CellState::Empty);
    }
}
