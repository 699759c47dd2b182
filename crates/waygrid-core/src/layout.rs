//! Grid layouts: a grid together with its start and target.
//!
//! A [`Layout`] can be parsed from an ASCII picture using the glyphs of
//! [`CellState::glyph`]:
//!
//! ```text
//! S..#
//! .#..
//! ...T
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Node;
use crate::grid::Grid;

/// A grid with exactly one start and one target cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub grid: Grid,
    pub start: Node,
    pub target: Node,
}

impl Layout {
    /// Parse an ASCII picture.
    ///
    /// Surrounding whitespace of the whole picture and of each line is
    /// ignored. Every line must have the same width, and the picture must
    /// contain exactly one `S` and one `T`.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = Grid::new(lines.len() as i32, width as i32);
        let mut start = None;
        let mut target = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let node = Node::new(row as i32, col as i32);
                let state = CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, node })?;
                let slot = match state {
                    CellState::Start => Some(&mut start),
                    CellState::Target => Some(&mut target),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if let Some(first) = *slot {
                        return Err(GridError::DuplicateEndpoint {
                            state,
                            first,
                            second: node,
                        });
                    }
                    *slot = Some(node);
                }
                grid.set(node, state)?;
            }
        }

        Ok(Self {
            grid,
            start: start.ok_or(GridError::MissingEndpoint(CellState::Start))?,
            target: target.ok_or(GridError::MissingEndpoint(CellState::Target))?,
        })
    }
}

impl FromStr for Layout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        S..#
        .#..
        ...T";

    #[test]
    fn parse_and_locate_endpoints() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.grid.rows(), 3);
        assert_eq!(l.grid.cols(), 4);
        assert_eq!(l.start, Node::new(0, 0));
        assert_eq!(l.target, Node::new(2, 3));
        assert_eq!(l.grid[Node::new(1, 1)], CellState::Wall);
        assert_eq!(l.grid.count(CellState::Wall), 2);
    }

    #[test]
    fn display_round_trips_picture() {
        let l: Layout = ROOM.parse().unwrap();
        assert_eq!(l.to_string(), "S..#\n.#..\n...T");
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Layout::parse("S.\n..T").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn invalid_glyph_error() {
        let err = Layout::parse("S?\n.T").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidGlyph {
                ch: '?',
                node: Node::new(0, 1)
            }
        );
    }

    #[test]
    fn endpoint_errors() {
        assert_eq!(
            Layout::parse("S.\n..").unwrap_err(),
            GridError::MissingEndpoint(CellState::Target)
        );
        assert!(matches!(
            Layout::parse("ST\nS.").unwrap_err(),
            GridError::DuplicateEndpoint {
                state: CellState::Start,
                ..
            }
        ));
        assert_eq!(Layout::parse("  \n").unwrap_err(), GridError::Empty);
    }
}
