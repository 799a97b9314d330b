use std::collections::{BTreeSet, VecDeque};

use super::{BoardError, Color, Coordinate, Grid};

/// Smallest group the player may clear
pub const MIN_SELECTABLE: usize = 2;

/// A set of same-colored, 4-connected board positions.
/// Always holds at least one cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Group {
    color: Color,
    cells: BTreeSet<Coordinate>,
}

impl Group {
    /// Build a group from explicit cells, e.g. a selection kept by the caller.
    /// Connectivity is not checked here; `BoardEngine::clear_group` checks
    /// the colors against the grid before clearing.
    pub fn from_cells(
        color: Color,
        cells: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, BoardError> {
        let cells: BTreeSet<_> = cells.into_iter().collect();
        if let Some(bad) = cells.iter().find(|c| !c.in_bounds()) {
            return Err(BoardError::OutOfBounds {
                row: bad.row,
                col: bad.col,
            });
        }
        if cells.is_empty() {
            return Err(BoardError::EmptyGroup);
        }
        Ok(Self { color, cells })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the group is big enough to clear
    pub fn is_selectable(&self) -> bool {
        self.len() >= MIN_SELECTABLE
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }
}

/// Breadth-first flood fill from `origin` over same-colored neighbors.
/// Returns `None` when the origin cell is empty.
pub fn flood_fill(grid: &Grid, origin: Coordinate) -> Result<Option<Group>, BoardError> {
    let Some(color) = grid.cell(origin)?.color() else {
        return Ok(None);
    };

    let mut cells = BTreeSet::from([origin]);
    let mut queue = VecDeque::from([origin]);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            if grid.get(next.row, next.col).and_then(|c| c.color()) == Some(color)
                && cells.insert(next)
            {
                queue.push_back(next);
            }
        }
    }

    Ok(Some(Group { color, cells }))
}
