//! The board engine: generation, group detection, clearing, gravity and refill.
//!
//! The engine holds nothing but its random source. Every operation takes the
//! grid explicitly and reports score deltas instead of keeping totals, so the
//! caller owns all session state. Operations validate before they mutate:
//! an `Err` always leaves the grid exactly as it was.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{BOARD_SIZE, BoardError, Cell, Color, Coordinate, Grid, Group, ScoreDelta, group};

/// Result of clearing one group
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClearOutcome {
    pub delta: ScoreDelta,
    /// Group reached `BONUS_GROUP_SIZE`; what that earns is up to the caller
    pub bonus: bool,
}

impl ClearOutcome {
    fn for_size(group_size: usize) -> Self {
        let delta = ScoreDelta::for_group_size(group_size);
        Self {
            delta,
            bonus: delta.is_bonus(),
        }
    }
}

/// Stable per-column compaction: blocks fall to the bottom keeping their
/// relative order, holes rise to the top.
pub fn apply_gravity(grid: &mut Grid) -> &mut Grid {
    for col in 0..BOARD_SIZE {
        let filled: Vec<Cell> = grid
            .column(col)
            .into_iter()
            .filter(|cell| !cell.is_empty())
            .collect();

        let mut compacted = [Cell::Empty; BOARD_SIZE];
        compacted[BOARD_SIZE - filled.len()..].copy_from_slice(&filled);
        grid.write_column(col, compacted);
    }
    grid
}

/// Board engine parameterized over its random source.
/// Use `BoardEngine::seeded` for reproducible boards.
#[derive(Clone, Debug)]
pub struct BoardEngine<R = StdRng> {
    rng: R,
}

impl BoardEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> BoardEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Fresh board, every cell an independent uniform color.
    /// Ready-made matches are allowed.
    pub fn initialize(&mut self) -> Grid {
        Grid::from_fn(|_| Cell::Filled(Color::random(&mut self.rng)))
    }

    /// Maximal 4-connected same-color group containing `origin`,
    /// or `None` if the origin is empty.
    pub fn find_group(&self, grid: &Grid, origin: Coordinate) -> Result<Option<Group>, BoardError> {
        group::flood_fill(grid, origin)
    }

    /// Empty every cell of `group` and score it.
    /// Fails without touching the grid if any cell no longer holds the group color.
    pub fn clear_group(&self, grid: &mut Grid, group: &Group) -> Result<ClearOutcome, BoardError> {
        if group.is_empty() {
            return Err(BoardError::EmptyGroup);
        }
        let expected = Cell::Filled(group.color());
        for at in group.iter() {
            let found = grid.cell(at)?;
            if found != expected {
                return Err(BoardError::InvalidGroup {
                    at,
                    expected: group.color(),
                    found,
                });
            }
        }

        for at in group.iter() {
            grid.set(at, Cell::Empty)?;
        }
        Ok(ClearOutcome::for_size(group.len()))
    }

    pub fn apply_gravity<'g>(&self, grid: &'g mut Grid) -> &'g mut Grid {
        apply_gravity(grid)
    }

    /// Draw a new color for every empty cell. Filled cells are never touched.
    pub fn refill<'g>(&mut self, grid: &'g mut Grid) -> &'g mut Grid {
        for cell in grid.cells_mut().filter(|cell| cell.is_empty()) {
            *cell = Cell::Filled(Color::random(&mut self.rng));
        }
        grid
    }

    /// Clear, drop, refill, in that order. The board is full again on `Ok`.
    pub fn resolve_clear(&mut self, grid: &mut Grid, group: &Group) -> Result<ClearOutcome, BoardError> {
        let outcome = self.clear_group(grid, group)?;
        apply_gravity(grid);
        self.refill(grid);
        Ok(outcome)
    }

    /// Clear an arbitrary set of cells regardless of color, then drop and
    /// refill. Scored on the number of distinct positions, like a group.
    pub fn clear_cells(
        &mut self,
        grid: &mut Grid,
        cells: impl IntoIterator<Item = Coordinate>,
    ) -> Result<ClearOutcome, BoardError> {
        let cells: BTreeSet<Coordinate> = cells.into_iter().collect();
        for &at in &cells {
            Grid::check_bounds(at)?;
        }

        for &at in &cells {
            grid.set(at, Cell::Empty)?;
        }
        apply_gravity(grid);
        self.refill(grid);
        Ok(ClearOutcome::for_size(cells.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Cell = Cell::Filled(Color::Red);
    const B: Cell = Cell::Filled(Color::Blue);
    const G: Cell = Cell::Filled(Color::Green);
    const E: Cell = Cell::Empty;

    /// Checkerboard of blue/green so no red touches another red unless placed
    fn checker() -> Grid {
        Grid::from_fn(|c| if (c.row + c.col) % 2 == 0 { B } else { G })
    }

    fn coords(list: &[(usize, usize)]) -> BTreeSet<Coordinate> {
        list.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
    }

    #[test]
    fn test_initialize_fills_board() {
        let mut engine = BoardEngine::seeded(1);
        let grid = engine.initialize();
        assert!(grid.is_full());
    }

    #[test]
    fn test_seeded_engines_agree() {
        let a = BoardEngine::seeded(99).initialize();
        let b = BoardEngine::seeded(99).initialize();
        let c = BoardEngine::seeded(100).initialize();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_red_corner_scenario() {
        let mut grid = checker();
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            grid.set(Coordinate::new(r, c), R).unwrap();
        }
        let mut engine = BoardEngine::seeded(5);

        let group = engine.find_group(&grid, Coordinate::new(0, 0)).unwrap().unwrap();
        let found: BTreeSet<_> = group.iter().collect();
        assert_eq!(found, coords(&[(0, 0), (0, 1), (1, 0)]));
        assert!(group.is_selectable());

        let outcome = engine.resolve_clear(&mut grid, &group).unwrap();
        assert_eq!(outcome.delta.points, 30);
        assert!(!outcome.bonus);
        assert!(grid.is_full());
    }

    #[test]
    fn test_clear_group_empties_only_group() {
        let mut grid = checker();
        grid.set(Coordinate::new(4, 4), R).unwrap();
        grid.set(Coordinate::new(4, 5), R).unwrap();
        let before = grid.clone();
        let engine = BoardEngine::seeded(0);

        let group = engine.find_group(&grid, Coordinate::new(4, 5)).unwrap().unwrap();
        let outcome = engine.clear_group(&mut grid, &group).unwrap();
        assert_eq!(outcome.delta.points, 20);

        for (at, cell) in grid.iter_cells() {
            if group.contains(at) {
                assert_eq!(cell, E);
            } else {
                assert_eq!(Some(cell), before.get(at.row, at.col));
            }
        }
    }

    #[test]
    fn test_stale_group_leaves_grid_untouched() {
        let mut grid = checker();
        grid.set(Coordinate::new(0, 0), R).unwrap();
        grid.set(Coordinate::new(0, 1), R).unwrap();
        let engine = BoardEngine::seeded(0);
        let group = engine.find_group(&grid, Coordinate::new(0, 0)).unwrap().unwrap();

        // Another mutation lands before the clear
        grid.set(Coordinate::new(0, 1), B).unwrap();
        let before = grid.clone();

        let err = engine.clear_group(&mut grid, &group).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidGroup {
                at: Coordinate::new(0, 1),
                expected: Color::Red,
                found: B,
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_gravity_is_stable_compaction() {
        let mut rows = [[B; BOARD_SIZE]; BOARD_SIZE];
        let column = [R, E, G, E, E, B, R, E];
        for (row, cell) in column.into_iter().enumerate() {
            rows[row][3] = cell;
        }
        let mut grid = Grid::from_rows(rows);

        BoardEngine::seeded(0).apply_gravity(&mut grid);
        assert_eq!(grid.column(3), [E, E, E, E, R, G, B, R]);
        assert_eq!(grid.column(0), [B; BOARD_SIZE]);
    }

    #[test]
    fn test_refill_keeps_filled_cells() {
        let mut grid = checker();
        grid.set(Coordinate::new(0, 0), E).unwrap();
        grid.set(Coordinate::new(0, 7), E).unwrap();
        let before = grid.clone();

        BoardEngine::seeded(3).refill(&mut grid);
        assert!(grid.is_full());
        for (at, cell) in before.iter_cells().filter(|(_, c)| !c.is_empty()) {
            assert_eq!(grid.cell(at), Ok(cell));
        }
    }

    #[test]
    fn test_clear_cells_mixed_colors() {
        let mut grid = checker();
        let mut engine = BoardEngine::seeded(11);
        let outcome = engine
            .clear_cells(&mut grid, [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(5, 5)])
            .unwrap();
        assert_eq!(outcome.delta.points, 30);
        assert!(grid.is_full());
    }

    #[test]
    fn test_clear_cells_rejects_out_of_bounds_without_mutation() {
        let mut grid = checker();
        let before = grid.clone();
        let mut engine = BoardEngine::seeded(11);
        let err = engine
            .clear_cells(&mut grid, [Coordinate::new(0, 0), Coordinate::new(8, 1)])
            .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { row: 8, col: 1 });
        assert_eq!(grid, before);
    }

    #[test]
    fn test_bonus_flag_for_large_group() {
        let mut grid = checker();
        for col in 0..5 {
            grid.set(Coordinate::new(7, col), R).unwrap();
        }
        let mut engine = BoardEngine::seeded(2);
        let group = engine.find_group(&grid, Coordinate::new(7, 2)).unwrap().unwrap();
        let outcome = engine.resolve_clear(&mut grid, &group).unwrap();
        assert_eq!(outcome.delta.points, 150);
        assert!(outcome.bonus);
    }
}
