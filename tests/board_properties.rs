#![forbid(unsafe_code)]

/*
 * Property tests for the board engine.
 *
 * Invariants covered:
 * - `find_group` returns a connected, maximal, single-color group, or None
 *   exactly when the origin is empty. Repeated calls agree.
 * - Gravity keeps each column's block sequence and puts every hole on top.
 * - Refill fills every hole and leaves blocks alone.
 * - `clear_group` empties the group and nothing else.
 * - A full clear/drop/refill cycle always ends with a full board.
 */
use std::collections::{BTreeSet, VecDeque};

use block_match::domain::{
    BOARD_SIZE, BoardEngine, BoardError, Cell, Color, Coordinate, Grid, ScoreDelta,
};
use proptest::prelude::*;

/// Boards drawn from the first `colors` palette entries with a share of holes.
/// Few colors give big groups, many colors give singletons.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=Color::COUNT, 0u32..=30).prop_flat_map(|(colors, empty_pct)| {
        prop::collection::vec((0..colors, 0u32..100), BOARD_SIZE * BOARD_SIZE).prop_map(
            move |cells| {
                Grid::from_fn(|at| {
                    let (color, roll) = cells[at.row * BOARD_SIZE + at.col];
                    if roll < empty_pct {
                        Cell::Empty
                    } else {
                        Cell::Filled(Color::ALL[color])
                    }
                })
            },
        )
    })
}

fn arb_full_grid() -> impl Strategy<Value = Grid> {
    (1usize..=Color::COUNT, any::<u64>()).prop_map(|(colors, seed)| {
        let mut grid = BoardEngine::seeded(seed).initialize();
        let cells: Vec<_> = grid.iter_cells().collect();
        for (at, cell) in cells {
            if let Cell::Filled(color) = cell {
                grid.set(at, Cell::Filled(Color::ALL[color.index() % colors])).unwrap();
            }
        }
        grid
    })
}

fn arb_coord() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(row, col)| Coordinate::new(row, col))
}

fn column(grid: &Grid, col: usize) -> Vec<Cell> {
    (0..BOARD_SIZE).map(|row| grid.get(row, col).unwrap()).collect()
}

proptest! {
    #[test]
    fn group_is_connected_and_maximal(grid in arb_grid(), origin in arb_coord()) {
        let engine = BoardEngine::seeded(0);
        let found = engine.find_group(&grid, origin).unwrap();

        let Some(group) = found else {
            prop_assert_eq!(grid.cell(origin).unwrap(), Cell::Empty);
            return Ok(());
        };
        let color = group.color();
        prop_assert_eq!(grid.cell(origin).unwrap(), Cell::Filled(color));
        prop_assert!(group.contains(origin));
        prop_assert!(!group.is_empty());

        for at in group.iter() {
            prop_assert!(at.in_bounds());
            prop_assert_eq!(grid.cell(at).unwrap(), Cell::Filled(color));
            // Maximality: no same-colored neighbor is left out
            for next in at.neighbors() {
                if grid.cell(next).unwrap() == Cell::Filled(color) {
                    prop_assert!(group.contains(next));
                }
            }
        }

        // Connectivity: walking inside the group from the origin reaches every member
        let members: BTreeSet<_> = group.iter().collect();
        let mut reached = BTreeSet::from([origin]);
        let mut queue = VecDeque::from([origin]);
        while let Some(at) = queue.pop_front() {
            for next in at.neighbors() {
                if members.contains(&next) && reached.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        prop_assert_eq!(reached, members);
    }

    #[test]
    fn find_group_is_deterministic(grid in arb_grid(), origin in arb_coord()) {
        let engine = BoardEngine::seeded(0);
        let first = engine.find_group(&grid, origin).unwrap();
        let second = engine.find_group(&grid, origin).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_origin_is_rejected(grid in arb_grid(), row in 0usize..20, col in 8usize..20) {
        let engine = BoardEngine::seeded(0);
        prop_assert_eq!(
            engine.find_group(&grid, Coordinate::new(row, col)),
            Err(BoardError::OutOfBounds { row, col })
        );
    }

    #[test]
    fn gravity_keeps_order_and_count(mut grid in arb_grid()) {
        let before = grid.clone();
        BoardEngine::seeded(0).apply_gravity(&mut grid);

        for col in 0..BOARD_SIZE {
            let old = column(&before, col);
            let new = column(&grid, col);
            let old_blocks: Vec<_> = old.iter().filter(|c| !c.is_empty()).collect();
            let new_blocks: Vec<_> = new.iter().filter(|c| !c.is_empty()).collect();
            prop_assert_eq!(&old_blocks, &new_blocks);

            let holes = BOARD_SIZE - new_blocks.len();
            prop_assert!(new[..holes].iter().all(|c| c.is_empty()));
            prop_assert!(new[holes..].iter().all(|c| !c.is_empty()));
        }
    }

    #[test]
    fn refill_is_total_and_keeps_blocks(mut grid in arb_grid(), seed in any::<u64>()) {
        let before = grid.clone();
        BoardEngine::seeded(seed).refill(&mut grid);

        prop_assert!(grid.is_full());
        for (at, cell) in before.iter_cells() {
            if !cell.is_empty() {
                prop_assert_eq!(grid.cell(at).unwrap(), cell);
            }
        }
    }

    #[test]
    fn clear_touches_only_the_group(mut grid in arb_grid(), origin in arb_coord()) {
        let engine = BoardEngine::seeded(0);
        let Some(group) = engine.find_group(&grid, origin).unwrap() else {
            return Ok(());
        };
        let before = grid.clone();
        let outcome = engine.clear_group(&mut grid, &group).unwrap();

        prop_assert_eq!(outcome.delta, ScoreDelta::for_group_size(group.len()));
        prop_assert_eq!(outcome.bonus, group.len() >= 5);
        for (at, cell) in grid.iter_cells() {
            if group.contains(at) {
                prop_assert_eq!(cell, Cell::Empty);
            } else {
                prop_assert_eq!(cell, before.cell(at).unwrap());
            }
        }
    }

    #[test]
    fn resolve_cycle_ends_full(mut grid in arb_full_grid(), origin in arb_coord(), seed in any::<u64>()) {
        let mut engine = BoardEngine::seeded(seed);
        let group = engine.find_group(&grid, origin).unwrap().unwrap();
        engine.resolve_clear(&mut grid, &group).unwrap();
        prop_assert!(grid.is_full());
    }

    #[test]
    fn score_formula(n in 0usize..=64) {
        let delta = ScoreDelta::for_group_size(n);
        let n = n as u64;
        prop_assert_eq!(delta.points, n * 10 * n.saturating_sub(2).max(1));
    }

    #[test]
    fn seeded_boards_reproduce(seed in any::<u64>()) {
        let a = BoardEngine::seeded(seed).initialize();
        let b = BoardEngine::seeded(seed).initialize();
        prop_assert!(a.is_full());
        prop_assert_eq!(a, b);
    }
}

#[test]
fn scores_for_common_sizes() {
    let points: Vec<_> = [2, 3, 5, 8]
        .iter()
        .map(|&n| ScoreDelta::for_group_size(n).points)
        .collect();
    assert_eq!(points, vec![20, 30, 150, 480]);
}

#[test]
fn corner_origins_do_not_leak_off_board() {
    let grid = Grid::from_fn(|_| Cell::Filled(Color::Red));
    let engine = BoardEngine::seeded(0);
    for origin in [
        Coordinate::new(0, 0),
        Coordinate::new(0, 7),
        Coordinate::new(7, 0),
        Coordinate::new(7, 7),
    ] {
        let group = engine.find_group(&grid, origin).unwrap().unwrap();
        assert_eq!(group.len(), 64);
        assert!(group.iter().all(|at| at.in_bounds()));
    }
}
