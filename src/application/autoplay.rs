use crate::domain::{BOARD_SIZE, Coordinate, Grid, Group, flood_fill};

/// All selectable groups on the board, each reported once
pub fn selectable_groups(grid: &Grid) -> Vec<Group> {
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut groups = Vec::new();

    for (at, _) in grid.iter_cells() {
        if seen[at.row][at.col] {
            continue;
        }
        let Ok(Some(group)) = flood_fill(grid, at) else {
            continue;
        };
        for member in group.iter() {
            seen[member.row][member.col] = true;
        }
        if group.is_selectable() {
            groups.push(group);
        }
    }
    groups
}

/// Greedy move: the origin of the largest group, first in row-major order on ties
pub fn largest_group_origin(grid: &Grid) -> Option<Coordinate> {
    selectable_groups(grid)
        .into_iter()
        .rev()
        .max_by_key(Group::len)
        .and_then(|group| group.iter().next())
}
