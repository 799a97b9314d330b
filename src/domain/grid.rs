use std::fmt;

use super::{BoardError, Cell, Color};

/// Side length of the square board
pub const BOARD_SIZE: usize = 8;

/// A board position. Row 0 is the top row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Up, down, left and right neighbors that lie on the board.
    /// No wrapping at the edges, no diagonals.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coordinate::new(r, col)),
            Some(Coordinate::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coordinate::new(row, c)),
            Some(Coordinate::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(|c| c.in_bounds())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid is the fixed 8x8 board, stored row-major.
/// It has no behavior of its own beyond bounds-checked access; all game
/// rules live in `BoardEngine`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// An all-empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a function of position
    pub fn from_fn(mut f: impl FnMut(Coordinate) -> Cell) -> Self {
        let cells = std::array::from_fn(|row| std::array::from_fn(|col| f(Coordinate::new(row, col))));
        Self { cells }
    }

    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn check_bounds(coord: Coordinate) -> Result<(), BoardError> {
        if coord.in_bounds() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn cell(&self, coord: Coordinate) -> Result<Cell, BoardError> {
        Self::check_bounds(coord)?;
        Ok(self.cells[coord.row][coord.col])
    }

    pub fn set(&mut self, coord: Coordinate, cell: Cell) -> Result<(), BoardError> {
        Self::check_bounds(coord)?;
        self.cells[coord.row][coord.col] = cell;
        Ok(())
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Column contents, top to bottom. Caller guarantees `col < BOARD_SIZE`.
    pub(crate) fn column(&self, col: usize) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    pub(crate) fn write_column(&mut self, col: usize, column: [Cell; BOARD_SIZE]) {
        for (row, cell) in column.into_iter().enumerate() {
            self.cells[row][col] = cell;
        }
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Coordinate::new(row, col), cell))
        })
    }

    pub fn empty_count(&self) -> usize {
        self.iter_cells().filter(|(_, cell)| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Number of blocks of each color, indexed by `Color::index`
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut counts = [0; Color::COUNT];
        for color in self.iter_cells().filter_map(|(_, cell)| cell.color()) {
            counts[color.index()] += 1;
        }
        counts
    }
}
