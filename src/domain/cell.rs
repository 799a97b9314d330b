use rand::Rng;

/// Block colors. The set is closed; two blocks match only when their tags match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Orange,
    Cyan,
}

impl Color {
    /// Palette in draw order
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Pink,
        Color::Orange,
        Color::Cyan,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Uniform draw over the palette
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::COUNT)]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Orange => "orange",
            Color::Cyan => "cyan",
        }
    }
}

/// Cell is a single board slot: either a hole left by a clear, or a block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Filled(color) => Some(color),
            Cell::Empty => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Filled(color)
    }
}
