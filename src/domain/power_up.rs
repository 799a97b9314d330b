use rand::Rng;

use super::{BoardEngine, BoardError, Cell, ClearOutcome, Color, Coordinate, Grid};

/// Rows and columns recolored by the magnet (the centre 3x3 block)
pub const MAGNET_SPAN: std::ops::Range<usize> = 2..5;

/// Tunables for power-up effects
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerUpTuning {
    /// Chance that the rainbow removes any given cell
    pub rainbow_probability: f64,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            rainbow_probability: 0.3,
        }
    }
}

/// Power-ups the player can trigger between moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUp {
    /// Remove a random scattering of blocks of any color
    RainbowClear,
    /// Paint the centre of the board with the most common color
    ColorMagnet,
    /// Purely cosmetic pause; the board is left as is
    Freeze,
}

/// What a power-up did to the board
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridEffect {
    Cleared(ClearOutcome),
    Recolored { color: Color, cells: Vec<Coordinate> },
    Frozen,
    Unchanged,
}

impl PowerUp {
    pub const ALL: [PowerUp; 3] = [PowerUp::RainbowClear, PowerUp::ColorMagnet, PowerUp::Freeze];

    pub fn name(self) -> &'static str {
        match self {
            PowerUp::RainbowClear => "Rainbow",
            PowerUp::ColorMagnet => "Magnet",
            PowerUp::Freeze => "Freeze",
        }
    }

    pub fn apply_to<R: Rng>(
        self,
        grid: &mut Grid,
        engine: &mut BoardEngine<R>,
        tuning: PowerUpTuning,
    ) -> Result<GridEffect, BoardError> {
        match self {
            PowerUp::RainbowClear => rainbow(grid, engine, tuning.rainbow_probability),
            PowerUp::ColorMagnet => magnet(grid),
            PowerUp::Freeze => Ok(GridEffect::Frozen),
        }
    }
}

fn rainbow<R: Rng>(
    grid: &mut Grid,
    engine: &mut BoardEngine<R>,
    probability: f64,
) -> Result<GridEffect, BoardError> {
    // clamp passes NaN through and random_bool panics on it
    let probability = if probability.is_finite() { probability.clamp(0.0, 1.0) } else { 0.0 };
    let picked: Vec<Coordinate> = grid
        .iter_cells()
        .map(|(at, _)| at)
        .filter(|_| engine.rng_mut().random_bool(probability))
        .collect();

    if picked.is_empty() {
        return Ok(GridEffect::Unchanged);
    }
    engine.clear_cells(grid, picked).map(GridEffect::Cleared)
}

/// Ties between colors go to the later palette entry.
fn magnet(grid: &mut Grid) -> Result<GridEffect, BoardError> {
    let counts = grid.color_counts();
    let color = Color::ALL.into_iter().fold(Color::ALL[0], |best, c| {
        if counts[c.index()] >= counts[best.index()] { c } else { best }
    });

    let mut cells = Vec::with_capacity(MAGNET_SPAN.len() * MAGNET_SPAN.len());
    for row in MAGNET_SPAN {
        for col in MAGNET_SPAN {
            let at = Coordinate::new(row, col);
            grid.set(at, Cell::Filled(color))?;
            cells.push(at);
        }
    }
    Ok(GridEffect::Recolored { color, cells })
}
