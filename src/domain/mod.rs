mod cell;
mod engine;
mod error;
mod grid;
mod group;
mod power_up;
mod score;

pub use cell::{Cell, Color};
pub use engine::{BoardEngine, ClearOutcome, apply_gravity};
pub use error::BoardError;
pub use grid::{BOARD_SIZE, Coordinate, Grid};
pub use group::{Group, MIN_SELECTABLE, flood_fill};
pub use power_up::{GridEffect, MAGNET_SPAN, PowerUp, PowerUpTuning};
pub use score::{BONUS_GROUP_SIZE, ScoreDelta};
