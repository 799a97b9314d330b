// Domain layer - board engine
pub mod domain;

// Application layer - game session and settings
pub mod application;

pub mod logging;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BoardEngine, BoardError, Cell, Color, Coordinate, Grid, Group, PowerUp, ScoreDelta};
pub use application::{GameConfig, GameProgress, GameSession};
pub use ui::Button;
