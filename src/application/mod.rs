pub mod autoplay;
mod config;
mod progress;
mod session;

pub use config::{ConfigError, GameConfig};
pub use progress::GameProgress;
pub use session::{
    BoardPhase, Feedback, GameSession, PowerUpReport, Selection, SessionError, SessionSummary,
    TurnReport,
};
