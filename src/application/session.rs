use std::fmt;

use rand::{Rng, rngs::StdRng};

use crate::domain::{
    BoardEngine, BoardError, ClearOutcome, Coordinate, Grid, GridEffect, Group, PowerUp, ScoreDelta,
};
use crate::vlog;

use super::{ConfigError, GameConfig, GameProgress};

/// Whether the board accepts input.
/// A selected group waits out the highlight delay in `Resolving`; nothing
/// else may touch the grid until it has been cleared.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardPhase {
    Idle,
    Resolving { group: Group, remaining: f32 },
}

/// Outcome of clicking a block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Empty cell or a lone block; nothing happens
    NoMatch,
    Selected { size: usize },
}

/// Cue for the front-end after each event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Start,
    Good,
    Excellent,
    NoMatch,
    LevelUp,
    PowerUp,
}

/// Everything a completed clear changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub delta: ScoreDelta,
    pub star_awarded: bool,
    pub leveled_up: bool,
    pub feedback: Feedback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerUpReport {
    pub effect: GridEffect,
    /// Set when the power-up cleared blocks and scored
    pub turn: Option<TurnReport>,
}

/// Session totals for the parent dashboard
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSummary {
    pub elapsed_secs: f32,
    pub score: u64,
    pub level: u32,
    pub stars: u32,
}

impl SessionSummary {
    /// Elapsed time as `m:ss`
    pub fn clock(&self) -> String {
        let total = self.elapsed_secs.max(0.0) as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No game has been started
    NotPlaying,
    /// A selected group is still being resolved
    Busy,
    Board(BoardError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotPlaying => write!(f, "no game in progress"),
            SessionError::Busy => write!(f, "board is busy resolving a clear"),
            SessionError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

/// GameSession owns one game: the grid, the engine that mutates it, the
/// running totals and the idle/resolving phase.
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    engine: BoardEngine<R>,
    grid: Grid,
    progress: GameProgress,
    phase: BoardPhase,
    educational_mode: bool,
    is_playing: bool,
    elapsed: f32,
    frozen_remaining: f32,
    last_feedback: Feedback,
}

impl GameSession<StdRng> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let engine = match config.seed {
            Some(seed) => BoardEngine::seeded(seed),
            None => BoardEngine::from_entropy(),
        };
        Self::with_engine(config, engine)
    }
}

impl<R: Rng> GameSession<R> {
    /// Rejects a config that fails `GameConfig::validate`
    pub fn with_engine(
        config: GameConfig,
        mut engine: BoardEngine<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = engine.initialize();
        Ok(Self {
            educational_mode: config.educational_mode,
            config,
            engine,
            grid,
            progress: GameProgress::new(),
            phase: BoardPhase::Idle,
            is_playing: false,
            elapsed: 0.0,
            frozen_remaining: 0.0,
            last_feedback: Feedback::Start,
        })
    }

    /// Fresh board and zeroed totals. Learning mode is kept.
    pub fn new_game(&mut self) {
        self.grid = self.engine.initialize();
        self.progress = GameProgress::new();
        self.phase = BoardPhase::Idle;
        self.is_playing = true;
        self.elapsed = 0.0;
        self.frozen_remaining = 0.0;
        self.last_feedback = Feedback::Start;
        vlog!("[session] new game");
    }

    /// Leave the game; the board stays visible but takes no input
    pub fn stop(&mut self) {
        self.is_playing = false;
        self.phase = BoardPhase::Idle;
        self.frozen_remaining = 0.0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn progress(&self) -> GameProgress {
        self.progress
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> &BoardPhase {
        &self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, BoardPhase::Resolving { .. })
    }

    /// Group currently highlighted for clearing
    pub fn selected_group(&self) -> Option<&Group> {
        match &self.phase {
            BoardPhase::Resolving { group, .. } => Some(group),
            BoardPhase::Idle => None,
        }
    }

    pub fn educational_mode(&self) -> bool {
        self.educational_mode
    }

    pub fn toggle_educational_mode(&mut self) {
        self.educational_mode = !self.educational_mode;
        vlog!("[session] learning mode {}", if self.educational_mode { "on" } else { "off" });
    }

    pub fn last_feedback(&self) -> Feedback {
        self.last_feedback
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_remaining > 0.0
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            elapsed_secs: self.elapsed,
            score: self.progress.score,
            level: self.progress.level,
            stars: self.progress.stars,
        }
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if !self.is_playing {
            return Err(SessionError::NotPlaying);
        }
        if self.is_busy() {
            vlog!("[session] input rejected while resolving");
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    /// Select the group under `at`. A selectable group starts resolving;
    /// it is cleared once the highlight delay has elapsed in `tick`.
    pub fn select(&mut self, at: Coordinate) -> Result<Selection, SessionError> {
        self.ensure_idle()?;

        match self.engine.find_group(&self.grid, at)? {
            Some(group) if group.is_selectable() => {
                let size = group.len();
                self.phase = BoardPhase::Resolving {
                    group,
                    remaining: self.config.selection_delay,
                };
                Ok(Selection::Selected { size })
            }
            _ => {
                self.last_feedback = Feedback::NoMatch;
                Ok(Selection::NoMatch)
            }
        }
    }

    /// Advance the session clock. Returns the report of a clear that
    /// finished during this frame.
    pub fn tick(&mut self, dt: f32) -> Result<Option<TurnReport>, SessionError> {
        if !self.is_playing {
            return Ok(None);
        }
        self.elapsed += dt;
        self.frozen_remaining = (self.frozen_remaining - dt).max(0.0);

        let BoardPhase::Resolving { remaining, .. } = &mut self.phase else {
            return Ok(None);
        };
        *remaining -= dt;
        if *remaining > 0.0 {
            return Ok(None);
        }
        self.resolve_now()
    }

    /// Clear the selected group immediately, skipping what is left of the delay
    pub fn resolve_now(&mut self) -> Result<Option<TurnReport>, SessionError> {
        let BoardPhase::Resolving { group, .. } = std::mem::replace(&mut self.phase, BoardPhase::Idle)
        else {
            return Ok(None);
        };

        let outcome = self.engine.resolve_clear(&mut self.grid, &group)?;
        Ok(Some(self.apply_clear(outcome)))
    }

    fn apply_clear(&mut self, outcome: ClearOutcome) -> TurnReport {
        let size = outcome.delta.group_size;
        let reached_bonus = size >= self.config.bonus_group_size;
        let star_awarded = self.educational_mode && reached_bonus;

        self.progress.record_clear(outcome.delta, star_awarded);
        let leveled_up = self
            .progress
            .check_level_up(self.config.level_score_step, self.config.level_up_stars);

        let feedback = if leveled_up {
            Feedback::LevelUp
        } else if reached_bonus {
            Feedback::Excellent
        } else {
            Feedback::Good
        };
        self.last_feedback = feedback;

        vlog!(
            "[session] cleared {} blocks for {} points (score {}, level {}, stars {})",
            size,
            outcome.delta.points,
            self.progress.score,
            self.progress.level,
            self.progress.stars
        );
        if leveled_up {
            vlog!("[session] reached level {}", self.progress.level);
        }

        TurnReport {
            delta: outcome.delta,
            star_awarded,
            leveled_up,
            feedback,
        }
    }

    pub fn activate_power_up(&mut self, power_up: PowerUp) -> Result<PowerUpReport, SessionError> {
        self.ensure_idle()?;

        let effect = power_up.apply_to(&mut self.grid, &mut self.engine, self.config.power_up_tuning())?;
        vlog!("[session] power-up {} -> {:?}", power_up.name(), effect);

        let turn = match &effect {
            GridEffect::Cleared(outcome) => Some(self.apply_clear(*outcome)),
            GridEffect::Frozen => {
                self.frozen_remaining = self.config.freeze_duration;
                None
            }
            GridEffect::Recolored { .. } | GridEffect::Unchanged => None,
        };
        if turn.is_none_or(|t| !t.leveled_up) {
            self.last_feedback = Feedback::PowerUp;
        }

        Ok(PowerUpReport { effect, turn })
    }
}
