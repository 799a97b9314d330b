mod button;

pub use button::Button;

use macroquad::prelude::screen_width;

use crate::application::GameSession;
use crate::domain::{BOARD_SIZE, Coordinate, PowerUp};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 64.0;
pub const CELL_GAP: f32 = 4.0;
pub const BOARD_MARGIN: f32 = 24.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Top-left pixel of a board cell
pub fn cell_to_screen(at: Coordinate) -> (f32, f32) {
    (
        BOARD_MARGIN + at.col as f32 * CELL_SIZE,
        BOARD_MARGIN + at.row as f32 * CELL_SIZE,
    )
}

/// Board cell under a screen position, if any
pub fn screen_to_cell(x: f32, y: f32) -> Option<Coordinate> {
    let gx = (x - BOARD_MARGIN) / CELL_SIZE;
    let gy = (y - BOARD_MARGIN) / CELL_SIZE;
    if gx < 0.0 || gy < 0.0 {
        return None;
    }
    let at = Coordinate::new(gy as usize, gx as usize);
    at.in_bounds().then_some(at)
}

pub fn board_pixels() -> f32 {
    BOARD_SIZE as f32 * CELL_SIZE
}

/// Front-end state that is not part of the game
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub show_dashboard: bool,
}

/// What a panel button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    NewGame,
    LearnMode,
    PowerUp(PowerUp),
    Dashboard,
}

/// Panel buttons for the current session state
pub fn create_buttons(session: &GameSession, view: ViewState) -> Vec<(ButtonAction, Button)> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    let idle = session.is_playing() && !session.is_busy();

    let mut buttons = vec![
        (
            ButtonAction::NewGame,
            Button::new(px, 300.0, width, BUTTON_HEIGHT, "New Game"),
        ),
        (
            ButtonAction::LearnMode,
            Button::new(px, 350.0, width, BUTTON_HEIGHT, "Learn Mode")
                .with_active(session.educational_mode()),
        ),
    ];
    for (i, power_up) in PowerUp::ALL.into_iter().enumerate() {
        buttons.push((
            ButtonAction::PowerUp(power_up),
            Button::new(px, 410.0 + i as f32 * 50.0, width, BUTTON_HEIGHT, power_up.name())
                .with_enabled(idle),
        ));
    }
    buttons.push((
        ButtonAction::Dashboard,
        Button::new(px, 570.0, width, BUTTON_HEIGHT, "Parents")
            .with_active(view.show_dashboard),
    ));
    buttons
}
