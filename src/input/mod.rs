use macroquad::prelude::*;

use crate::application::{GameSession, Selection, SessionError};
use crate::domain::PowerUp;
use crate::ui::{Button, ButtonAction, ViewState, screen_to_cell};
use crate::vlog;

/// Left click on the board selects the group under the cursor
pub fn handle_board_click(session: &mut GameSession, mouse_pos: (f32, f32)) -> Option<Selection> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    let at = screen_to_cell(mouse_pos.0, mouse_pos.1)?;

    match session.select(at) {
        Ok(selection) => Some(selection),
        // Clicks while resolving or on the menu are simply dropped
        Err(SessionError::Busy | SessionError::NotPlaying) => None,
        Err(err) => {
            vlog!("[input] select {at} failed: {err}");
            None
        }
    }
}

fn trigger(session: &mut GameSession, view: &mut ViewState, action: ButtonAction) {
    match action {
        ButtonAction::NewGame => {
            view.show_dashboard = false;
            session.new_game();
        }
        ButtonAction::LearnMode => session.toggle_educational_mode(),
        ButtonAction::PowerUp(power_up) => {
            if let Err(err) = session.activate_power_up(power_up) {
                vlog!("[input] {} ignored: {err}", power_up.name());
            }
        }
        ButtonAction::Dashboard => view.show_dashboard = !view.show_dashboard,
    }
}

/// Keyboard shortcuts mirror the panel buttons
pub fn process_keyboard_input(session: &mut GameSession, view: &mut ViewState) {
    let actions = [
        (KeyCode::N, ButtonAction::NewGame),
        (KeyCode::L, ButtonAction::LearnMode),
        (KeyCode::Key1, ButtonAction::PowerUp(PowerUp::RainbowClear)),
        (KeyCode::Key2, ButtonAction::PowerUp(PowerUp::ColorMagnet)),
        (KeyCode::Key3, ButtonAction::PowerUp(PowerUp::Freeze)),
        (KeyCode::D, ButtonAction::Dashboard),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            trigger(session, view, action);
        }
    }

    if is_key_pressed(KeyCode::Escape) {
        if view.show_dashboard {
            view.show_dashboard = false;
        } else {
            session.stop();
        }
    }
}

pub fn process_button_clicks(
    session: &mut GameSession,
    view: &mut ViewState,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) {
    if let Some((action, _)) = buttons.iter().find(|(_, btn)| btn.is_clicked(mouse_pos)) {
        trigger(session, view, *action);
    }
}
