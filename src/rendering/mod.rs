use macroquad::prelude::*;

use crate::application::{Feedback, GameSession};
use crate::domain::{Cell, Color as BlockColor};
use crate::ui::{
    BOARD_MARGIN, Button, ButtonAction, CELL_GAP, CELL_SIZE, PANEL_WIDTH, board_pixels,
    cell_to_screen, panel_x,
};

/// Screen color for a block
pub fn block_color(color: BlockColor) -> Color {
    match color {
        BlockColor::Red => Color::from_rgba(235, 64, 52, 255),
        BlockColor::Blue => Color::from_rgba(52, 120, 235, 255),
        BlockColor::Green => Color::from_rgba(60, 190, 90, 255),
        BlockColor::Yellow => Color::from_rgba(245, 210, 50, 255),
        BlockColor::Purple => Color::from_rgba(150, 80, 210, 255),
        BlockColor::Pink => Color::from_rgba(245, 130, 190, 255),
        BlockColor::Orange => Color::from_rgba(245, 145, 40, 255),
        BlockColor::Cyan => Color::from_rgba(60, 210, 220, 255),
    }
}

/// Mascot line for a feedback cue. `salt` picks among the variants.
pub fn mascot_line(feedback: Feedback, salt: u64) -> &'static str {
    let lines: &[&str] = match feedback {
        Feedback::Start => &["Let's play!", "Ready to match!", "Fun time!"],
        Feedback::Good => &["Great job!", "Awesome!", "Super!", "Wow!"],
        Feedback::Excellent | Feedback::LevelUp => &["Amazing!", "Fantastic!", "Incredible!", "Perfect!"],
        Feedback::NoMatch => &["Try a bigger group!", "Find two that touch!"],
        Feedback::PowerUp => &["Sparkle power!", "Whoosh!"],
    };
    lines[(salt % lines.len() as u64) as usize]
}

/// Learning-mode hint naming the group size that earns a star
pub fn learning_tip(bonus_group_size: usize) -> String {
    format!("Tip: groups of {bonus_group_size}+ earn a star")
}

/// Draw the 8x8 board, highlighting the group being cleared
pub fn draw_board(session: &GameSession) {
    let side = board_pixels();
    let frame = if session.is_frozen() {
        Color::from_rgba(120, 200, 255, 255)
    } else {
        Color::from_rgba(50, 50, 60, 255)
    };
    draw_rectangle(BOARD_MARGIN - 4.0, BOARD_MARGIN - 4.0, side + 8.0, side + 8.0, frame);

    let selected = session.selected_group();
    let block = CELL_SIZE - CELL_GAP;

    for (at, cell) in session.grid().iter_cells() {
        let (x, y) = cell_to_screen(at);
        let (x, y) = (x + CELL_GAP / 2.0, y + CELL_GAP / 2.0);

        match cell {
            Cell::Filled(color) => {
                let mut fill = block_color(color);
                if session.is_frozen() {
                    fill = Color::new(fill.b, fill.g, fill.r, fill.a);
                }
                draw_rectangle(x, y, block, block, fill);
            }
            Cell::Empty => draw_rectangle(x, y, block, block, Color::from_rgba(20, 20, 25, 255)),
        }

        if selected.is_some_and(|group| group.contains(at)) {
            draw_rectangle_lines(x, y, block, block, 4.0, WHITE);
        }
    }

    if !session.is_playing() {
        draw_rectangle(BOARD_MARGIN, BOARD_MARGIN, side, side, Color::from_rgba(0, 0, 0, 160));
        let text = "Press N or New Game";
        let size = measure_text(text, None, 32, 1.0);
        draw_text(
            text,
            BOARD_MARGIN + (side - size.width) / 2.0,
            BOARD_MARGIN + side / 2.0,
            32.0,
            WHITE,
        );
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the side panel: totals, mascot line, buttons, key help
pub fn draw_panel(session: &GameSession, buttons: &[(ButtonAction, Button)], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let progress = session.progress();
    let target = progress.level_target(session.config().level_score_step);
    let tx = px + 10.0;

    let labels = [
        ("Score:".to_string(), 30.0, 16.0, WHITE),
        (progress.score.to_string(), 55.0, 26.0, Color::from_rgba(0, 255, 150, 255)),
        (format!("Level {}  ({} to go)", progress.level, target.saturating_sub(progress.score)), 85.0, 15.0, GRAY),
        (format!("Stars: {}", progress.stars), 110.0, 18.0, Color::from_rgba(255, 215, 0, 255)),
        (
            if session.educational_mode() { "Learning: on".to_string() } else { "Learning: off".to_string() },
            135.0,
            14.0,
            GRAY,
        ),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, tx, *y, *size, *color);
    });

    let line = mascot_line(session.last_feedback(), progress.score / 10);
    draw_text_label(line, tx, 190.0, 22.0, Color::from_rgba(255, 179, 71, 255));
    if session.educational_mode() {
        let tip = learning_tip(session.config().bonus_group_size);
        draw_text_label(&tip, tx, 215.0, 12.0, GRAY);
    }

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let controls = [
        "N: New game",
        "L: Learn mode",
        "1/2/3: Power-ups",
        "D: Parents",
        "Esc: Menu",
    ];
    for (i, text) in controls.iter().enumerate() {
        draw_text_label(text, tx, 640.0 + i as f32 * 14.0, 12.0, GRAY);
    }
}

/// Parent dashboard: session time and totals
pub fn draw_dashboard(session: &GameSession) {
    let summary = session.summary();
    let (w, h) = (320.0, 180.0);
    let x = BOARD_MARGIN + (board_pixels() - w) / 2.0;
    let y = BOARD_MARGIN + (board_pixels() - h) / 2.0;

    draw_rectangle(x, y, w, h, Color::from_rgba(245, 245, 250, 240));
    draw_rectangle_lines(x, y, w, h, 3.0, DARKGRAY);

    let rows = [
        ("Parent Dashboard".to_string(), 24.0),
        (format!("Session time: {}", summary.clock()), 18.0),
        (format!("Total score: {}", summary.score), 18.0),
        (format!("Stars earned: {}", summary.stars), 18.0),
        (format!("Level reached: {}", summary.level), 18.0),
    ];
    for (i, (text, size)) in rows.iter().enumerate() {
        draw_text_label(text, x + 20.0, y + 36.0 + i as f32 * 30.0, *size, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_colors_are_distinct() {
        let colors: Vec<_> = BlockColor::ALL.iter().map(|&c| block_color(c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_mascot_line_wraps_salt() {
        assert_eq!(mascot_line(Feedback::Start, 0), "Let's play!");
        assert_eq!(mascot_line(Feedback::Start, 3), "Let's play!");
        assert_eq!(mascot_line(Feedback::Good, 5), "Awesome!");
    }

    #[test]
    fn test_learning_tip_follows_config() {
        assert_eq!(learning_tip(5), "Tip: groups of 5+ earn a star");
        assert_eq!(learning_tip(7), "Tip: groups of 7+ earn a star");
    }
}
