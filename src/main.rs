use std::path::PathBuf;

use anyhow::Context;
use block_match::{
    GameConfig, GameSession, input, logging, rendering,
    ui::{self, ViewState},
    vlog,
};
use clap::Parser;
use macroquad::prelude::*;

/// Block Match: clear connected groups of colored blocks
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed board seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with learning mode on
    #[arg(long)]
    learn: bool,

    /// Log session events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log session events to a file instead
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Block Match".to_owned(),
        window_width: 800,
        window_height: 720,
        window_resizable: false,
        ..Default::default()
    }
}

fn setup(args: &Args) -> anyhow::Result<GameConfig> {
    if let Some(path) = &args.log_file {
        logging::init_log_file(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
    } else if args.verbose {
        logging::enable_verbose_logging();
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.educational_mode |= args.learn;
    Ok(config)
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    let config = match setup(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };
    vlog!("[main] starting with {:?}", config);

    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    let mut view = ViewState::default();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&session, view);

        input::process_button_clicks(&mut session, &mut view, &buttons, mouse_pos);
        input::process_keyboard_input(&mut session, &mut view);
        if !view.show_dashboard {
            input::handle_board_click(&mut session, mouse_pos);
        }

        if let Err(err) = session.tick(get_frame_time()) {
            vlog!("[main] clear failed: {err}");
        }

        clear_background(Color::from_rgba(15, 15, 20, 255));
        rendering::draw_board(&session);
        rendering::draw_panel(&session, &buttons, mouse_pos);
        if view.show_dashboard {
            rendering::draw_dashboard(&session);
        }

        next_frame().await;
    }
}
