//! Headless batch play: many seeded games with a greedy player, in parallel

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use block_match::application::{GameConfig, GameSession, autoplay};
use block_match::logging;
use clap::Parser;
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Play seeded Block Match games with a greedy player")]
struct Args {
    /// Number of games
    #[arg(short, long, default_value_t = 200)]
    games: usize,

    /// Move limit per game
    #[arg(short, long, default_value_t = 100)]
    moves: usize,

    /// Seed of the first game; game i uses seed + i
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
struct GameResult {
    score: u64,
    level: u32,
    stars: u32,
    moves: usize,
    /// Ran out of groups before the move limit
    stuck: bool,
}

fn play_game(base: &GameConfig, seed: u64, move_limit: usize) -> Result<GameResult> {
    let config = GameConfig {
        seed: Some(seed),
        selection_delay: 0.0,
        ..base.clone()
    };
    let mut session = GameSession::new(config)?;
    session.new_game();

    let mut moves = 0;
    let mut stuck = false;
    while moves < move_limit {
        let Some(at) = autoplay::largest_group_origin(session.grid()) else {
            stuck = true;
            break;
        };
        session
            .select(at)
            .with_context(|| format!("game {seed}: selecting {at}"))?;
        if session.resolve_now()?.is_none() {
            bail!("game {seed}: selection at {at} did not resolve");
        }
        moves += 1;
    }

    let progress = session.progress();
    Ok(GameResult {
        score: progress.score,
        level: progress.level,
        stars: progress.stars,
        moves,
        stuck,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        logging::enable_verbose_logging();
    }
    let config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    println!("=== Block Match Simulation ===\n");
    println!("{} games, up to {} moves each, seeds {}..", args.games, args.moves, args.seed);

    let start = Instant::now();
    let results: Vec<GameResult> = (0..args.games as u64)
        .into_par_iter()
        .map(|i| play_game(&config, args.seed + i, args.moves))
        .collect::<Result<_>>()?;
    let elapsed = start.elapsed().as_secs_f64();

    let n = results.len() as f64;
    let total_moves: usize = results.iter().map(|r| r.moves).sum();
    let mean = |f: fn(&GameResult) -> f64| results.iter().map(f).sum::<f64>() / n;
    let best = results.iter().map(|r| r.score).max().unwrap_or(0);
    let stuck = results.iter().filter(|r| r.stuck).count();

    println!("\n{:>12} {:>12} {:>10} {:>10} {:>10}", "Mean score", "Best score", "Level", "Stars", "Stuck");
    println!("{:-<58}", "");
    println!(
        "{:>12.0} {:>12} {:>10.2} {:>10.2} {:>10}",
        mean(|r| r.score as f64),
        best,
        mean(|r| r.level as f64),
        mean(|r| r.stars as f64),
        stuck
    );

    println!("\n=== Throughput ===\n");
    println!(
        "{} moves in {:.2} ms ({:.0} moves/sec)",
        total_moves,
        elapsed * 1000.0,
        total_moves as f64 / elapsed.max(f64::EPSILON)
    );
    Ok(())
}
