//! Typeshot entry point
//!
//! Sets up logging, takes over the terminal and runs one session.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use typeshot::platform::TerminalFrontend;
use typeshot::{Game, GameError, Tuning};

const WINDOW_TITLE: &str = "Target Shooting Typing Game";

/// The terminal owns stdout/stderr while playing, so logs go to the file in
/// `TYPESHOT_LOG` when set
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match std::env::var("TYPESHOT_LOG").ok().map(File::create) {
        Some(Ok(file)) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Some(Err(e)) => {
            eprintln!("typeshot: cannot open log file: {e}");
            builder.filter_level(log::LevelFilter::Error);
        }
        None => {
            builder.filter_level(log::LevelFilter::Error);
            // RUST_LOG still wins when set explicitly
            builder.parse_env("RUST_LOG");
        }
    }
    builder.init();
}

fn pick_seed() -> u64 {
    std::env::var("TYPESHOT_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
}

fn main() -> Result<(), GameError> {
    init_logging();

    let tuning = Tuning::default();
    let seed = pick_seed();
    log::info!("Typeshot starting (seed {seed})");

    let game = Game::new(tuning.clone(), seed)?;
    let summary = {
        let mut frontend =
            TerminalFrontend::new(glam::Vec2::new(tuning.width, tuning.height), WINDOW_TITLE)?;
        game.run(&mut frontend)?
        // Frontend drops here and restores the terminal before we print
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
