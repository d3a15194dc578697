//! Typeshot - an arcade typing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, spawning, scoring, timer, particles)
//! - `renderer`: Render contract and scene drawing
//! - `platform`: Frontend abstraction (terminal and headless)
//! - `game`: Frame loop orchestrator
//! - `tuning`: Game balance values

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{GameError, TuningError};
pub use game::{Game, SessionSummary};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (world units)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Target disk radius
    pub const TARGET_RADIUS: f32 = 40.0;
    /// Horizontal drift speed (world units per tick)
    pub const TARGET_SPEED: f32 = 1.2;
    /// Vertical speed at spawn (targets hover by default)
    pub const TARGET_FALL_SPEED: f32 = 0.0;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Ticks between automatic spawns
    pub const SPAWN_INTERVAL_TICKS: u32 = 60;

    /// Countdown clock (seconds)
    pub const INITIAL_TIME_SECS: u32 = 30;
    pub const TIME_PER_HIT_SECS: u32 = 2;
    pub const TIME_PENALTY_SECS: u32 = 1;

    /// Score awarded per character of a cleared word
    pub const POINTS_PER_CHAR: u64 = 10;

    /// Explosion bursts
    pub const HIT_BURST_PARTICLES: usize = 10;
    pub const HIT_PARTICLE_LIFE: (u32, u32) = (10, 20);
    pub const MISS_BURST_PARTICLES: usize = 5;
    pub const MISS_PARTICLE_LIFE: (u32, u32) = (5, 10);
    /// Max per-tick particle drift on each axis
    pub const PARTICLE_JITTER: u32 = 3;

    /// How long the final score stays on screen
    pub const GAME_OVER_HOLD_MS: u64 = 3000;

    pub const WORD_POOL: [&str; 8] = [
        "pygame", "target", "shoot", "code", "type", "hit", "key", "fun",
    ];
}
