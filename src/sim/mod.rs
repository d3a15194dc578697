//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod guess;
pub mod particle;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod target;
pub mod tick;

pub use guess::Guess;
pub use particle::{BurstKind, Particle, ParticleField};
pub use scoring::check_for_hit;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, Session};
pub use target::Target;
pub use tick::{InputEvent, TickInput, apply_input, tick};
