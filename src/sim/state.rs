//! Session state and core simulation types
//!
//! Everything a running session mutates lives on [`Session`]; there is no
//! global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::{BurstKind, ParticleField};
use super::spawner::Spawner;
use super::target::Target;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Clock is running
    Running,
    /// Clock ran out; terminal
    GameOver,
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, word: String },
    Hit { id: u32, word: String, points: u64, bonus_ticks: i64 },
    Missed { id: u32, word: String, penalty_ticks: i64 },
    QuitRequested,
    GameOver { score: u64 },
}

/// One play session
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u64,
    /// Ticks left on the clock; may dip below zero for the tick that ends the game
    pub timer_ticks: i64,
    pub phase: GamePhase,
    /// Live targets in spawn order
    pub targets: Vec<Target>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleField,
    pub spawner: Spawner,
    pub hits: u32,
    pub misses: u32,
    pub ticks_elapsed: u64,
}

impl Session {
    /// Start a session with the given balance values and seed
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        let spawner = Spawner::new(&tuning)?;
        Ok(Self {
            timer_ticks: tuning.initial_timer_ticks(),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: GamePhase::Running,
            targets: Vec::new(),
            particles: ParticleField::new(),
            spawner,
            hits: 0,
            misses: 0,
            ticks_elapsed: 0,
        })
    }

    /// Playing field size
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.tuning.width, self.tuning.height)
    }

    /// Count one tick off the clock
    pub fn tick_timer(&mut self) {
        self.timer_ticks -= 1;
    }

    /// Remove every target that dropped below the field, charging the time penalty
    /// and spawning a miss burst on the bottom edge for each.
    pub fn check_misses(&mut self) -> Vec<GameEvent> {
        let floor = self.tuning.height;
        let penalty = self.tuning.miss_penalty_ticks();
        let mut events = Vec::new();
        let mut bursts = Vec::new();

        for target in self.targets.iter_mut().filter(|t| t.alive) {
            if target.has_fallen_past(floor) {
                target.alive = false;
                bursts.push(Vec2::new(target.pos.x, floor));
                events.push(GameEvent::Missed {
                    id: target.id,
                    word: target.word.clone(),
                    penalty_ticks: penalty,
                });
            }
        }
        self.targets.retain(|t| t.alive);

        self.timer_ticks -= penalty * bursts.len() as i64;
        self.misses += bursts.len() as u32;
        for at in bursts {
            self.spawn_burst(BurstKind::Miss, at);
        }
        events
    }

    /// True once the clock has run out
    pub fn is_game_over(&self) -> bool {
        self.timer_ticks <= 0
    }

    /// Whole seconds left for display (floored, never negative)
    pub fn time_left_secs(&self) -> i64 {
        self.timer_ticks
            .div_euclid(i64::from(self.tuning.tick_rate))
            .max(0)
    }

    pub fn spawn_burst(&mut self, kind: BurstKind, at: Vec2) {
        let (count, life) = match kind {
            BurstKind::Hit => (self.tuning.hit_burst_particles, self.tuning.hit_particle_life),
            BurstKind::Miss => (
                self.tuning.miss_burst_particles,
                self.tuning.miss_particle_life,
            ),
        };
        self.particles.burst(&mut self.rng, at, count, life);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling(id: u32, word: &str, x: f32, y: f32) -> Target {
        Target::new(id, word, Vec2::new(x, y), Vec2::new(0.0, 1.0), 40.0)
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(Tuning::default(), 5).expect("valid tuning");
        assert_eq!(session.score, 0);
        assert_eq!(session.timer_ticks, 1800);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.time_left_secs(), 30);
        assert!(session.targets.is_empty());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_new_session_rejects_bad_tuning() {
        let tuning = Tuning {
            words: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            Session::new(tuning, 0),
            Err(TuningError::EmptyWordPool)
        ));
    }

    #[test]
    fn test_check_misses_penalizes_and_bursts() {
        let mut session = Session::new(Tuning::default(), 5).expect("valid tuning");
        session.targets.push(falling(1, "code", 100.0, 641.0));
        session.targets.push(falling(2, "key", 200.0, 640.0)); // exactly on the line
        session.targets.push(falling(3, "fun", 300.0, 700.0));

        let events = session.check_misses();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], GameEvent::Missed { id: 1, penalty_ticks: 60, .. }));
        assert!(matches!(&events[1], GameEvent::Missed { id: 3, .. }));
        assert_eq!(session.targets.len(), 1);
        assert_eq!(session.targets[0].id, 2);
        assert_eq!(session.timer_ticks, 1800 - 120);
        assert_eq!(session.misses, 2);

        // Five particles per miss, all on the bottom edge
        assert_eq!(session.particles.len(), 10);
        assert!(session.particles.particles.iter().all(|p| p.pos.y == 600.0));
        assert!(
            session
                .particles
                .particles
                .iter()
                .all(|p| (5..=10).contains(&p.life))
        );
    }

    #[test]
    fn test_burst_settings_come_from_tuning() {
        let tuning = Tuning {
            hit_burst_particles: 3,
            hit_particle_life: (2, 2),
            miss_burst_particles: 4,
            miss_particle_life: (7, 7),
            ..Default::default()
        };
        let mut session = Session::new(tuning, 5).expect("valid tuning");

        session.spawn_burst(BurstKind::Hit, Vec2::new(10.0, 10.0));
        session.spawn_burst(BurstKind::Miss, Vec2::new(20.0, 600.0));
        let lives: Vec<u32> = session.particles.particles.iter().map(|p| p.life).collect();
        assert_eq!(lives, vec![2, 2, 2, 7, 7, 7, 7]);
    }

    #[test]
    fn test_time_left_floors_and_clamps() {
        let mut session = Session::new(Tuning::default(), 5).expect("valid tuning");
        session.timer_ticks = 119;
        assert_eq!(session.time_left_secs(), 1);
        session.timer_ticks = 0;
        assert_eq!(session.time_left_secs(), 0);
        assert!(session.is_game_over());
        session.timer_ticks = -61;
        assert_eq!(session.time_left_secs(), 0);
    }
}
