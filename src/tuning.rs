//! Game balance values
//!
//! Defaults come from [`crate::consts`]. The binary always plays with the
//! defaults; custom values exist so tests and embedders can build smaller or
//! faster sessions.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Balance values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub width: f32,
    pub height: f32,
    pub target_radius: f32,
    /// Horizontal speed magnitude at spawn (world units per tick)
    pub target_speed: f32,
    /// Downward speed at spawn; zero keeps targets hovering
    pub target_fall_speed: f32,
    pub tick_rate: u32,
    pub spawn_interval_ticks: u32,
    pub initial_time_secs: u32,
    pub time_per_hit_secs: u32,
    pub time_penalty_secs: u32,
    pub points_per_char: u64,
    pub hit_burst_particles: usize,
    pub miss_burst_particles: usize,
    /// Inclusive lifetime range for hit-burst particles (ticks)
    pub hit_particle_life: (u32, u32),
    pub miss_particle_life: (u32, u32),
    /// Max per-tick particle drift on each axis
    pub particle_jitter: u32,
    pub game_over_hold_ms: u64,
    pub words: Vec<String>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            target_radius: TARGET_RADIUS,
            target_speed: TARGET_SPEED,
            target_fall_speed: TARGET_FALL_SPEED,
            tick_rate: TICK_RATE,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            initial_time_secs: INITIAL_TIME_SECS,
            time_per_hit_secs: TIME_PER_HIT_SECS,
            time_penalty_secs: TIME_PENALTY_SECS,
            points_per_char: POINTS_PER_CHAR,
            hit_burst_particles: HIT_BURST_PARTICLES,
            miss_burst_particles: MISS_BURST_PARTICLES,
            hit_particle_life: HIT_PARTICLE_LIFE,
            miss_particle_life: MISS_PARTICLE_LIFE,
            particle_jitter: PARTICLE_JITTER,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
            words: WORD_POOL.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Json(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.words.is_empty() {
            return Err(TuningError::EmptyWordPool);
        }
        for (index, word) in self.words.iter().enumerate() {
            if word.is_empty() {
                return Err(TuningError::EmptyWord { index });
            }
            // The guess buffer only ever holds lowercase alphanumerics
            if !word
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                return Err(TuningError::UntypeableWord { word: word.clone() });
            }
        }
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("target_radius", self.target_radius)?;
        check_non_negative("target_speed", self.target_speed)?;
        check_non_negative("target_fall_speed", self.target_fall_speed)?;
        if self.tick_rate == 0 {
            return Err(TuningError::ZeroTickRate);
        }
        if self.spawn_interval_ticks == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }
        let diameter = self.target_radius * 2.0;
        if self.width <= diameter || self.height <= diameter {
            return Err(TuningError::FieldTooSmall {
                width: self.width,
                height: self.height,
                radius: self.target_radius,
            });
        }
        Ok(())
    }

    /// Starting countdown in ticks
    pub fn initial_timer_ticks(&self) -> i64 {
        self.secs_to_ticks(self.initial_time_secs)
    }

    /// Ticks added per cleared target
    pub fn hit_bonus_ticks(&self) -> i64 {
        self.secs_to_ticks(self.time_per_hit_secs)
    }

    /// Ticks removed per missed target
    pub fn miss_penalty_ticks(&self) -> i64 {
        self.secs_to_ticks(self.time_penalty_secs)
    }

    fn secs_to_ticks(&self, secs: u32) -> i64 {
        i64::from(secs) * i64::from(self.tick_rate)
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::InvalidValue {
            field,
            requirement: "positive",
            value,
        })
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::InvalidValue {
            field,
            requirement: "non-negative",
            value,
        })
    }
}
