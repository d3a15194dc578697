//! Periodic target spawning

use glam::Vec2;
use rand::Rng;

use super::target::Target;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Counts ticks and emits a fresh target every `interval` ticks
#[derive(Debug, Clone)]
pub struct Spawner {
    words: Vec<String>,
    interval: u32,
    countdown: u32,
    bounds: Vec2,
    radius: f32,
    speed: f32,
    fall_speed: f32,
    next_id: u32,
}

impl Spawner {
    /// Build a spawner from validated tuning. Fails on an empty or untypeable pool.
    pub fn new(tuning: &Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            words: tuning.words.clone(),
            interval: tuning.spawn_interval_ticks,
            countdown: 0,
            bounds: Vec2::new(tuning.width, tuning.height),
            radius: tuning.target_radius,
            speed: tuning.target_speed,
            fall_speed: tuning.target_fall_speed,
            next_id: 1,
        })
    }

    /// Advance the countdown; returns a new target when it reaches the interval
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<Target> {
        self.countdown += 1;
        if self.countdown < self.interval {
            return None;
        }
        self.countdown = 0;
        Some(self.spawn(rng))
    }

    /// Ticks left before the next spawn (as shown in the HUD)
    pub fn ticks_until_next(&self) -> u32 {
        self.interval.saturating_sub(self.countdown)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn spawn<R: Rng>(&mut self, rng: &mut R) -> Target {
        let word = &self.words[rng.random_range(0..self.words.len())];

        // Whole-unit positions: anywhere horizontally, upper half vertically
        let r = self.radius.ceil() as i32;
        let max_x = ((self.bounds.x - self.radius).floor() as i32).max(r);
        let max_y = ((self.bounds.y / 2.0).floor() as i32).max(r);
        let x = rng.random_range(r..=max_x) as f32;
        let y = rng.random_range(r..=max_y) as f32;

        let vx = if rng.random_bool(0.5) {
            self.speed
        } else {
            -self.speed
        };

        let id = self.next_id;
        self.next_id += 1;
        Target::new(
            id,
            word.clone(),
            Vec2::new(x, y),
            Vec2::new(vx, self.fall_speed),
            self.radius,
        )
    }
}
