//! Word targets
//!
//! A target is a disk drifting across the field, labeled with the word the
//! player must type to clear it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One live on-screen word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Word to type (fixed for the target's lifetime)
    pub word: String,
    pub pos: Vec2,
    /// Velocity in world units per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Characters of the current guess that agree with `word` at the same index
    pub typed_so_far: String,
    /// Cleared by a hit or miss; dead targets are compacted out at the end of a pass
    pub alive: bool,
}

impl Target {
    pub fn new(id: u32, word: impl Into<String>, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            word: word.into(),
            pos,
            vel,
            radius,
            typed_so_far: String::new(),
            alive: true,
        }
    }

    /// Advance one tick and bounce off the side and top edges of a `bounds` field.
    ///
    /// Crossing an edge clamps the disk back inside the margin and points the
    /// velocity away from that edge, so a crossing flips the sign exactly once.
    ///
    /// Vertical motion is asymmetric: the top edge bounces, but
    /// the bottom edge is the miss line. A falling target keeps going past
    /// `bounds.y - radius` until [`Target::has_fallen_past`] reports it and
    /// the session removes it as a miss. Targets only fall when
    /// `Tuning::target_fall_speed` is non-zero.
    pub fn update(&mut self, bounds: Vec2) {
        self.pos += self.vel;

        let r = self.radius;
        if self.pos.x <= r {
            self.pos.x = r;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x >= bounds.x - r {
            self.pos.x = bounds.x - r;
            self.vel.x = -self.vel.x.abs();
        }

        if self.pos.y <= r && self.vel.y < 0.0 {
            self.pos.y = r;
            self.vel.y = -self.vel.y;
        }
    }

    /// Rebuild `typed_so_far` from the current guess.
    ///
    /// Every index where guess and word agree contributes its character, even
    /// after an earlier mismatch: "pxg" against "pygame" shows "pg".
    pub fn recompute_typed_prefix(&mut self, guess: &str) {
        self.typed_so_far.clear();
        self.typed_so_far.extend(
            self.word
                .chars()
                .zip(guess.chars())
                .filter(|(w, g)| w == g)
                .map(|(w, _)| w),
        );
    }

    /// Exact, case-insensitive match against the whole word
    pub fn matches(&self, guess: &str) -> bool {
        !guess.is_empty() && self.word.eq_ignore_ascii_case(guess)
    }

    /// True once the whole disk has dropped below `floor`
    pub fn has_fallen_past(&self, floor: f32) -> bool {
        self.pos.y > floor + self.radius
    }
}
