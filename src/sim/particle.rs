//! Explosion particles
//!
//! Purely cosmetic: bursts spawn on hits and misses, then diffuse and shrink.
//! Nothing here feeds back into score or timer.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single decaying dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Ticks left to live; drawn once per remaining tick
    pub life: u32,
}

impl Particle {
    /// Rendered radius shrinks with remaining life
    pub fn draw_radius(&self) -> f32 {
        (self.life / 2) as f32
    }
}

/// Which event spawned a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Hit,
    Miss,
}

/// All live particles, in spawn/requeue order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles at `at` with lifetimes drawn from `life` (inclusive)
    pub fn burst<R: Rng>(&mut self, rng: &mut R, at: Vec2, count: usize, life: (u32, u32)) {
        let (lo, hi) = (life.0.min(life.1), life.0.max(life.1));
        self.particles.extend((0..count).map(|_| Particle {
            pos: at,
            life: rng.random_range(lo..=hi),
        }));
    }

    /// Draw every live particle, then requeue the survivors one tick older
    /// with a small random drift.
    ///
    /// A particle spawned with life `L` is drawn exactly `L` times.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, jitter: u32, mut draw: impl FnMut(&Particle)) {
        let jitter = i64::from(jitter);
        let current = std::mem::take(&mut self.particles);
        for particle in current {
            if particle.life == 0 {
                continue;
            }
            draw(&particle);
            if particle.life > 1 {
                let dx = rng.random_range(-jitter..=jitter) as f32;
                let dy = rng.random_range(-jitter..=jitter) as f32;
                self.particles.push(Particle {
                    pos: particle.pos + Vec2::new(dx, dy),
                    life: particle.life - 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_lifetimes_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ParticleField::new();
        field.burst(&mut rng, Vec2::new(100.0, 100.0), 10, (10, 20));
        assert_eq!(field.len(), 10);
        assert!(field.particles.iter().all(|p| (10..=20).contains(&p.life)));
        assert!(field.particles.iter().all(|p| p.pos == Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_particle_drawn_exactly_life_times() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::new();
        field.particles.push(Particle {
            pos: Vec2::ZERO,
            life: 7,
        });

        let mut draws = Vec::new();
        for _ in 0..20 {
            field.tick(&mut rng, 3, |p| draws.push(p.life));
        }
        assert_eq!(draws, vec![7, 6, 5, 4, 3, 2, 1]);
        assert!(field.is_empty());
    }

    #[test]
    fn test_dead_particle_never_drawn() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::new();
        field.particles.push(Particle {
            pos: Vec2::ZERO,
            life: 0,
        });
        let mut drawn = 0;
        field.tick(&mut rng, 3, |_| drawn += 1);
        assert_eq!(drawn, 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_jitter_bounded() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut field = ParticleField::new();
        field.burst(&mut rng, Vec2::new(50.0, 50.0), 32, (5, 5));
        field.tick(&mut rng, 3, |_| {});
        for p in &field.particles {
            assert_eq!(p.life, 4);
            assert!((p.pos.x - 50.0).abs() <= 3.0);
            assert!((p.pos.y - 50.0).abs() <= 3.0);
        }
    }

    #[test]
    fn test_max_jitter_does_not_overflow() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ParticleField::new();
        field.burst(&mut rng, Vec2::ZERO, 4, (3, 3));
        field.tick(&mut rng, u32::MAX, |_| {});
        assert_eq!(field.len(), 4);
        assert!(field.particles.iter().all(|p| p.pos.x.abs() <= u32::MAX as f32));
    }

    #[test]
    fn test_draw_radius_shrinks() {
        let p = Particle {
            pos: Vec2::ZERO,
            life: 15,
        };
        assert_eq!(p.draw_radius(), 7.0);
        let p = Particle { life: 1, ..p };
        assert_eq!(p.draw_radius(), 0.0);
    }
}
