//! Frame loop orchestrator
//!
//! Owns the session and the guess buffer, and runs one frame at a time
//! against a [`Frontend`]: clear, input, simulation, particles, targets, HUD,
//! game-over hold, present, throttle.

use std::io;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, TuningError};
use crate::platform::{FrameClock, Frontend};
use crate::renderer::palette::BACKGROUND;
use crate::renderer::{draw_game_over, draw_hud, draw_particle, draw_targets};
use crate::sim::{GameEvent, GamePhase, Guess, Session, TickInput, tick};
use crate::tuning::Tuning;

/// Final report for a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u64,
    pub hits: u32,
    pub misses: u32,
    pub ticks_elapsed: u64,
    /// Player quit before the clock ran out
    pub quit_early: bool,
}

pub struct Game {
    session: Session,
    guess: Guess,
    running: bool,
    quit_early: bool,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Ok(Self {
            session: Session::new(tuning, seed)?,
            guess: Guess::new(),
            running: true,
            quit_early: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access, for setting up scenarios
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.session.seed,
            score: self.session.score,
            hits: self.session.hits,
            misses: self.session.misses,
            ticks_elapsed: self.session.ticks_elapsed,
            quit_early: self.quit_early,
        }
    }

    /// Run frames until the player quits or the clock runs out
    pub fn run<F: Frontend>(mut self, frontend: &mut F) -> Result<SessionSummary, GameError> {
        log::info!(
            "Session starting with seed {} ({} words in pool)",
            self.session.seed,
            self.session.spawner.words().len()
        );
        let mut clock = FrameClock::new(self.session.tuning.tick_rate);
        while self.running {
            self.frame(frontend, &mut clock)?;
        }

        let summary = self.summary();
        log::info!(
            "Session ended: score {} ({} hits, {} misses, {} ticks)",
            summary.score,
            summary.hits,
            summary.misses,
            summary.ticks_elapsed
        );
        Ok(summary)
    }

    /// Run a single frame. Returns whether the loop should continue.
    pub fn frame<F: Frontend>(&mut self, frontend: &mut F, clock: &mut FrameClock) -> io::Result<bool> {
        frontend.clear(BACKGROUND);

        let input = TickInput::new(frontend.poll_events()?);
        let events = tick(&mut self.session, &mut self.guess, &input);
        for event in &events {
            self.handle_event(event);
        }

        let jitter = self.session.tuning.particle_jitter;
        let session = &mut self.session;
        session
            .particles
            .tick(&mut session.rng, jitter, |p| draw_particle(frontend, p));

        draw_targets(frontend, &self.session.targets);
        draw_hud(frontend, &self.session, &self.guess);

        if self.session.phase == GamePhase::GameOver {
            draw_game_over(frontend, &self.session);
            frontend.present()?;
            frontend.pause(Duration::from_millis(self.session.tuning.game_over_hold_ms));
            self.running = false;
        }

        frontend.present()?;
        frontend.throttle(clock);
        Ok(self.running)
    }

    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Spawned { id, word } => log::debug!("Spawned target {id} ({word})"),
            GameEvent::Hit {
                id, word, points, ..
            } => log::debug!("Hit target {id} ({word}) for {points} points"),
            GameEvent::Missed { id, word, .. } => log::debug!("Missed target {id} ({word})"),
            GameEvent::QuitRequested => {
                log::info!("Quit requested");
                self.running = false;
                self.quit_early = true;
            }
            GameEvent::GameOver { score } => log::info!("Game over! Final score: {score}"),
        }
    }
}
