//! Fixed timestep simulation tick
//!
//! Advances a session by one frame in a fixed order:
//! input, hit check, target motion, spawning, clock and misses.
//! Particles are advanced by the frame loop since they are drawn as they decay.

use super::guess::Guess;
use super::scoring::check_for_hit;
use super::state::{GameEvent, GamePhase, Session};

/// A raw input event from the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / interrupt
    Quit,
    Escape,
    Backspace,
    /// Any other key that produced a character
    Char(char),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events drained from the frontend this frame, in arrival order
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }
}

/// Apply input to the guess. Returns true if the player asked to quit.
pub fn apply_input(guess: &mut Guess, input: &TickInput) -> bool {
    let mut quit = false;
    for event in &input.events {
        match *event {
            InputEvent::Quit | InputEvent::Escape => quit = true,
            InputEvent::Backspace => guess.backspace(),
            InputEvent::Char(c) => {
                guess.push(c);
            }
        }
    }
    quit
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, guess: &mut Guess, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if apply_input(guess, input) {
        events.push(GameEvent::QuitRequested);
    }

    // Nothing moves once the clock has run out
    if session.phase == GamePhase::GameOver {
        return events;
    }

    session.ticks_elapsed += 1;

    // Hit check runs before the prefix recompute so a cleared guess leaves no
    // stale progress on the remaining targets
    events.extend(check_for_hit(session, guess));

    let bounds = session.bounds();
    for target in &mut session.targets {
        target.update(bounds);
        target.recompute_typed_prefix(guess.as_str());
    }

    if let Some(target) = session.spawner.tick(&mut session.rng) {
        events.push(GameEvent::Spawned {
            id: target.id,
            word: target.word.clone(),
        });
        session.targets.push(target);
    }

    session.tick_timer();
    events.extend(session.check_misses());

    if session.is_game_over() {
        session.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver {
            score: session.score,
        });
    }

    events
}
