//! Platform abstraction layer
//!
//! Handles frontend differences for:
//! - Input events
//! - Frame presentation
//! - Time (fixed-rate throttling, the game-over hold)

pub mod clock;
pub mod headless;
pub mod terminal;

pub use clock::FrameClock;
pub use headless::HeadlessFrontend;
pub use terminal::TerminalFrontend;

use std::io;
use std::time::Duration;

use crate::renderer::Canvas;
use crate::sim::InputEvent;

/// Everything the frame loop needs from the outside world
pub trait Frontend: Canvas {
    /// Drain pending input without blocking
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> io::Result<()>;

    /// Block for a fixed real-time pause. Not cancellable.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Wait out the rest of the current frame
    fn throttle(&mut self, clock: &mut FrameClock) {
        clock.tick();
    }
}
