//! Fixed-rate frame clock

use std::time::{Duration, Instant};

/// Sleeps until the next frame deadline, like a fixed-fps game clock
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    next_deadline: Option<Instant>,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / ticks_per_second.max(1),
            next_deadline: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame's time slice is used up
    pub fn tick(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.frame);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.frame);
        } else {
            // More than a frame behind: resync instead of bursting to catch up
            self.next_deadline = Some(now + self.frame);
        }
    }
}
