//! Headless frontend
//!
//! Feeds scripted input one frame at a time and records what was drawn.
//! Never sleeps, so whole sessions run instantly.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use glam::Vec2;

use super::{FrameClock, Frontend};
use crate::renderer::{Anchor, Canvas, DrawList, Rgb, TextSize};
use crate::sim::InputEvent;

#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    script: VecDeque<Vec<InputEvent>>,
    current: DrawList,
    /// Every presented frame, in order
    pub frames: Vec<DrawList>,
    /// Every requested pause
    pub pauses: Vec<Duration>,
    /// Number of input polls so far
    pub polls: usize,
}

impl HeadlessFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events delivered by the next poll (one entry per frame)
    pub fn push_frame_input(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(events);
    }

    /// Queue `text` as character events arriving in a single frame
    pub fn type_text(&mut self, text: &str) {
        self.push_frame_input(text.chars().map(InputEvent::Char).collect());
    }

    /// Queue `n` frames with no input
    pub fn idle(&mut self, n: usize) {
        for _ in 0..n {
            self.push_frame_input(Vec::new());
        }
    }

    pub fn last_frame(&self) -> Option<&DrawList> {
        self.frames.last()
    }
}

impl Canvas for HeadlessFrontend {
    fn clear(&mut self, color: Rgb) {
        self.current.clear_commands();
        self.current.clear(color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.current.fill_circle(center, radius, color);
    }

    fn outline_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.current.outline_circle(center, radius, color);
    }

    fn text(&mut self, pos: Vec2, text: &str, anchor: Anchor, size: TextSize, color: Rgb) {
        self.current.text(pos, text, anchor, size, color);
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        self.polls += 1;
        Ok(self.script.pop_front().unwrap_or_default())
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames.push(self.current.clone());
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }

    fn throttle(&mut self, _clock: &mut FrameClock) {}
}
