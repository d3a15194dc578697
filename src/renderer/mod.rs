//! Rendering contract
//!
//! The simulation never draws. Each frame the loop describes the scene
//! through [`Canvas`]; a frontend decides how primitives reach the screen.

pub mod draw;
pub mod palette;

pub use draw::{draw_game_over, draw_hud, draw_particle, draw_targets};
pub use palette::Rgb;

use glam::Vec2;

/// Where a text position sits relative to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// Centered on both axes
    Center,
    /// Horizontally centered, top edge at the position
    TopCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Medium,
    Large,
}

/// Drawing primitives in world coordinates (origin top-left, y down)
pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn outline_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn text(&mut self, pos: Vec2, text: &str, anchor: Anchor, size: TextSize, color: Rgb);
}

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillCircle { center: Vec2, radius: f32, color: Rgb },
    OutlineCircle { center: Vec2, radius: f32, color: Rgb },
    Text {
        pos: Vec2,
        text: String,
        anchor: Anchor,
        size: TextSize,
        color: Rgb,
    },
}

/// Commands for one frame, in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// All text drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn outline_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::OutlineCircle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, anchor: Anchor, size: TextSize, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            anchor,
            size,
            color,
        });
    }
}
