//! Color palette

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgb = Rgb(10, 10, 30);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const GREEN: Rgb = Rgb(50, 255, 50);
pub const RED: Rgb = Rgb(255, 50, 50);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const BLUE: Rgb = Rgb(100, 100, 255);
