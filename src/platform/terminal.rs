//! Terminal frontend
//!
//! Renders the world onto a braille canvas scaled to the terminal and reads
//! keys through crossterm. Raw mode and the alternate screen are restored on drop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use glam::Vec2;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas as TuiCanvas, Circle, Context, Points};
use ratatui::widgets::{Block, Borders};

use super::Frontend;
use crate::renderer::palette::BACKGROUND;
use crate::renderer::{Anchor, Canvas, DrawCommand, DrawList, Rgb, TextSize};
use crate::sim::InputEvent;

pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// World size mapped onto the canvas
    world: Vec2,
    title: String,
    background: Rgb,
    frame: DrawList,
}

impl TerminalFrontend {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn new(world: Vec2, title: impl Into<String>) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = stdout.execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        log::info!("Terminal frontend ready ({}x{} world)", world.x, world.y);

        Ok(Self {
            terminal,
            world,
            title: title.into(),
            background: BACKGROUND,
            frame: DrawList::new(),
        })
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Translate a key press into a game input event
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        _ => None,
    }
}

fn tui_color(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Size of one terminal cell in world units
#[derive(Debug, Clone, Copy)]
struct CellScale {
    world: Vec2,
    cell: Vec2,
}

impl CellScale {
    /// Canvas y grows upward; world y grows downward
    fn flip_y(&self, y: f32) -> f64 {
        f64::from(self.world.y - y)
    }

    /// Braille packs 2x4 dots per cell
    fn dot_step(&self) -> f32 {
        (self.cell.x / 2.0).min(self.cell.y / 4.0).max(1.0)
    }
}

fn paint(ctx: &mut Context, command: &DrawCommand, scale: CellScale) {
    match command {
        DrawCommand::Clear(_) => {}
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            let color = tui_color(*color);
            let (x, y) = (f64::from(center.x), scale.flip_y(center.y));
            let step = scale.dot_step();
            let mut r = *radius;
            while r > 0.0 {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: f64::from(r),
                    color,
                });
                r -= step;
            }
            ctx.draw(&Points {
                coords: &[(x, y)],
                color,
            });
        }
        DrawCommand::OutlineCircle {
            center,
            radius,
            color,
        } => {
            ctx.draw(&Circle {
                x: f64::from(center.x),
                y: scale.flip_y(center.y),
                radius: f64::from(*radius),
                color: tui_color(*color),
            });
        }
        DrawCommand::Text {
            pos,
            text,
            anchor,
            size,
            color,
        } => {
            if text.is_empty() {
                return;
            }
            let width = text.chars().count() as f32 * scale.cell.x;
            let (x, y) = match anchor {
                Anchor::TopLeft => (pos.x, pos.y),
                Anchor::Center => (pos.x - width / 2.0, pos.y),
                Anchor::TopCenter => (pos.x - width / 2.0, pos.y + scale.cell.y / 2.0),
            };
            let mut style = Style::default().fg(tui_color(*color));
            if *size == TextSize::Large {
                style = style.add_modifier(Modifier::BOLD);
            }
            // Labels always render above shapes
            ctx.print(
                f64::from(x.max(0.0)),
                scale.flip_y(y),
                Line::from(Span::styled(text.clone(), style)),
            );
        }
    }
}

impl Canvas for TerminalFrontend {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.frame.clear_commands();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.frame.fill_circle(center, radius, color);
    }

    fn outline_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.frame.outline_circle(center, radius, color);
    }

    fn text(&mut self, pos: Vec2, text: &str, anchor: Anchor, size: TextSize, color: Rgb) {
        self.frame.text(pos, text, anchor, size, color);
    }
}

impl Frontend for TerminalFrontend {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                events.extend(map_key(key));
            }
        }
        Ok(events)
    }

    fn present(&mut self) -> io::Result<()> {
        let commands = &self.frame.commands;
        let world = self.world;
        let background = tui_color(self.background);
        let title = format!(" {} ", self.title);

        self.terminal.draw(|f| {
            let area = f.size();
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title);
            let inner = block.inner(area);
            let scale = CellScale {
                world,
                cell: Vec2::new(
                    world.x / f32::from(inner.width.max(1)),
                    world.y / f32::from(inner.height.max(1)),
                ),
            };

            let canvas = TuiCanvas::default()
                .block(block)
                .marker(Marker::Braille)
                .background_color(background)
                .x_bounds([0.0, f64::from(world.x)])
                .y_bounds([0.0, f64::from(world.y)])
                .paint(|ctx| {
                    for command in commands {
                        paint(ctx, command, scale);
                    }
                });
            f.render_widget(canvas, area);
        })?;
        Ok(())
    }
}
