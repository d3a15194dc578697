//! Scene drawing: targets, particles, HUD and the game-over banner

use glam::Vec2;

use super::palette::{BLUE, GREEN, RED, WHITE, YELLOW};
use super::{Anchor, Canvas, TextSize};
use crate::sim::{Guess, Particle, Session, Target};

/// Gap between a disk and its progress label
const PROGRESS_GAP: f32 = 5.0;
/// HUD inset from the field edges
const HUD_MARGIN: f32 = 20.0;
const TYPING_LINE_OFFSET: f32 = 50.0;

/// Draw each live target: filled disk, outline, word, and typed progress below
pub fn draw_targets(canvas: &mut impl Canvas, targets: &[Target]) {
    for target in targets.iter().filter(|t| t.alive) {
        canvas.fill_circle(target.pos, target.radius, RED);
        canvas.outline_circle(target.pos, target.radius, WHITE);
        canvas.text(target.pos, &target.word, Anchor::Center, TextSize::Medium, WHITE);

        let below = target.pos + Vec2::new(0.0, target.radius + PROGRESS_GAP);
        canvas.text(
            below,
            &target.typed_so_far,
            Anchor::TopCenter,
            TextSize::Medium,
            GREEN,
        );
    }
}

pub fn draw_particle(canvas: &mut impl Canvas, particle: &Particle) {
    canvas.fill_circle(particle.pos, particle.draw_radius(), YELLOW);
}

/// Status line (time, score, next spawn) and the current guess
pub fn draw_hud(canvas: &mut impl Canvas, session: &Session, guess: &Guess) {
    let status = format!(
        "Time: {}s | Score: {} | Next: {}",
        session.time_left_secs(),
        session.score,
        session.spawner.ticks_until_next()
    );
    canvas.text(
        Vec2::splat(HUD_MARGIN),
        &status,
        Anchor::TopLeft,
        TextSize::Medium,
        BLUE,
    );

    let typing = format!("Typing: {}", guess.as_str());
    canvas.text(
        Vec2::new(HUD_MARGIN, session.tuning.height - TYPING_LINE_OFFSET),
        &typing,
        Anchor::TopLeft,
        TextSize::Medium,
        GREEN,
    );
}

pub fn draw_game_over(canvas: &mut impl Canvas, session: &Session) {
    let banner = format!("GAME OVER! Score: {}", session.score);
    let at = session.bounds() / 2.0;
    canvas.text(at, &banner, Anchor::TopCenter, TextSize::Large, RED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::tuning::Tuning;

    #[test]
    fn test_target_render_contract() {
        let mut target = Target::new(1, "pygame", Vec2::new(100.0, 80.0), Vec2::ZERO, 40.0);
        target.recompute_typed_prefix("pxg");

        let mut list = DrawList::new();
        draw_targets(&mut list, &[target]);

        assert_eq!(
            list.commands,
            vec![
                DrawCommand::FillCircle {
                    center: Vec2::new(100.0, 80.0),
                    radius: 40.0,
                    color: RED,
                },
                DrawCommand::OutlineCircle {
                    center: Vec2::new(100.0, 80.0),
                    radius: 40.0,
                    color: WHITE,
                },
                DrawCommand::Text {
                    pos: Vec2::new(100.0, 80.0),
                    text: "pygame".into(),
                    anchor: Anchor::Center,
                    size: TextSize::Medium,
                    color: WHITE,
                },
                DrawCommand::Text {
                    pos: Vec2::new(100.0, 125.0),
                    text: "pg".into(),
                    anchor: Anchor::TopCenter,
                    size: TextSize::Medium,
                    color: GREEN,
                },
            ]
        );
    }

    #[test]
    fn test_hud_text() {
        let mut session = Session::new(Tuning::default(), 0).expect("valid tuning");
        session.score = 70;
        session.timer_ticks = 659;
        let mut guess = Guess::new();
        guess.push('k');
        guess.push('e');

        let mut list = DrawList::new();
        draw_hud(&mut list, &session, &guess);
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["Time: 10s | Score: 70 | Next: 60", "Typing: ke"]);
    }

    #[test]
    fn test_hud_clamps_negative_time() {
        let mut session = Session::new(Tuning::default(), 0).expect("valid tuning");
        session.timer_ticks = -30;
        let mut list = DrawList::new();
        draw_hud(&mut list, &session, &Guess::new());
        assert!(list.texts().any(|t| t.starts_with("Time: 0s |")));
    }

    #[test]
    fn test_game_over_banner() {
        let mut session = Session::new(Tuning::default(), 0).expect("valid tuning");
        session.score = 120;
        let mut list = DrawList::new();
        draw_game_over(&mut list, &session);
        assert!(matches!(
            &list.commands[..],
            [DrawCommand::Text { text, size: TextSize::Large, color: RED, .. }]
                if text == "GAME OVER! Score: 120"
        ));
    }
}
