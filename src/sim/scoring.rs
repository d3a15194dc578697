//! Matching the guess against live targets

use super::guess::Guess;
use super::particle::BurstKind;
use super::state::{GameEvent, Session};

/// Clear the first live target (in spawn order) whose word equals the guess.
///
/// Awards `len * points_per_char`, adds the hit bonus to the clock, clears the
/// guess, and bursts particles where the target was. At most one target is
/// cleared per call, so duplicate words on screen never double-score.
pub fn check_for_hit(session: &mut Session, guess: &mut Guess) -> Option<GameEvent> {
    if guess.is_empty() {
        return None;
    }

    let index = session
        .targets
        .iter()
        .position(|t| t.alive && t.matches(guess.as_str()))?;
    let target = session.targets.remove(index);

    let points = target.word.chars().count() as u64 * session.tuning.points_per_char;
    let bonus_ticks = session.tuning.hit_bonus_ticks();
    session.score += points;
    session.timer_ticks += bonus_ticks;
    session.hits += 1;
    guess.clear();
    session.spawn_burst(BurstKind::Hit, target.pos);

    Some(GameEvent::Hit {
        id: target.id,
        word: target.word,
        points,
        bonus_ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Target;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn session_with(words: &[&str]) -> Session {
        let mut session = Session::new(Tuning::default(), 11).expect("valid tuning");
        for (i, word) in words.iter().enumerate() {
            session.targets.push(Target::new(
                i as u32 + 1,
                *word,
                Vec2::new(100.0 + 100.0 * i as f32, 150.0),
                Vec2::new(1.2, 0.0),
                40.0,
            ));
        }
        session
    }

    fn typed(text: &str) -> Guess {
        let mut guess = Guess::new();
        text.chars().for_each(|c| {
            guess.push(c);
        });
        guess
    }

    #[test]
    fn test_hit_awards_score_time_and_clears_guess() {
        let mut session = session_with(&["code", "shoot"]);
        let mut guess = typed("shoot");

        let event = check_for_hit(&mut session, &mut guess).expect("hit");
        assert_eq!(
            event,
            GameEvent::Hit {
                id: 2,
                word: "shoot".into(),
                points: 50,
                bonus_ticks: 120,
            }
        );
        assert_eq!(session.score, 50);
        assert_eq!(session.timer_ticks, 1800 + 120);
        assert_eq!(session.hits, 1);
        assert!(guess.is_empty());
        assert_eq!(session.targets.len(), 1);
        assert_eq!(session.targets[0].word, "code");

        // Ten particles at the cleared target's position
        assert_eq!(session.particles.len(), 10);
        assert!(
            session
                .particles
                .particles
                .iter()
                .all(|p| p.pos == Vec2::new(200.0, 150.0) && (10..=20).contains(&p.life))
        );
    }

    #[test]
    fn test_duplicate_words_clear_only_first() {
        let mut session = session_with(&["key", "fun", "key"]);
        let mut guess = typed("key");

        let event = check_for_hit(&mut session, &mut guess);
        assert!(matches!(event, Some(GameEvent::Hit { id: 1, points: 30, .. })));
        assert_eq!(session.score, 30);
        let remaining: Vec<u32> = session.targets.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![2, 3]);

        // Guess was cleared, so the second "key" survives this tick
        assert!(check_for_hit(&mut session, &mut guess).is_none());
        assert_eq!(session.targets.len(), 2);
    }

    #[test]
    fn test_no_match_changes_nothing() {
        let mut session = session_with(&["pygame"]);
        let mut guess = typed("pyga");

        assert!(check_for_hit(&mut session, &mut guess).is_none());
        assert_eq!(session.score, 0);
        assert_eq!(session.timer_ticks, 1800);
        assert_eq!(guess.as_str(), "pyga");
        assert_eq!(session.targets.len(), 1);
        assert!(session.particles.is_empty());
    }

    #[test]
    fn test_empty_guess_never_hits() {
        let mut session = session_with(&["type"]);
        let mut guess = Guess::new();
        assert!(check_for_hit(&mut session, &mut guess).is_none());
    }
}
