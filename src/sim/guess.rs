//! Current guess buffer
//!
//! Accumulates keystrokes between hits. Only lowercase ASCII alphanumerics
//! are kept; anything else is dropped silently.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    text: String,
}

impl Guess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character after normalizing it.
    /// Returns false if the character was filtered out.
    pub fn push(&mut self, c: char) -> bool {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            self.text.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last character (no-op when empty)
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_normalizes_case() {
        let mut guess = Guess::new();
        assert!(guess.push('P'));
        assert!(guess.push('y'));
        assert!(guess.push('7'));
        assert_eq!(guess.as_str(), "py7");
    }

    #[test]
    fn test_push_filters_non_alphanumeric() {
        let mut guess = Guess::new();
        for c in [' ', '\t', '-', '!', 'é', '\u{1b}'] {
            assert!(!guess.push(c));
        }
        assert!(guess.is_empty());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut guess = Guess::new();
        guess.backspace();
        assert!(guess.is_empty());

        "code".chars().for_each(|c| {
            guess.push(c);
        });
        guess.backspace();
        assert_eq!(guess.as_str(), "cod");

        guess.clear();
        assert_eq!(guess.as_str(), "");
    }
}
