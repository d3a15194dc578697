//! Error types
//!
//! The simulation itself is infallible. Errors only come from rejected
//! configuration or the frontend's I/O.

use thiserror::Error;

/// Rejected game balance values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("word pool is empty")]
    EmptyWordPool,
    #[error("word pool entry {index} is empty")]
    EmptyWord { index: usize },
    #[error("word {word:?} contains characters that cannot be typed (lowercase a-z, 0-9 only)")]
    UntypeableWord { word: String },
    #[error("tick rate must be positive")]
    ZeroTickRate,
    #[error("spawn interval must be positive")]
    ZeroSpawnInterval,
    #[error("{field} must be finite and {requirement}, got {value}")]
    InvalidValue {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
    #[error("playing field {width}x{height} cannot fit a target of radius {radius}")]
    FieldTooSmall { width: f32, height: f32, radius: f32 },
    #[error("invalid tuning json: {0}")]
    Json(String),
}

/// Top-level error for running a session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error("frontend I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode session summary: {0}")]
    Summary(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_errors_compare_and_display() {
        let err = TuningError::FieldTooSmall {
            width: 80.0,
            height: 600.0,
            radius: 40.0,
        };
        assert_eq!(
            err,
            TuningError::FieldTooSmall {
                width: 80.0,
                height: 600.0,
                radius: 40.0,
            }
        );
        assert_ne!(err, TuningError::EmptyWordPool);
        assert_eq!(
            err.to_string(),
            "playing field 80x600 cannot fit a target of radius 40"
        );

        let game: GameError = err.clone().into();
        assert!(matches!(game, GameError::Tuning(inner) if inner == err));
    }
}
