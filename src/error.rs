//! Errors raised outside of gameplay: persistence, terminal setup, and
//! encounter admission. Gameplay itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown boss: {0}")]
    UnknownBoss(String),

    #[error("{boss} can only be summoned with a {item}")]
    MissingSummonItem { boss: String, item: String },

    #[error("{boss} has already been resolved and rematches are disabled")]
    RematchBlocked { boss: String },

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::MissingSummonItem {
            boss: "The Kraken".to_string(),
            item: "Kraken Lure".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The Kraken can only be summoned with a Kraken Lure"
        );
        assert_eq!(
            GameError::UnknownBoss("nessie".to_string()).to_string(),
            "unknown boss: nessie"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
