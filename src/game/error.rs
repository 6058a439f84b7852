//! Error types for game module
//!
//! Covers the failures the rules engine may report back to the interaction
//! core. None of them are fatal: the caller logs and carries on.

use crate::game::types::MoveCommand;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The rules engine refused a submitted move
    #[error("Illegal move: {command}")]
    IllegalMove { command: MoveCommand },

    /// A square index reported by the engine does not fit the board
    #[error("Square index {index} out of range")]
    InvalidSquare { index: u32 },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Square;

    #[test]
    fn test_error_messages() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let e5 = Square::from_algebraic("e5").unwrap();
        let illegal = GameError::IllegalMove {
            command: MoveCommand::new(e2, e5, None),
        };
        assert!(illegal.to_string().starts_with("Illegal move: "));
        assert_eq!(
            GameError::InvalidSquare { index: 64 }.to_string(),
            "Square index 64 out of range"
        );
    }
}
