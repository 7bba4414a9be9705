//! Errors reported by the game state machine

use crate::comparator::CompareError;
use thiserror::Error;

/// A rejected construction, guess or board access
///
/// Every variant is recoverable; a failed `play` leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The word source had nothing to draw a target from
    #[error("Cannot select random element. The list is empty.")]
    EmptySource,

    #[error(
        "Invalid guess. The length of guess and target does not match (expected {expected}, got {actual})."
    )]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid guess. \"{guess}\" is not in the word list.")]
    NotInList { guess: String },

    #[error("Invalid guess. '{letter}' is outside the allowed letters.")]
    InvalidCharacter { letter: char },

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error("The game is over. Reset to play again.")]
    GameOver,

    #[error("The round is complete. Commit it before guessing again.")]
    RoundPending,

    #[error("The board has no guesses yet.")]
    EmptyBoard,
}

impl GameError {
    /// True for errors caused by the guess itself rather than the game's state
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::NotInList { .. }
                | Self::InvalidCharacter { .. }
                | Self::Compare(_)
        )
    }
}
