//! Type-erased view of a running game for front-ends
//!
//! The CLI and TUI drive any [`Game`] through [`Session`] without knowing
//! whether it guesses words or records.

use super::{Cell, Game, GameError, TargetSource, TriesLeft};
use crate::comparator::Comparator;

/// One rendered board row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: String,
    pub cells: Vec<Cell>,
}

impl Row {
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|cell| cell.verdict.is_correct())
    }
}

/// Snapshot of the counters a front-end displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub tries_used: u32,
    pub tries_left: TriesLeft,
    pub finished: bool,
    pub won: bool,
    pub endless: bool,
    pub lives: Option<u32>,
    pub score: Option<u32>,
    pub round_complete: bool,
    pub attempts_taken: Option<u32>,
    pub high_score: Option<u32>,
}

/// Object-safe handle on a game of any mode
pub trait Session {
    /// Play a raw guess and return its rendered row
    ///
    /// # Errors
    /// Propagates [`Game::play`] errors.
    fn play(&mut self, raw: &str) -> Result<Row, GameError>;

    /// # Errors
    /// Propagates [`Game::commit_round`] errors.
    fn commit_round(&mut self) -> Result<bool, GameError>;

    /// # Errors
    /// Propagates [`Game::reset`] errors.
    fn reset(&mut self) -> Result<(), GameError>;

    /// The whole board, oldest guess first
    fn rows(&self) -> Vec<Row>;

    fn status(&self) -> SessionStatus;

    fn target_label(&self) -> String;
}

impl<S, C> Session for Game<S, C>
where
    S: TargetSource,
    C: Comparator<S::Unit>,
{
    fn play(&mut self, raw: &str) -> Result<Row, GameError> {
        let entry = Game::play(self, raw)?.clone();
        Ok(Row {
            guess: self.source().label(entry.guess()),
            cells: self.source().cells(entry.guess(), entry.verdicts()),
        })
    }

    fn commit_round(&mut self) -> Result<bool, GameError> {
        Game::commit_round(self)
    }

    fn reset(&mut self) -> Result<(), GameError> {
        Game::reset(self)
    }

    fn rows(&self) -> Vec<Row> {
        self.board()
            .iter()
            .map(|entry| Row {
                guess: self.source().label(entry.guess()),
                cells: self.source().cells(entry.guess(), entry.verdicts()),
            })
            .collect()
    }

    fn status(&self) -> SessionStatus {
        SessionStatus {
            tries_used: self.tries_used(),
            tries_left: self.tries_left(),
            finished: self.is_finished(),
            won: self.has_won(),
            endless: self.is_endless(),
            lives: self.lives(),
            score: self.score(),
            round_complete: self.is_round_complete(),
            attempts_taken: self.attempts_taken(),
            high_score: self.high_score(),
        }
    }

    fn target_label(&self) -> String {
        Game::target_label(self)
    }
}
