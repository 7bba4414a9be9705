//! Guess history
//!
//! The board is append-only: entries are created once per accepted guess and
//! never modified afterwards. Resetting a round replaces the whole board.

use super::GameError;
use crate::core::Verdict;

/// One scored guess
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry<T> {
    verdicts: Vec<Verdict>,
    guess: T,
}

impl<T> BoardEntry<T> {
    #[must_use]
    pub const fn new(verdicts: Vec<Verdict>, guess: T) -> Self {
        Self { verdicts, guess }
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &T {
        &self.guess
    }

    /// Whether this guess hit the target
    #[must_use]
    pub fn is_win(&self) -> bool {
        crate::core::all_correct(&self.verdicts)
    }
}

/// Ordered history of scored guesses
#[derive(Debug, Clone, PartialEq)]
pub struct Board<T> {
    entries: Vec<BoardEntry<T>>,
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Board<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scored guess and return the stored entry
    pub fn push(&mut self, verdicts: Vec<Verdict>, guess: T) -> &BoardEntry<T> {
        let index = self.entries.len();
        self.entries.push(BoardEntry::new(verdicts, guess));
        &self.entries[index]
    }

    /// Most recent entry
    ///
    /// # Errors
    /// Returns [`GameError::EmptyBoard`] if nothing has been played yet.
    pub fn last(&self) -> Result<&BoardEntry<T>, GameError> {
        self.entries.last().ok_or(GameError::EmptyBoard)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoardEntry<T>> {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a Board<T> {
    type Item = &'a BoardEntry<T>;
    type IntoIter = std::slice::Iter<'a, BoardEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
