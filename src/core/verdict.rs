//! Per-unit feedback for a scored guess
//!
//! A verdict describes how one unit of a guess (a letter, or one field of a
//! record) relates to the same unit of the target:
//! - `Correct` = exact match
//! - `Partial` = present elsewhere (letters) or overlapping (text/set fields)
//! - `Incorrect` = no relation
//! - `TooHigh` / `TooLow` = ordered fields only (numbers, dates)

use std::fmt;

/// Outcome of comparing a single guess unit against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Correct,
    Partial,
    Incorrect,
    TooHigh,
    TooLow,
}

impl Verdict {
    /// Every verdict, in legend order
    pub const ALL: [Self; 5] = [
        Self::Correct,
        Self::Partial,
        Self::Incorrect,
        Self::TooHigh,
        Self::TooLow,
    ];

    /// Human readable label, used by the colour legend
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct guess",
            Self::Partial => "Partially correct",
            Self::Incorrect => "Incorrect",
            Self::TooHigh => "Too high",
            Self::TooLow => "Too low",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Single character code for compact output (`G`, `Y`, `-`, `^`, `v`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Partial => 'Y',
            Self::Incorrect => '-',
            Self::TooHigh => '^',
            Self::TooLow => 'v',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check whether a verdict sequence represents a win
///
/// An empty sequence is never a win.
///
/// # Examples
/// ```
/// use wordle_clone::core::{Verdict, all_correct};
///
/// assert!(all_correct(&[Verdict::Correct, Verdict::Correct]));
/// assert!(!all_correct(&[Verdict::Correct, Verdict::Partial]));
/// assert!(!all_correct(&[]));
/// ```
#[must_use]
pub fn all_correct(verdicts: &[Verdict]) -> bool {
    !verdicts.is_empty() && verdicts.iter().all(|v| v.is_correct())
}
