//! Guess scoring
//!
//! A [`Comparator`] turns a guess and a target of the same shape into one
//! [`Verdict`] per unit. Two strategies exist:
//! - [`PositionalComparator`]: letter-by-letter Wordle scoring with duplicate handling
//! - [`KeyedComparator`]: field-by-field record scoring in sorted key order

mod keyed;
mod positional;

pub use keyed::KeyedComparator;
pub use positional::{PositionalComparator, score_letters};

use crate::core::{FieldKind, Verdict};
use thiserror::Error;

/// Scores a guess against a target
pub trait Comparator<T> {
    /// Produce one verdict per unit of `guess`
    ///
    /// # Errors
    /// Returns [`CompareError`] when the guess and target do not have the same shape.
    fn compare(&self, guess: &T, target: &T) -> Result<Vec<Verdict>, CompareError>;
}

/// Shape mismatch between a guess and its target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("Cannot compare \"{guess}\" to \"{target}\". Strings have different length.")]
    LengthMismatch { guess: String, target: String },

    #[error("Cannot compare guess to target. Records have different size ({guess} vs {target}).")]
    SizeMismatch { guess: usize, target: usize },

    #[error("Cannot compare guess to target. Guess has no field \"{key}\".")]
    MissingKey { key: String },

    #[error("Cannot compare field \"{key}\": {guess} guess against {target} target.")]
    FieldTypeMismatch {
        key: String,
        guess: FieldKind,
        target: FieldKind,
    },
}
