//! Letter-by-letter scoring with Wordle's duplicate letter rules

use super::{CompareError, Comparator};
use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Positional comparator for plain string guesses
///
/// Alphabet agnostic: letters are compared as Unicode scalar values, exactly
/// as given (callers normalise case before scoring).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalComparator;

impl Comparator<String> for PositionalComparator {
    fn compare(&self, guess: &String, target: &String) -> Result<Vec<Verdict>, CompareError> {
        score_letters(guess, target)
    }
}

/// Score `guess` against `target` one letter at a time
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct`; every unmatched target
///    letter goes into the pool of letters still available
/// 2. Second pass (left to right): an unmatched guess letter found in the pool is
///    `Partial` and consumes one copy from the pool, otherwise it is `Incorrect`
///
/// Consuming from the pool is what keeps repeated guess letters from being
/// credited more often than the target contains them.
///
/// # Errors
/// Returns [`CompareError::LengthMismatch`] if the strings differ in length.
///
/// # Examples
/// ```
/// use wordle_clone::comparator::score_letters;
/// use wordle_clone::core::Verdict::{Correct, Partial};
///
/// let verdicts = score_letters("aabb", "abab").unwrap();
/// assert_eq!(verdicts, [Correct, Partial, Partial, Correct]);
/// ```
pub fn score_letters(guess: &str, target: &str) -> Result<Vec<Verdict>, CompareError> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    if guess_chars.len() != target_chars.len() {
        return Err(CompareError::LengthMismatch {
            guess: guess.to_string(),
            target: target.to_string(),
        });
    }

    let mut result: Vec<Option<Verdict>> = vec![None; guess_chars.len()];
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: greens, and pool the target letters they did not consume
    for (i, (&g, &t)) in guess_chars.iter().zip(&target_chars).enumerate() {
        if g == t {
            result[i] = Some(Verdict::Correct);
        } else {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: yellows drawn from the pool, left to right
    for (slot, &letter) in result.iter_mut().zip(&guess_chars) {
        if slot.is_some() {
            continue;
        }
        *slot = Some(match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Verdict::Partial
            }
            _ => Verdict::Incorrect,
        });
    }

    Ok(result
        .into_iter()
        .map(|verdict| verdict.unwrap_or(Verdict::Incorrect))
        .collect())
}
