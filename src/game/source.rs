//! Target selection and guess intake
//!
//! A [`TargetSource`] decides what the player is guessing: it draws targets,
//! turns raw input into a guess unit, and checks a guess before it is scored.

use super::GameError;
use crate::core::{Record, Verdict};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Lowercase ASCII letters, the alphabet of random-letter games
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// One coloured cell of a rendered board row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub verdict: Verdict,
}

/// Where targets come from and what counts as a valid guess
pub trait TargetSource {
    /// What the player guesses: a word or a record
    type Unit: Clone + PartialEq;

    /// Draw a target uniformly at random
    ///
    /// # Errors
    /// Returns [`GameError::EmptySource`] when there is nothing to draw.
    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Unit, GameError>;

    /// Turn raw player input into a guess unit
    ///
    /// # Errors
    /// Returns [`GameError::NotInList`] when the input names no known unit.
    fn convert(&self, raw: &str) -> Result<Self::Unit, GameError>;

    /// Check a converted guess against the current target
    ///
    /// # Errors
    /// Returns a shape, membership or alphabet error.
    fn validate(&self, guess: &Self::Unit, target: &Self::Unit) -> Result<(), GameError>;

    /// Short human name for a unit (the word itself, or a record's display key)
    fn label(&self, unit: &Self::Unit) -> String;

    /// Split a scored unit into coloured cells for display
    fn cells(&self, unit: &Self::Unit, verdicts: &[Verdict]) -> Vec<Cell>;
}

/// Fixed list of playable words
///
/// Guesses must have the target's length and appear in the list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl WordList {
    /// Build a list from raw words; entries are trimmed, lower-cased and de-duplicated,
    /// blank entries are dropped
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && list.lookup.insert(word.clone()) {
                list.words.push(word);
            }
        }
        list
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl TargetSource for WordList {
    type Unit = String;

    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptySource);
        }
        Ok(self.words[rng.random_range(0..self.words.len())].clone())
    }

    fn convert(&self, raw: &str) -> Result<String, GameError> {
        Ok(raw.trim().to_lowercase())
    }

    fn validate(&self, guess: &String, target: &String) -> Result<(), GameError> {
        check_length(guess, target)?;
        if !self.contains(guess) {
            return Err(GameError::NotInList {
                guess: guess.clone(),
            });
        }
        Ok(())
    }

    fn label(&self, unit: &String) -> String {
        unit.clone()
    }

    fn cells(&self, unit: &String, verdicts: &[Verdict]) -> Vec<Cell> {
        letter_cells(unit, verdicts)
    }
}

/// Randomly generated targets over a fixed alphabet
///
/// There is no word list: any guess of the right length made of allowed letters is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomLetters {
    length: usize,
    alphabet: Vec<char>,
}

impl RandomLetters {
    /// Random lowercase `a`-`z` targets of the given length
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self::with_alphabet(length, ALPHABET)
    }

    #[must_use]
    pub fn with_alphabet(length: usize, alphabet: &str) -> Self {
        let mut letters: Vec<char> = alphabet.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        Self {
            length,
            alphabet: letters,
        }
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn allows(&self, letter: char) -> bool {
        self.alphabet.binary_search(&letter).is_ok()
    }
}

impl TargetSource for RandomLetters {
    type Unit = String;

    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GameError> {
        if self.length == 0 || self.alphabet.is_empty() {
            return Err(GameError::EmptySource);
        }
        Ok((0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect())
    }

    fn convert(&self, raw: &str) -> Result<String, GameError> {
        Ok(raw.trim().to_lowercase())
    }

    fn validate(&self, guess: &String, target: &String) -> Result<(), GameError> {
        check_length(guess, target)?;
        if let Some(letter) = guess.chars().find(|&c| !self.allows(c)) {
            return Err(GameError::InvalidCharacter { letter });
        }
        Ok(())
    }

    fn label(&self, unit: &String) -> String {
        unit.clone()
    }

    fn cells(&self, unit: &String, verdicts: &[Verdict]) -> Vec<Cell> {
        letter_cells(unit, verdicts)
    }
}

/// Fixed list of records, guessed by their display key
#[derive(Debug, Clone, Default)]
pub struct RecordList {
    records: Vec<Record>,
    display_key: String,
}

impl RecordList {
    #[must_use]
    pub fn new(records: Vec<Record>, display_key: impl Into<String>) -> Self {
        Self {
            records,
            display_key: display_key.into(),
        }
    }

    #[must_use]
    pub fn display_key(&self) -> &str {
        &self.display_key
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by its display key, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Record> {
        let name = name.trim().to_lowercase();
        self.records.iter().find(|record| {
            record
                .text(&self.display_key)
                .is_some_and(|text| text.to_lowercase() == name)
        })
    }
}

impl TargetSource for RecordList {
    type Unit = Record;

    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Record, GameError> {
        if self.records.is_empty() {
            return Err(GameError::EmptySource);
        }
        Ok(self.records[rng.random_range(0..self.records.len())].clone())
    }

    fn convert(&self, raw: &str) -> Result<Record, GameError> {
        self.find(raw).cloned().ok_or_else(|| GameError::NotInList {
            guess: raw.trim().to_string(),
        })
    }

    fn validate(&self, guess: &Record, target: &Record) -> Result<(), GameError> {
        if guess.len() != target.len() {
            return Err(GameError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }
        if !self.records.contains(guess) {
            return Err(GameError::NotInList {
                guess: self.label(guess),
            });
        }
        Ok(())
    }

    fn label(&self, unit: &Record) -> String {
        unit.text(&self.display_key).unwrap_or_default().to_string()
    }

    /// Display key first, remaining fields in sorted key order
    fn cells(&self, unit: &Record, verdicts: &[Verdict]) -> Vec<Cell> {
        let mut cells: Vec<Cell> = unit
            .iter()
            .zip(verdicts)
            .map(|((key, value), &verdict)| Cell {
                text: format!("{key}: {value}"),
                verdict,
            })
            .collect();

        if let Some(index) = unit.keys().position(|key| key == self.display_key)
            && index < cells.len()
        {
            let key_cell = cells.remove(index);
            cells.insert(0, key_cell);
        }

        cells
    }
}

fn check_length(guess: &str, target: &str) -> Result<(), GameError> {
    let (expected, actual) = (target.chars().count(), guess.chars().count());
    if expected == actual {
        Ok(())
    } else {
        Err(GameError::LengthMismatch { expected, actual })
    }
}

fn letter_cells(word: &str, verdicts: &[Verdict]) -> Vec<Cell> {
    word.chars()
        .zip(verdicts)
        .map(|(letter, &verdict)| Cell {
            text: letter.to_uppercase().collect(),
            verdict,
        })
        .collect()
}
