//! Wordle Clone
//!
//! A Wordle-style guessing game engine. The player guesses a hidden target and
//! each guess is scored element by element: letters for words, fields for
//! structured records.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::comparator::PositionalComparator;
//! use wordle_clone::core::Verdict;
//! use wordle_clone::game::{Game, Rules, WordList};
//!
//! let words = WordList::new(["apple", "berry", "melon"]);
//! let mut game = Game::seeded(words, PositionalComparator, Rules::bounded(6), 7)
//!     .unwrap()
//!     .with_target("apple".to_string());
//!
//! let entry = game.play("melon").unwrap();
//! assert_eq!(entry.verdicts()[1], Verdict::Partial);
//! assert!(!game.is_finished());
//! ```

// Core domain types
pub mod core;

// Guess scoring
pub mod comparator;

// Game engine and modes
pub mod game;

// Endless high scores
pub mod highscore;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
