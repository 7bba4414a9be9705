//! Game engine
//!
//! A [`Game`] pairs a [`TargetSource`] with a comparator and plays by a set of
//! [`Rules`]. The presets in [`mode`] cover the simple, zen and endless variants
//! for words, random letters and records.

pub mod board;
pub mod engine;
pub mod error;
pub mod mode;
pub mod rules;
pub mod session;
pub mod source;

pub use board::{Board, BoardEntry};
pub use engine::Game;
pub use error::GameError;
pub use mode::{
    GameConfig, GameMode, Material, ObjectGame, RandomGame, WordGame, build_session,
    endless_game, endless_object_game, endless_random_game, object_game, random_game,
    simple_game, zen_game, zen_object_game, zen_random_game,
};
pub use rules::{
    DEFAULT_BONUS_LIVES, DEFAULT_LIVES, DEFAULT_MAX_TRIES, DEFAULT_WORD_LENGTH, RoundPolicy,
    Rules, TriesLeft, TryBudget,
};
pub use session::{Row, Session, SessionStatus};
pub use source::{ALPHABET, Cell, RandomLetters, RecordList, TargetSource, WordList};
