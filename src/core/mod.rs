//! Core domain types for the guessing game
//!
//! This module contains the value types every game mode is built from.
//! All types here are pure and have no notion of game state.

mod field;
mod record;
mod verdict;

pub use field::{DATETIME_FORMAT, FieldKind, FieldValue};
pub use record::Record;
pub use verdict::{Verdict, all_correct};
