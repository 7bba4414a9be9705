//! Command implementations

pub mod play;

pub use play::{play_loop, run_play};
