//! Terminal output formatting
//!
//! Colour rendering of verdicts and board rows for the line-mode CLI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_final, print_legend, print_round_won, print_status};
pub use formatters::{render_row, verdict_color};
