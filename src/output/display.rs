//! Display functions for the line-mode game

use super::formatters::{final_message, render_legend, render_row, round_message, status_lines};
use crate::game::{Row, SessionStatus};
use colored::Colorize;

/// Print the colour legend
pub fn print_legend() {
    println!("{}", "COLOR CODE INFO:".bright_cyan().bold());
    println!("{}", render_legend());
}

/// Print every board row, oldest first
pub fn print_board(rows: &[Row]) {
    for row in rows {
        println!("{}", render_row(row));
    }
}

/// Print the counters for the current game
pub fn print_status(status: &SessionStatus) {
    for line in status_lines(status) {
        println!("{line}");
    }
}

/// Print the banner for a won endless round
pub fn print_round_won(target: &str, attempts: u32) {
    println!();
    println!("{}", round_message(target, attempts).green().bold());
}

/// Print the game-over message
pub fn print_final(status: &SessionStatus, target: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    let message = final_message(status, target);
    if status.won {
        println!("{}", message.green().bold());
    } else {
        println!("{}", message.red().bold());
    }
    if let Some(best) = status.high_score {
        println!("High Score: {}", best.to_string().bright_yellow());
    }
    println!("{}", "═".repeat(60).cyan());
}
