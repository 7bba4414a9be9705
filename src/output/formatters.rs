//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{Cell, Row, SessionStatus};
use colored::{Color, Colorize};

/// Terminal colour for a verdict
#[must_use]
pub const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Partial => Color::Yellow,
        Verdict::Incorrect => Color::Red,
        Verdict::TooHigh => Color::Cyan,
        Verdict::TooLow => Color::Magenta,
    }
}

/// One cell in its verdict colour
#[must_use]
pub fn render_cell(cell: &Cell) -> String {
    cell.text.color(verdict_color(cell.verdict)).bold().to_string()
}

/// A board row as space separated coloured cells
#[must_use]
pub fn render_row(row: &Row) -> String {
    row.cells
        .iter()
        .map(render_cell)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every verdict label in its own colour
#[must_use]
pub fn render_legend() -> String {
    Verdict::ALL
        .iter()
        .map(|&verdict| verdict.label().color(verdict_color(verdict)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counter lines shown above the board
#[must_use]
pub fn status_lines(status: &SessionStatus) -> Vec<String> {
    if status.endless {
        let mut lines = vec![format!("Current Score: {}", status.score.unwrap_or(0))];
        if let Some(best) = status.high_score {
            lines.push(format!("High Score: {best}"));
        }
        lines.push(format!("Lives left: {}", status.lives.unwrap_or(0)));
        lines
    } else {
        vec![format!("Guesses left: {}", status.tries_left)]
    }
}

/// Shown when an endless round is won, before it is banked
#[must_use]
pub fn round_message(target: &str, attempts: u32) -> String {
    format!("Congratulations! The word was guessed: {target}. It took {attempts} attempts.")
}

/// Shown once a game is over
#[must_use]
pub fn final_message(status: &SessionStatus, target: &str) -> String {
    if status.endless {
        format!(
            "Game over! You've run out of lives.\nFinal score: {} words guessed.",
            status.score.unwrap_or(0)
        )
    } else if status.won {
        format!("Congratulations. You won in {} guesses.", status.tries_used)
    } else {
        format!("You lost. The target was: {target}")
    }
}
