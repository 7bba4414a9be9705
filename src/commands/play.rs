//! Line-mode game
//!
//! Text-based game loop without TUI

use crate::game::Session;
use crate::output::{print_board, print_final, print_legend, print_round_won, print_status};
use crate::output::render_row;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the line-mode game on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or the game reaches a state it
/// cannot recover from.
pub fn run_play(session: &mut dyn Session) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_loop(session, &mut input)
}

/// Drive `session` from any line source; end of input quits
///
/// # Errors
///
/// Same as [`run_play`].
pub fn play_loop<R: BufRead>(session: &mut dyn Session, input: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Clone - Line Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Commands: ':quit' to exit, ':new' for a new game\n");

    loop {
        let status = session.status();

        if status.finished {
            print_board(&session.rows());
            print_final(&status, &session.target_label());

            match get_user_input(input, "Play again? (yes/no)")?
                .map(|answer| answer.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y") => {
                    session.reset().map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        println!("────────────────────────────────────────────────────────────");
        print_legend();
        print_status(&status);
        print_board(&session.rows());

        let Some(line) = get_user_input(input, "\nGuess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        // Commands carry a ':' prefix so they never shadow a playable word
        match line.to_lowercase().as_str() {
            "" => continue,
            ":quit" | ":q" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                session.reset().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match session.play(&line) {
            Ok(row) => {
                println!("{}", render_row(&row));
                let status = session.status();
                if status.round_complete {
                    let attempts = status.attempts_taken.unwrap_or(status.tries_used);
                    print_round_won(&session.target_label(), attempts);
                    session.commit_round().map_err(|e| e.to_string())?;
                }
            }
            Err(e) if e.is_invalid_guess() => {
                debug!(guess = %line, error = %e, "rejected guess");
                println!("{} {e}", "❌ Error:".red().bold());
            }
            Err(e) => return Err(e.to_string()),
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
