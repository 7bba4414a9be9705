//! TUI application state and logic

use crate::game::{GameError, Session, SessionStatus};
use crate::output::formatters::{final_message, round_message};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub session: Box<dyn Session>,
    pub mode_name: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    /// An endless round was won and waits to be banked
    RoundWon,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl App {
    #[must_use]
    pub fn new(session: Box<dyn Session>, mode_name: impl Into<String>) -> Self {
        Self {
            session,
            mode_name: mode_name.into(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type a guess and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Esc quits, Ctrl+N starts a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.trim().to_string();
        if guess.is_empty() {
            return;
        }

        match self.session.play(&guess) {
            Ok(row) => {
                debug!(guess = %row.guess, "guess scored");
                self.input_buffer.clear();
                let status = self.session.status();
                if status.round_complete {
                    let attempts = status.attempts_taken.unwrap_or(status.tries_used);
                    let message = round_message(&self.session.target_label(), attempts);
                    self.add_message(&message, MessageStyle::Success);
                    self.add_message("Press Enter to continue.", MessageStyle::Info);
                    self.input_mode = InputMode::RoundWon;
                } else if status.finished {
                    self.finish(&status);
                }
            }
            Err(e) => self.report(&e),
        }
    }

    /// Bank a won endless round and draw the next target
    pub fn continue_round(&mut self) {
        match self.session.commit_round() {
            Ok(_) => {
                self.input_mode = InputMode::Guessing;
                self.add_message("Next round! A new target was drawn.", MessageStyle::Info);
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn new_game(&mut self) {
        if let Err(e) = self.session.reset() {
            self.report(&e);
            return;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::RoundWon => match key.code {
                KeyCode::Enter => self.continue_round(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) if !c.is_control() => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    fn finish(&mut self, status: &SessionStatus) {
        self.stats.total_games += 1;
        if status.won {
            self.stats.games_won += 1;
        }
        self.input_mode = InputMode::GameOver;

        let message = final_message(status, &self.session.target_label());
        let style = if status.won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        for line in message.lines() {
            self.add_message(line, style);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn report(&mut self, error: &GameError) {
        self.add_message(&error.to_string(), MessageStyle::Error);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
