//! TUI rendering with ratatui
//!
//! Board, status and message panels for the interactive game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::game::{Row, SessionStatus, TriesLeft};
use crate::output::formatters::status_lines;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let status = app.status();

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, &app.session.rows(), main_chunks[0]);
    render_info_panel(f, app, &status, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Cell background for a verdict
#[must_use]
pub const fn cell_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Partial => Color::Yellow,
        Verdict::Incorrect => Color::Red,
        Verdict::TooHigh => Color::Cyan,
        Verdict::TooLow => Color::Magenta,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🎯 WORDLE CLONE - {}",
        app.mode_name.to_uppercase()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells.len() * 2);
    for cell in &row.cells {
        spans.push(Span::styled(
            format!(" {} ", cell.text),
            Style::default()
                .fg(Color::Black)
                .bg(cell_color(cell.verdict))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, rows: &[Row], area: Rect) {
    let content: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        // Show the most recent rows that fit
        let visible = usize::from(area.height.saturating_sub(2)).max(1);
        rows.iter()
            .skip(rows.len().saturating_sub(visible))
            .map(row_line)
            .collect()
    };

    let board = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, status: &SessionStatus, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Counters
            Constraint::Length(3), // Budget gauge
            Constraint::Length(7), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_counters(f, status, chunks[0]);
    render_budget(f, status, chunks[1]);
    render_legend(f, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_counters(f: &mut Frame, status: &SessionStatus, area: Rect) {
    let lines: Vec<Line> = status_lines(status).into_iter().map(Line::from).collect();
    let counters = Paragraph::new(lines).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(counters, area);
}

fn render_budget(f: &mut Frame, status: &SessionStatus, area: Rect) {
    let (percent, label) = match status.tries_left {
        TriesLeft::Finite(left) => {
            let total = status.tries_used + left;
            let percent = if total == 0 {
                0
            } else {
                left.saturating_mul(100) / total
            };
            let noun = if status.endless { "lives" } else { "tries" };
            (percent, format!("{left} {noun} left"))
        }
        TriesLeft::Unbounded => (100, "Zen: unlimited tries".to_string()),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::try_from(percent.min(100)).unwrap_or(100))
        .label(label);

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = Verdict::ALL
        .iter()
        .map(|&verdict| {
            ListItem::new(Line::from(vec![
                Span::styled("   ", Style::default().bg(cell_color(verdict))),
                Span::raw(format!(" {}", verdict.label())),
            ]))
        })
        .collect();

    let legend = List::new(items).block(Block::default().title(" Legend ").borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::RoundWon => (
            " 🎉 Round won! | Press Enter to continue ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess | Enter: Submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode_name)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Ctrl+N: New Game",
        InputMode::RoundWon => "Enter: Next Round | Esc: Quit",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
