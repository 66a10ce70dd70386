//! TUI rendering with ratatui
//!
//! Word display, gallows, keyboard and message log.

use super::app::{App, MessageStyle};
use crate::engine::Status;
use crate::output::formatters::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(8), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and keyboard
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_board(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let max = usize::from(session.max_wrong_guesses());
    let color = match session.status() {
        Status::Playing => Color::White,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let lines: Vec<Line> = gallows(session.wrong_guess_count(), max)
        .iter()
        .map(|&row| Line::from(Span::styled(row, Style::default().fg(color))))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Lives gauge
            Constraint::Min(5),    // Keyboard
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_lives(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let reveal = session.reveal_pattern();

    // Show the answer in place once the round is lost
    let spans: Vec<Span> = session
        .secret()
        .chars()
        .zip(reveal.slots())
        .map(|(secret, slot)| {
            let (text, style) = match (slot, session.status()) {
                (Some(c), _) => (
                    *c,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                (None, Status::Lost) => (secret, Style::default().fg(Color::Red)),
                (None, _) => ('_', Style::default().fg(Color::DarkGray)),
            };
            Span::styled(format!(" {text} "), style)
        })
        .collect();

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Round {} ", session.round_number()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let max = u16::from(session.max_wrong_guesses());
    let remaining = session.remaining_wrong_allowance() as u16;
    let percent = (remaining * 100 / max.max(1)).min(100);

    let color = match remaining {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Lives ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{max} wrong guesses left"));
    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = if !session.is_guessed(c) {
                        Style::default().fg(Color::White)
                    } else if session.secret().has_letter(c) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(45),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Status: {}", app.session.status()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds {} | Win {:.0}% | Streak {} (best {})",
        app.stats.rounds_finished,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.stats.best_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = if app.session.is_over() {
        "n: New Round | q: Quit"
    } else {
        "A-Z: Guess | Tab: Skip | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameConfig, Session, WordBank};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let bank = WordBank::from_strs(&["CAT"]).unwrap();
        App::new(Session::with_seed(bank, GameConfig::default(), 0))
    }

    #[test]
    fn renders_masked_word() {
        let text = draw(&app());
        assert!(text.contains(" _  _  _ "));
        assert!(text.contains("Round 1"));
        assert!(text.contains("6/6 wrong guesses left"));
    }

    #[test]
    fn renders_revealed_letters() {
        let mut app = app();
        app.guess('a');
        app.guess('z');
        let text = draw(&app);

        assert!(text.contains(" _  A  _ "));
        assert!(text.contains("5/6 wrong guesses left"));
    }

    #[test]
    fn renders_answer_after_loss() {
        let mut app = app();
        for c in ['q', 'w', 'e', 'r', 'y', 'u'] {
            app.guess(c);
        }
        let text = draw(&app);

        assert!(text.contains(" C  A  T "));
        assert!(text.contains("n: New Round"));
    }
}
