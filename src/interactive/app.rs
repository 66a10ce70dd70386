//! TUI application state and logic

use crate::engine::{GameEvent, GuessOutcome, IgnoreReason, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use tracing::debug;

/// Application state
pub struct App {
    pub session: Session,
    events: Receiver<GameEvent>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

/// Results across rounds of this run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_finished: usize,
    pub wins: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_finished == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds_finished as f64 * 100.0
        }
    }

    fn record(&mut self, won: bool) {
        self.rounds_finished += 1;
        if won {
            self.wins += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }
}

impl App {
    /// Wrap a session, subscribing to its change notifications
    #[must_use]
    pub fn new(mut session: Session) -> Self {
        let (tx, rx) = mpsc::channel();
        session.subscribe(move |event, _| {
            // Receiver lives as long as the app
            let _ = tx.send(event.clone());
        });

        let mut app = Self {
            session,
            events: rx,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Welcome to Hangman! Type letters to guess.", MessageStyle::Info);
        app.announce_round();
        app
    }

    fn announce_round(&mut self) {
        let text = format!(
            "Round {}: {} letters, {} wrong guesses allowed",
            self.session.round_number(),
            self.session.secret().len(),
            self.session.max_wrong_guesses()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn guess(&mut self, c: char) {
        match self.session.guess_char(c) {
            GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed) => {
                let text = format!("Already guessed {}", c.to_ascii_uppercase());
                self.add_message(&text, MessageStyle::Error);
            }
            GuessOutcome::Ignored(IgnoreReason::NotALetter) => {
                self.add_message("Letters A-Z only", MessageStyle::Error);
            }
            GuessOutcome::Ignored(IgnoreReason::RoundOver) => {
                self.add_message("Round over. Press 'n' for a new round.", MessageStyle::Info);
            }
            _ => {}
        }
        self.drain_events();
    }

    pub fn new_round(&mut self) {
        self.session.start_new_round();
        self.drain_events();
    }

    /// Apply pending engine notifications to messages and statistics
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "tui received event");
            match event {
                GameEvent::Guessed { letter, hit: true } => {
                    self.add_message(&format!("{letter} is in the word"), MessageStyle::Success);
                }
                GameEvent::Guessed { letter, hit: false } => {
                    self.add_message(&format!("No {letter} in the word"), MessageStyle::Error);
                }
                GameEvent::RoundWon => {
                    self.stats.record(true);
                    let text = match self.session.wrong_guess_count() {
                        0 => "🏆 FLAWLESS! Not a single miss! 🏆",
                        1 => "🔥 MAGNIFICENT! Only one miss! 🔥",
                        2 | 3 => "✨ SPLENDID! Word solved! ✨",
                        _ => "😅 PHEW! That was close! 😅",
                    };
                    self.add_message(text, MessageStyle::Success);
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                }
                GameEvent::RoundLost => {
                    self.stats.record(false);
                    let text = format!("💀 Out of guesses! The word was {}", self.session.secret());
                    self.add_message(&text, MessageStyle::Error);
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                }
                GameEvent::RoundStarted { .. } => {
                    self.messages.clear();
                    self.announce_round();
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_round(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                let text = format!("Skipped. The word was {}", self.session.secret());
                self.new_round();
                // The new round clears messages
                self.add_message(&text, MessageStyle::Info);
            }
            KeyCode::Char(c) => self.guess(c),
            _ => {}
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
