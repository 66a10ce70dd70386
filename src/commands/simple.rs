//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI

use crate::engine::{GuessOutcome, IgnoreReason, Session};
use crate::output::write_round_state;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), stdout.lock())
}

/// Drive a session from line-based input
///
/// Each line is either a command (`quit`, `new`, `help`) or a guess passed
/// verbatim to the engine. Returns when input ends or the player quits.
///
/// # Errors
///
/// Returns any error from the reader or writer.
pub fn play_lines<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: I,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Hangman - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess one letter per line.")?;
    writeln!(out, "Commands: 'new' for a new round, 'quit' to exit, 'help' for this text")?;

    write_round_state(&mut out, &session.snapshot())?;
    prompt(&mut out, session.is_over())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" => {
                session.start_new_round();
                writeln!(out, "\n🔄 Round {} started!", session.round_number())?;
            }
            "help" => {
                writeln!(out, "Type a single letter to guess it.")?;
                writeln!(out, "Commands: 'new', 'quit', 'help'")?;
                prompt(&mut out, session.is_over())?;
                continue;
            }
            _ => {
                let outcome = session.guess(line);
                writeln!(out, "{}", describe(outcome, line))?;
                if outcome.is_ignored() {
                    prompt(&mut out, session.is_over())?;
                    continue;
                }
            }
        }

        write_round_state(&mut out, &session.snapshot())?;
        prompt(&mut out, session.is_over())?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W, over: bool) -> io::Result<()> {
    if over {
        write!(out, "\nType 'new' to play again or 'quit' to exit: ")?;
    } else {
        write!(out, "\nGuess a letter: ")?;
    }
    out.flush()
}

fn describe(outcome: GuessOutcome, input: &str) -> String {
    let letter = input.to_uppercase();
    match outcome {
        GuessOutcome::Hit | GuessOutcome::Won => format!("✓ {letter} is in the word").green().to_string(),
        GuessOutcome::Miss | GuessOutcome::Lost => {
            format!("✗ No {letter} in the word").red().to_string()
        }
        GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed) => {
            format!("You already guessed {letter}").yellow().to_string()
        }
        GuessOutcome::Ignored(IgnoreReason::NotALetter) => {
            "Please enter a single letter A-Z".yellow().to_string()
        }
        GuessOutcome::Ignored(IgnoreReason::RoundOver) => {
            "This round is over. Type 'new' to play again.".yellow().to_string()
        }
    }
}
