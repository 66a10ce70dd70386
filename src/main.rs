//! Hangman - CLI
//!
//! Hangman with TUI and line modes, plus a simulator for automatic strategies.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulationConfig, run_simple, run_simulation},
    engine::{GameConfig, Session, WordBank},
    output::print_simulation_result,
    wordlists::{default_bank, loader::load_from_file},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman in the terminal, with an automatic-strategy simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Wrong guesses allowed before a round is lost (1-26)
    #[arg(short = 'm', long, global = true, default_value_t = GameConfig::DEFAULT_MAX_WRONG_GUESSES)]
    max_wrong: u8,

    /// Seed for secret selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Play many sessions automatically and report statistics
    Simulate {
        /// Number of independent sessions
        #[arg(short = 'n', long, default_value = "100")]
        sessions: usize,

        /// Rounds played in each session
        #[arg(short, long, default_value = "10")]
        rounds: usize,

        /// Strategy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

/// Load the word bank based on the -w flag
fn load_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "builtin" => Ok(default_bank()?),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            WordBank::new(words).with_context(|| format!("no usable words in '{path}'"))
        }
    }
}

fn new_session(bank: WordBank, config: GameConfig, seed: Option<u64>) -> Session {
    match seed {
        Some(seed) => Session::with_seed(bank, config, seed),
        None => Session::new(bank, config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let bank = load_bank(&cli.wordlist)?;
    let config = GameConfig::new(cli.max_wrong)?;
    info!(words = bank.len(), wordlist = %cli.wordlist, "word bank loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(new_session(bank, config, cli.seed)),
        Commands::Simple => {
            let mut session = new_session(bank, config, cli.seed);
            run_simple(&mut session)?;
            Ok(())
        }
        Commands::Simulate {
            sessions,
            rounds,
            strategy,
        } => {
            run_simulate_command(&bank, config, cli.seed, sessions, rounds, strategy);
            Ok(())
        }
    }
}

fn run_simulate_command(
    bank: &WordBank,
    game: GameConfig,
    seed: Option<u64>,
    sessions: usize,
    rounds: usize,
    strategy: String,
) {
    let mut config = SimulationConfig::new(sessions, rounds, strategy);
    println!(
        "Simulating {} rounds ({sessions} sessions x {rounds}) with the {} strategy over {} words...",
        config.total_rounds(),
        config.strategy,
        bank.len()
    );

    config.seed = seed.unwrap_or_else(rand::random);
    config.game = game;
    config.show_progress = true;

    let result = run_simulation(bank, &config);
    print_simulation_result(&result);
}

fn run_play_command(session: Session) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    run_tui(App::new(session))
}
