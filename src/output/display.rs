//! Display functions for game state and command results

use super::formatters::{allowance_bar, format_letters, gallows};
use crate::commands::SimulationResult;
use crate::engine::{SessionView, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Write the current round state: gallows, word and letters
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_round_state<W: Write>(out: &mut W, view: &SessionView) -> io::Result<()> {
    let max = usize::from(view.max_wrong);

    writeln!(out)?;
    for line in gallows(view.wrong_count, max) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "  Word:    {}", view.reveal.to_string().bright_white().bold())?;
    writeln!(out, "  Guessed: {}", format_letters(&view.guessed))?;
    writeln!(out, "  Wrong:   {}", format_letters(&view.wrong).red())?;
    writeln!(
        out,
        "  Lives:   [{}] {}/{}",
        allowance_bar(view.remaining, max, max).green(),
        view.remaining,
        max
    )?;

    match view.status {
        Status::Playing => {}
        Status::Won => {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                format!("🎉 Solved in round {}!", view.round).bright_green().bold()
            )?;
        }
        Status::Lost => {
            writeln!(out)?;
            let answer = view.answer.as_ref().map_or("?", |w| w.text());
            writeln!(
                out,
                "{} The word was {}",
                "💀 Out of guesses.".red().bold(),
                answer.bright_yellow().bold()
            )?;
        }
    }
    Ok(())
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Wins / losses:    {} / {}", result.wins.to_string().green(), result.losses.to_string().red());
    println!("   Avg wrong:        {:.2}", result.average_wrong);
    println!("   Avg guesses:      {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.wins > 0 {
        println!("\n📈 {}", "Wrong guesses in wins:".bright_cyan().bold());
        for wrong in 0..usize::from(result.max_wrong) {
            if let Some(&count) = result.wrong_distribution.get(&wrong) {
                let pct = (count as f64 / result.wins as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░"
                        .repeat(40_usize.saturating_sub(bar_width))
                        .bright_black()
                );
                println!("   {wrong}: {bar} {count:5} ({pct:5.1}%)");
            }
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n🔥 {}", "Most missed words:".bright_cyan().bold());
        for (word, count) in &result.hardest_words {
            println!("   {:<12} lost {count}x", word.bright_white());
        }
    }
}
