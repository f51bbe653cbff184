//! Display functions for command results

use super::formatters::{keyboard_line, result_row, result_to_emoji};
use crate::commands::{ReplayResult, ScoreResult};
use crate::core::WORD_LENGTH;
use crate::game::{GameSnapshot, SessionState, Statistics};
use colored::Colorize;

/// Print the feedback for a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.to_string().bright_yellow().bold(),
        result.result.guess().to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", result_row(&result.result));
    println!("  {}  {}", result.result.to_emoji(), result.result.to_markers());
    println!(
        "\n  Exact: {}   Present: {}",
        result.result.count_exact().to_string().green(),
        result.result.count_present().to_string().yellow()
    );
}

/// Print a replayed game, row by row
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying against: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in result.history.iter().enumerate() {
        println!("\nTurn {}: {} {}", i + 1, result_row(row), row.to_emoji());
    }

    println!();
    match result.state {
        SessionState::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.history.len())
                .green()
                .bold()
        ),
        SessionState::Lost => println!(
            "{}",
            format!("❌ Out of attempts after {} guesses", result.history.len())
                .red()
                .bold()
        ),
        SessionState::InProgress => println!(
            "{}",
            format!(
                "⏸  Still in progress after {} guesses",
                result.history.len()
            )
            .yellow()
        ),
    }

    if result.state.is_terminal() {
        println!("\n{}", result_to_emoji(&result.history, result.max_attempts));
    }
}

/// Print the board, the active row and the keyboard for line-oriented play
pub fn print_board(snapshot: &GameSnapshot) {
    println!();
    for row in &snapshot.history {
        println!("  {}", result_row(row));
    }
    for _ in snapshot.history.len()..snapshot.max_attempts {
        println!("  {}", " · ".repeat(WORD_LENGTH).bright_black());
    }
    println!("\n  {}", keyboard_line(&snapshot.keyboard));
    println!(
        "  Attempt {}/{}\n",
        (snapshot.attempts_used + 1).min(snapshot.max_attempts),
        snapshot.max_attempts
    );
}

/// Print the per-run statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played: {}", stats.total_games);
    println!("   Win rate:     {:.0}%", stats.win_rate());

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = "█".repeat(count).green();
        println!("   {guesses}: {bar} {count}");
    }
}
