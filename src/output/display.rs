//! Display functions for command and game results

use super::formatters::{code_to_discs, create_progress_bar, feedback_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::{GameOutcome, Round};
use colored::Colorize;

/// Print one played round
pub fn print_round(turn: usize, round: &Round) {
    println!(
        "Guess {turn:2}: {}   {} {}",
        code_to_discs(&round.guess),
        feedback_to_pegs(round.feedback),
        format!("({})", round.feedback).bright_black()
    );
}

/// Print who won a game
pub fn print_outcome(outcome: &GameOutcome) {
    println!();
    if outcome.solved {
        println!(
            "{}",
            format!(
                "🎉 {} correctly guessed the code in {} turn{}!",
                outcome.codebreaker,
                outcome.rounds,
                if outcome.rounds == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", format!("{} wins!", outcome.codemaker).yellow().bold());
        println!("The code was: {}", code_to_discs(&outcome.secret));
    }
    println!("Game Over!");
}

/// Print the running scores
pub fn print_scores<'a>(scores: impl Iterator<Item = (&'a str, usize)>) {
    println!("\n{}", "Current Scores".bright_cyan().bold());
    for (name, score) in scores {
        println!("  {name}: {score}");
    }
    println!();
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        code_to_discs(&result.secret).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            code_to_discs(&step.guess),
            feedback_to_pegs(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            result.failed.to_string().red()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for rounds in result.min_rounds..=result.max_rounds {
        let count = result.distribution.get(&rounds).copied().unwrap_or(0);
        if result.solved == 0 {
            break;
        }
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {rounds:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest codes:".yellow().bold());
        for (code, rounds) in &result.hardest {
            println!("   {} ({rounds} rounds)", code_to_discs(code));
        }
    }
}
