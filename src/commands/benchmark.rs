//! Benchmark command
//!
//! Plays the codebreaker against every code in the space (or a prefix of it)
//! and collects round statistics. Games run in parallel, each with its own
//! solver state and RNG.

use crate::core::{Code, CodeSpace, Feedback};
use crate::solver::SolverState;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Only play the first `limit` codes of the space
    pub limit: Option<usize>,
    pub max_rounds: usize,
    /// Base seed; game `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            limit: None,
            max_rounds: 10,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
    /// Codes that took the most rounds, hardest first
    pub hardest: Vec<(Code, usize)>,
}

/// Run the codebreaker against many secrets
pub fn run_benchmark(space: &CodeSpace, config: &BenchmarkConfig) -> BenchmarkResult {
    let secrets = &space.codes()[..config.limit.unwrap_or(space.len()).min(space.len())];
    info!("benchmarking {} games", secrets.len());

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results: Vec<(Code, Option<usize>)> = secrets
        .par_iter()
        .enumerate()
        .map(|(i, &secret)| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let rounds = play_out(space, secret, config.max_rounds, &mut rng);
            pb.inc(1);
            (secret, rounds)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved_rounds = Vec::with_capacity(results.len());
    for &(_, rounds) in &results {
        if let Some(n) = rounds {
            *distribution.entry(n).or_insert(0) += 1;
            solved_rounds.push(n);
        }
    }

    let solved = solved_rounds.len();
    let total_games = results.len();
    let average_rounds = if solved > 0 {
        solved_rounds.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(Code, usize)> = results
        .iter()
        .filter_map(|&(code, rounds)| rounds.map(|n| (code, n)))
        .collect();
    hardest.sort_by_key(|&(code, n)| (std::cmp::Reverse(n), code));
    hardest.truncate(5);

    info!("benchmark finished in {:.2}s", duration.as_secs_f64());

    BenchmarkResult {
        total_games,
        solved,
        failed: total_games - solved,
        average_rounds,
        min_rounds: solved_rounds.iter().copied().min().unwrap_or(0),
        max_rounds: solved_rounds.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
        hardest,
    }
}

/// Play one game against `secret`; returns the rounds needed if solved
fn play_out<R: Rng + ?Sized>(
    space: &CodeSpace,
    secret: Code,
    max_rounds: usize,
    rng: &mut R,
) -> Option<usize> {
    let mut state = SolverState::new(space);
    let mut last = None;

    for round in 1..=max_rounds {
        let guess = match state.next_guess(last, rng) {
            Ok(guess) => guess,
            Err(e) => {
                warn!("gave up on {secret}: {e}");
                return None;
            }
        };

        let feedback = Feedback::calculate(&guess, &secret);
        if feedback.is_solved() {
            return Some(round);
        }
        last = Some((guess, feedback));
    }

    None
}
