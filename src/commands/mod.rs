//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::{run_assist, run_assist_with};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{ConsoleInput, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fixed-seed RNG when a seed is given, otherwise seeded from the thread RNG
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}
