//! Code solving command
//!
//! Lets the computer break a given secret and records every step.

use super::seeded_rng;
use crate::core::{Code, CodeSpace, Feedback};
use crate::solver::SolverState;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_rounds: usize,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_rounds: 10,
            seed: None,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Break `config.secret` with a fresh codebreaker
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code
/// - The codebreaker runs out of candidates
pub fn solve_code(config: SolveConfig, space: &CodeSpace) -> Result<SolveResult, String> {
    let secret: Code = config
        .secret
        .parse()
        .map_err(|e| format!("Invalid secret code: {e}"))?;

    let mut rng = seeded_rng(config.seed);
    let mut state = SolverState::new(space);
    let mut steps = Vec::new();

    for _ in 0..config.max_rounds {
        let candidates_before = state.candidate_count();
        let guess = state.next_guess(None, &mut rng).map_err(|e| e.to_string())?;

        let feedback = Feedback::calculate(&guess, &secret);
        let candidates_after = state.observe(guess, feedback);

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                steps,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        secret,
    })
}
