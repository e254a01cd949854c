//! Mastermind codebreaker
//!
//! Candidate elimination: every round throws away the codes that could not
//! have produced the observed feedback, then the next guess is drawn from
//! the survivors.

mod engine;
pub mod strategy;

pub use engine::{SolverError, SolverState, filter_candidates};
pub use strategy::{RandomStrategy, Strategy};
