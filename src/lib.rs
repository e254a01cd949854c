//! Mastermind Solver
//!
//! A Mastermind game with a computer codebreaker that eliminates every code
//! inconsistent with the feedback so far and guesses at random among the rest.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, CodeSpace, Feedback};
//! use mastermind_solver::solver::SolverState;
//!
//! let secret: Code = "1234".parse().unwrap();
//! let space = CodeSpace::generate();
//! let mut solver = SolverState::new(&space);
//! let mut rng = rand::rng();
//!
//! let mut last = None;
//! loop {
//!     let guess = solver.next_guess(last, &mut rng).unwrap();
//!     let feedback = Feedback::calculate(&guess, &secret);
//!     if feedback.is_solved() {
//!         break;
//!     }
//!     last = Some((guess, feedback));
//! }
//! ```

// Core domain types
pub mod core;

// Codebreaking algorithm
pub mod solver;

// Board, players and the round loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
