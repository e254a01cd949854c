//! Game orchestration
//!
//! Board bookkeeping, human and computer players, and the round loop that
//! drives a game between them.

mod board;
pub mod player;
mod session;

pub use board::{Board, Round};
pub use player::{AnyPlayer, ComputerPlayer, HumanPlayer, InputProvider, Player};
pub use session::{Game, GameConfig, GameOutcome};

use crate::solver::SolverError;
use std::fmt;

/// Error type for a game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was placed before the codemaker set a code
    SecretNotSet,
    /// The game was already scored
    AlreadyFinished,
    /// A human gave no valid code within the allowed attempts
    InputExhausted { attempts: usize },
    /// Reading input failed
    Io(String),
    /// The computer codebreaker ran out of candidates
    Solver(SolverError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretNotSet => write!(f, "No secret code has been set"),
            Self::AlreadyFinished => write!(f, "This game has already been scored"),
            Self::InputExhausted { attempts } => {
                write!(f, "No valid input in {attempts} attempts")
            }
            Self::Io(msg) => write!(f, "Input error: {msg}"),
            Self::Solver(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Solver(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SolverError> for GameError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
