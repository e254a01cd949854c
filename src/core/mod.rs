//! Core domain types for Mastermind
//!
//! Pegs, codes, feedback scoring and the code space. Everything here is pure
//! and deterministic apart from the random draws, which take the RNG as an
//! argument.

mod code;
mod feedback;
mod peg;
mod space;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use feedback::{Feedback, FeedbackError, Outcome};
pub use peg::{NUM_COLORS, Peg};
pub use space::{CodeSpace, SPACE_SIZE};
