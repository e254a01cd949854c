//! Players
//!
//! A player can make a secret code and make guesses. Humans answer through an
//! [`InputProvider`]; the computer uses the codebreaker in [`crate::solver`].

use super::GameError;
use super::board::Round;
use crate::core::{Code, CodeSpace};
use crate::solver::SolverState;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Something that can sit at the board
pub trait Player {
    fn name(&self) -> &str;

    /// Choose the secret code for a game where this player is codemaker
    ///
    /// # Errors
    /// Returns an error if the player cannot provide a code.
    fn make_code(&mut self) -> Result<Code, GameError>;

    /// Choose the next guess given the previous round, if any
    ///
    /// # Errors
    /// Returns an error if the player cannot provide a guess.
    fn make_guess(&mut self, last: Option<Round>) -> Result<Code, GameError>;

    /// Forget anything learned during the previous game
    fn reset(&mut self) {}
}

/// Source of codes typed in by a human
pub trait InputProvider {
    /// Ask for a code
    ///
    /// # Errors
    /// Returns an error if no valid code could be read.
    fn read_code(&mut self, prompt: &str) -> Result<Code, GameError>;
}

/// A human player whose moves come from an input provider
pub struct HumanPlayer<I> {
    name: String,
    input: I,
}

impl<I: InputProvider> HumanPlayer<I> {
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<I: InputProvider> Player for HumanPlayer<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_code(&mut self) -> Result<Code, GameError> {
        let prompt = format!("{}, please enter your mastercode", self.name);
        self.input.read_code(&prompt)
    }

    fn make_guess(&mut self, _last: Option<Round>) -> Result<Code, GameError> {
        let prompt = format!("{}, make your guess", self.name);
        self.input.read_code(&prompt)
    }
}

/// The computer player
///
/// Owns its own solver state, so each computer player narrows its own
/// candidates and nothing carries over between games.
pub struct ComputerPlayer<'a> {
    solver: SolverState<'a>,
    rng: StdRng,
}

impl<'a> ComputerPlayer<'a> {
    /// Create a computer player seeded from the thread RNG
    #[must_use]
    pub fn new(space: &'a CodeSpace) -> Self {
        Self::with_rng(space, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a computer player with a fixed seed
    #[must_use]
    pub fn seeded(space: &'a CodeSpace, seed: u64) -> Self {
        Self::with_rng(space, StdRng::seed_from_u64(seed))
    }

    fn with_rng(space: &'a CodeSpace, rng: StdRng) -> Self {
        Self {
            solver: SolverState::new(space),
            rng,
        }
    }

    /// Codes the computer still considers possible
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.solver.candidate_count()
    }
}

impl Player for ComputerPlayer<'_> {
    fn name(&self) -> &str {
        "Computer"
    }

    fn make_code(&mut self) -> Result<Code, GameError> {
        Ok(Code::random(&mut self.rng))
    }

    fn make_guess(&mut self, last: Option<Round>) -> Result<Code, GameError> {
        let last = last.map(|r| (r.guess, r.feedback));
        Ok(self.solver.next_guess(last, &mut self.rng)?)
    }

    fn reset(&mut self) {
        self.solver.reset();
    }
}

/// Either kind of player
///
/// Lets a game seat a human and a computer side by side with static dispatch.
pub enum AnyPlayer<'a, I> {
    Human(HumanPlayer<I>),
    Computer(ComputerPlayer<'a>),
}

impl<I: InputProvider> Player for AnyPlayer<'_, I> {
    fn name(&self) -> &str {
        match self {
            Self::Human(p) => p.name(),
            Self::Computer(p) => p.name(),
        }
    }

    fn make_code(&mut self) -> Result<Code, GameError> {
        match self {
            Self::Human(p) => p.make_code(),
            Self::Computer(p) => p.make_code(),
        }
    }

    fn make_guess(&mut self, last: Option<Round>) -> Result<Code, GameError> {
        match self {
            Self::Human(p) => p.make_guess(last),
            Self::Computer(p) => p.make_guess(last),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Human(p) => p.reset(),
            Self::Computer(p) => p.reset(),
        }
    }
}
